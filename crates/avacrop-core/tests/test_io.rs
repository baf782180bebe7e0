use image::{Rgb, RgbImage};

use avacrop_core::io::{encode_png, load_source, save_png};

fn checker(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

#[test]
fn test_save_load_roundtrip_png() {
    let img = checker(8, 6);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatar.png");

    save_png(&img, &path).unwrap();
    let loaded = load_source(&path).unwrap();

    assert_eq!(loaded.dimensions(), (8, 6));
    assert_eq!(loaded, img);
}

#[test]
fn test_encode_png_is_decodable() {
    let img = checker(4, 4);
    let bytes = encode_png(&img).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded, img);
}

#[test]
fn test_load_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_source(&dir.path().join("nope.png")).is_err());
}
