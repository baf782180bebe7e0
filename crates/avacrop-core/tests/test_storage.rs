use image::{Rgb, RgbImage};

use avacrop_core::error::CropError;
use avacrop_core::io::encode_png;
use avacrop_core::storage::{AvatarStore, DirStore};

#[test]
fn test_put_writes_png_and_returns_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::new(dir.path());

    let img = RgbImage::from_pixel(4, 4, Rgb([10, 200, 30]));
    let bytes = encode_png(&img).unwrap();

    let url = store.put("user-42", &bytes).unwrap();
    assert!(url.starts_with("file://"));
    assert!(url.contains("user-42"));

    // The stored bytes decode back to the same image.
    let stored = std::fs::read(dir.path().join("user-42.png")).unwrap();
    let decoded = image::load_from_memory(&stored).unwrap().to_rgb8();
    assert_eq!(decoded, img);
}

#[test]
fn test_put_overwrites_existing_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::new(dir.path());

    let first = encode_png(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))).unwrap();
    let second = encode_png(&RgbImage::from_pixel(2, 2, Rgb([9, 8, 7]))).unwrap();

    store.put("user-1", &first).unwrap();
    store.put("user-1", &second).unwrap();

    let stored = std::fs::read(dir.path().join("user-1.png")).unwrap();
    assert_eq!(stored, second);
}

#[test]
fn test_put_missing_root_is_opaque_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::new(dir.path().join("does-not-exist"));

    let err = store.put("user-1", &[1, 2, 3]).unwrap_err();
    match err {
        CropError::Storage(msg) => assert!(!msg.is_empty()),
        other => panic!("expected storage error, got {other:?}"),
    }
}
