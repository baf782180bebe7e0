/// Convert a rendered RGB crop to an egui ColorImage.
pub fn rgb_to_color_image(img: &image::RgbImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    let mut pixels = Vec::with_capacity((w * h) as usize);

    for p in img.pixels() {
        pixels.push(egui::Color32::from_rgb(p.0[0], p.0[1], p.0[2]));
    }

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
