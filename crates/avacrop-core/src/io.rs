use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Load and decode a source image, flattening to opaque RGB.
pub fn load_source(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}

/// Save a rendered crop as PNG.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Encode a rendered crop to PNG bytes, the form handed to an
/// [`AvatarStore`](crate::storage::AvatarStore).
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
