use image::{Rgb, RgbImage};

use crate::geometry::{source_window, Offset};

/// Render the square crop framed by `(scale, offset)` over `source` into a
/// new `output_size` x `output_size` bitmap.
///
/// The sampled source square depends only on `(scale, offset, viewport_size)`,
/// so a small live preview and a large final export of the same state frame
/// the identical region. Sampling is bilinear with clamped edges, which keeps
/// repeated calls pixel-identical.
///
/// Returns `None` instead of rendering when the geometry is degenerate
/// (undecoded/empty source, non-positive scale, zero output size).
pub fn render_crop(
    source: &RgbImage,
    scale: f64,
    offset: Offset,
    viewport_size: u32,
    output_size: u32,
) -> Option<RgbImage> {
    let (w, h) = source.dimensions();
    if w == 0 || h == 0 || viewport_size == 0 || output_size == 0 {
        return None;
    }
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }

    let win = source_window(scale, offset, w, h, viewport_size);
    let step = win.side / output_size as f64;

    let mut out = RgbImage::new(output_size, output_size);
    for oy in 0..output_size {
        let sy = win.y + (oy as f64 + 0.5) * step - 0.5;
        for ox in 0..output_size {
            let sx = win.x + (ox as f64 + 0.5) * step - 0.5;
            out.put_pixel(ox, oy, Rgb(sample_bilinear(source, sx, sy)));
        }
    }

    Some(out)
}

/// Bilinear sample at fractional source coordinates, clamping to the edge
/// pixels so the kernel never reads out of bounds.
fn sample_bilinear(source: &RgbImage, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = source.dimensions();

    let x = x.clamp(0.0, (w - 1) as f64);
    let y = y.clamp(0.0, (h - 1) as f64);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = source.get_pixel(x0, y0).0;
    let p10 = source.get_pixel(x1, y0).0;
    let p01 = source.get_pixel(x0, y1).0;
    let p11 = source.get_pixel(x1, y1).0;

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
        let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    out
}
