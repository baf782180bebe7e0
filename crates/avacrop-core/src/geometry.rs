use crate::consts::SCALE_EPSILON;

/// Pan translation of the image center relative to the viewport center,
/// in viewport logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned square in source-image coordinates that the viewport
/// currently frames. `side` may be fractional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceWindow {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

/// Smallest scale at which the scaled image still covers the viewport in
/// both dimensions: `max(viewport/w, viewport/h)`.
///
/// Zero dimensions are snapped to 1 rather than divided by.
pub fn min_scale(natural_w: u32, natural_h: u32, viewport_size: u32) -> f64 {
    let w = natural_w.max(1) as f64;
    let h = natural_h.max(1) as f64;
    let v = viewport_size.max(1) as f64;
    (v / w).max(v / h)
}

/// Maximum legal pan distance from center along each axis at the given
/// scale. Zero on an axis means the image is pinned there.
pub fn pan_bounds(scale: f64, natural_w: u32, natural_h: u32, viewport_size: u32) -> (f64, f64) {
    let v = viewport_size as f64;
    let max_x = ((natural_w as f64 * scale - v) / 2.0).max(0.0);
    let max_y = ((natural_h as f64 * scale - v) / 2.0).max(0.0);
    (max_x, max_y)
}

/// Clamp a proposed offset component-wise to the pan bounds for the given
/// scale, keeping the viewport fully covered by image content.
///
/// Call order matters: apply the scale change first (it may shrink the
/// bounds), then reclamp the offset.
pub fn clamp_offset(
    offset: Offset,
    scale: f64,
    natural_w: u32,
    natural_h: u32,
    viewport_size: u32,
) -> Offset {
    let (max_x, max_y) = pan_bounds(scale, natural_w, natural_h, viewport_size);
    Offset {
        x: offset.x.clamp(-max_x, max_x),
        y: offset.y.clamp(-max_y, max_y),
    }
}

/// Source-space square the viewport frames at the given scale and offset.
///
/// The on-screen top-left of the scaled image is
/// `x0 = viewport/2 + offset.x - w*scale/2`; mapping the viewport origin
/// back into source space and clamping gives the window. For any offset
/// produced by [`clamp_offset`] the window lies entirely within the image.
pub fn source_window(
    scale: f64,
    offset: Offset,
    natural_w: u32,
    natural_h: u32,
    viewport_size: u32,
) -> SourceWindow {
    let scale = scale.max(SCALE_EPSILON);
    let v = viewport_size as f64;
    let w = natural_w as f64;
    let h = natural_h as f64;

    let side = v / scale;
    let x0 = v / 2.0 + offset.x - w * scale / 2.0;
    let y0 = v / 2.0 + offset.y - h * scale / 2.0;

    // Float roundoff can leave the free range a hair below zero when the
    // image exactly covers the viewport.
    let x = ((0.0 - x0) / scale).clamp(0.0, (w - side).max(0.0));
    let y = ((0.0 - y0) / scale).clamp(0.0, (h - side).max(0.0));

    SourceWindow { x, y, side }
}
