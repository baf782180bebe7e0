/// Side length (logical pixels) of the interactive crop viewport.
pub const DEFAULT_VIEWPORT_SIZE: u32 = 180;

/// Side length (pixels) of the final exported avatar.
pub const DEFAULT_EXPORT_SIZE: u32 = 512;

/// Upper end of the zoom range, as a multiple of the minimum scale.
pub const MAX_ZOOM_FACTOR: f64 = 4.0;

/// Smallest scale the geometry will divide by.
pub const SCALE_EPSILON: f64 = 1e-12;
