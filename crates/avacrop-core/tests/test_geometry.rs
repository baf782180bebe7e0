use approx::assert_abs_diff_eq;

use avacrop_core::geometry::{clamp_offset, min_scale, pan_bounds, source_window, Offset};

#[test]
fn test_min_scale_landscape() {
    // 800x600 into a 180 viewport: height is the binding dimension.
    let s = min_scale(800, 600, 180);
    assert_abs_diff_eq!(s, 0.3, epsilon = 1e-12);
}

#[test]
fn test_min_scale_portrait() {
    let s = min_scale(600, 800, 180);
    assert_abs_diff_eq!(s, 0.3, epsilon = 1e-12);
}

#[test]
fn test_min_scale_square() {
    let s = min_scale(400, 400, 180);
    assert_abs_diff_eq!(s, 0.45, epsilon = 1e-12);
}

#[test]
fn test_min_scale_small_image_upscales() {
    // Sources smaller than the viewport are accepted; the minimum scale
    // is then greater than 1.
    let s = min_scale(90, 60, 180);
    assert_abs_diff_eq!(s, 3.0, epsilon = 1e-12);
}

#[test]
fn test_min_scale_is_minimal() {
    for &(w, h) in &[(800u32, 600u32), (400, 400), (181, 7000), (90, 60)] {
        let s = min_scale(w, h, 180);
        assert!(w as f64 * s >= 180.0 - 1e-9);
        assert!(h as f64 * s >= 180.0 - 1e-9);

        // Any smaller scale stops covering at least one dimension.
        let smaller = s * 0.999;
        assert!(w as f64 * smaller < 180.0 || h as f64 * smaller < 180.0);
    }
}

#[test]
fn test_min_scale_zero_dims_do_not_panic() {
    // Defensive path: degenerate input snaps to 1 instead of dividing by zero.
    let s = min_scale(0, 0, 180);
    assert!(s.is_finite());
    assert!(s > 0.0);
}

#[test]
fn test_pan_bounds_at_exact_cover() {
    // 600 * 0.3 == 180: the image exactly covers the viewport vertically,
    // so vertical panning is pinned.
    let (max_x, max_y) = pan_bounds(0.3, 800, 600, 180);
    assert_abs_diff_eq!(max_x, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max_y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_clamp_offset_landscape_scenario() {
    // 800x600 at min scale 0.3: free horizontally up to
    // (800*0.3 - 180)/2 = 30, pinned vertically.
    let clamped = clamp_offset(Offset::new(50.0, 50.0), 0.3, 800, 600, 180);
    assert_abs_diff_eq!(clamped.x, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(clamped.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_clamp_offset_square_scenario() {
    // 400x400 at double the minimum scale (0.9):
    // (400*0.9 - 180)/2 = 90 on both axes.
    let clamped = clamp_offset(Offset::new(-100.0, 200.0), 0.9, 400, 400, 180);
    assert_abs_diff_eq!(clamped.x, -90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(clamped.y, 90.0, epsilon = 1e-9);
}

#[test]
fn test_clamp_offset_inside_bounds_unchanged() {
    let offset = Offset::new(-15.0, 40.0);
    let clamped = clamp_offset(offset, 0.9, 400, 400, 180);
    assert_eq!(clamped, offset);
}

#[test]
fn test_pin_at_minimum_square() {
    // Square image at minimum scale: no pan possible on either axis,
    // whatever offset is proposed.
    let s = min_scale(400, 400, 180);
    for &(x, y) in &[(1.0, 1.0), (-500.0, 3.0), (0.01, -0.01), (1e6, -1e6)] {
        let clamped = clamp_offset(Offset::new(x, y), s, 400, 400, 180);
        assert_abs_diff_eq!(clamped.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(clamped.y, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_source_window_centered_at_minimum() {
    // 800x600 at min scale, no pan: the window is the full image height,
    // horizontally centered.
    let win = source_window(0.3, Offset::ZERO, 800, 600, 180);
    assert_abs_diff_eq!(win.side, 600.0, epsilon = 1e-9);
    assert_abs_diff_eq!(win.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(win.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_source_window_side_shrinks_with_zoom() {
    let wide = source_window(0.45, Offset::ZERO, 400, 400, 180);
    let tight = source_window(0.9, Offset::ZERO, 400, 400, 180);
    assert_abs_diff_eq!(wide.side, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tight.side, 200.0, epsilon = 1e-9);
}

#[test]
fn test_coverage_invariant() {
    // For every scale at or above the minimum and every clamped offset,
    // the sampling window stays inside the source bounds.
    let cases = [(800u32, 600u32), (400, 400), (181, 7000), (90, 60), (1920, 1080)];
    let proposals = [
        Offset::new(0.0, 0.0),
        Offset::new(1e4, 1e4),
        Offset::new(-1e4, 37.5),
        Offset::new(13.0, -250.0),
    ];

    for &(w, h) in &cases {
        let min = min_scale(w, h, 180);
        for factor in [1.0, 1.25, 2.0, 3.7] {
            let scale = min * factor;
            for &proposed in &proposals {
                let offset = clamp_offset(proposed, scale, w, h, 180);
                let win = source_window(scale, offset, w, h, 180);
                assert!(win.x >= -1e-9);
                assert!(win.y >= -1e-9);
                assert!(win.x + win.side <= w as f64 + 1e-9);
                assert!(win.y + win.side <= h as f64 + 1e-9);
            }
        }
    }
}

#[test]
fn test_source_window_tracks_offset() {
    // 8x4 source, viewport 4, scale 1: horizontal freedom of +-2.
    // Panning the image right (positive offset) exposes the left edge.
    let left = source_window(1.0, Offset::new(2.0, 0.0), 8, 4, 4);
    let right = source_window(1.0, Offset::new(-2.0, 0.0), 8, 4, 4);
    assert_abs_diff_eq!(left.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.x, 4.0, epsilon = 1e-9);
}
