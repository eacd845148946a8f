use glam::Vec2;

/// Latest pointer and scroll readings, written by event handlers and read
/// once per frame by the renderer.
#[derive(Default, Clone, Copy, Debug)]
pub struct SceneInput {
    /// Pointer in [-1, 1] across the viewport, y growing downward.
    pub pointer: Vec2,
    /// Window scroll offset in css pixels.
    pub scroll_y: f64,
}

/// Map a client-space pointer position to [-1, 1] on both axes.
#[inline]
pub fn pointer_normalized(client_x: f64, client_y: f64, inner_w: f64, inner_h: f64) -> Vec2 {
    if inner_w <= 0.0 || inner_h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((client_x / inner_w - 0.5) * 2.0) as f32,
        ((client_y / inner_h - 0.5) * 2.0) as f32,
    )
}

/// Backing-store size for a css size, with the device pixel ratio capped.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let ratio = if dpr > 0.0 { dpr.min(max_dpr) } else { 1.0 };
    let w = (css_w * ratio).floor().max(1.0) as u32;
    let h = (css_h * ratio).floor().max(1.0) as u32;
    (w, h)
}
