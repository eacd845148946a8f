// Heart outline and its triangulation.

use glam::Vec2;

/// Outline start point.
pub const HEART_START: [f32; 2] = [0.5, 0.5];

/// Cubic segments as (control 1, control 2, end), continuing from the
/// previous end point and closing back on [`HEART_START`].
pub const HEART_SEGMENTS: [[[f32; 2]; 3]; 6] = [
    [[0.5, 0.5], [0.4, 0.0], [0.0, 0.0]],
    [[-0.6, 0.0], [-0.6, 0.7], [-0.6, 0.7]],
    [[-0.6, 1.1], [-0.3, 1.54], [0.5, 1.9]],
    [[1.2, 1.54], [1.6, 1.1], [1.6, 0.7]],
    [[1.6, 0.7], [1.6, 0.0], [1.0, 0.0]],
    [[0.7, 0.0], [0.5, 0.5], [0.5, 0.5]],
];

/// Fan origin. The outline is star-shaped around this point (it sits on
/// the symmetry axis between the notch and the tip).
pub const HEART_FAN_CENTER: [f32; 2] = [0.5, 0.85];

#[inline]
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Closed outline with `samples` points per segment. The start point
/// appears once; the closing point is not repeated.
pub fn heart_outline(samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    let mut points = Vec::with_capacity(HEART_SEGMENTS.len() * samples);
    let mut from = Vec2::from(HEART_START);
    for [c1, c2, end] in HEART_SEGMENTS {
        let (c1, c2, end) = (Vec2::from(c1), Vec2::from(c2), Vec2::from(end));
        for i in 0..samples {
            let t = i as f32 / samples as f32;
            points.push(cubic_bezier(from, c1, c2, end, t));
        }
        from = end;
    }
    points
}

/// Triangle list (3 vertices per triangle) covering the heart.
pub fn heart_triangles(samples: usize) -> Vec<[f32; 2]> {
    let outline = heart_outline(samples);
    let center = Vec2::from(HEART_FAN_CENTER);
    let mut verts = Vec::with_capacity(outline.len() * 3);
    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        verts.push(center.to_array());
        verts.push(a.to_array());
        verts.push(b.to_array());
    }
    verts
}

/// Twice the signed area of triangle `abc` (positive when counter-clockwise).
#[inline]
pub fn signed_area2(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}
