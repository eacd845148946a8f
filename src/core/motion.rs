// Scene layout generation and per-frame motion.
//
// Motion is expressed as closed-form functions of elapsed time and the
// fixed per-object parameters drawn at startup, so a frame never depends on
// the frames before it (the camera ease being the one exception: it follows
// the pointer, which has no closed form).

use crate::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Per-particle attributes; the vertex stage animates from these.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleSeed {
    pub position: [f32; 3],
    pub scale: f32,
    pub speed: f32,
    pub offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartTint {
    Amber,
    Coral,
}

/// Fixed parameters for one floating heart.
#[derive(Clone, Copy, Debug)]
pub struct HeartSeed {
    pub base: Vec3,
    pub scale: f32,
    pub speed: f32,
    /// Radians per reference frame.
    pub rot_speed: f32,
    pub float_offset: f32,
    pub tint: HeartTint,
    pub opacity: f32,
}

/// Pose of a heart at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPose {
    pub position: Vec3,
    pub rotation_z: f32,
    pub scale: f32,
}

impl HeartPose {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_z(self.rotation_z),
            self.position,
        )
    }
}

#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub particles: Vec<ParticleSeed>,
    pub hearts: Vec<HeartSeed>,
}

impl SceneLayout {
    /// Scatter `particle_count` particles and `heart_count` hearts.
    pub fn generate(rng: &mut impl Rng, particle_count: usize, heart_count: usize) -> Self {
        let particles = (0..particle_count).map(|_| random_particle(rng)).collect();
        let hearts = (0..heart_count).map(|_| random_heart(rng)).collect();
        Self { particles, hearts }
    }
}

#[inline]
fn centered(rng: &mut impl Rng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

fn random_particle(rng: &mut impl Rng) -> ParticleSeed {
    ParticleSeed {
        position: [
            centered(rng, PARTICLE_SPREAD_XY),
            centered(rng, PARTICLE_SPREAD_XY),
            centered(rng, PARTICLE_SPREAD_Z),
        ],
        scale: rng.gen::<f32>() * 0.5 + 0.5,
        speed: rng.gen::<f32>() * 0.5 + 0.2,
        offset: rng.gen::<f32>() * TAU,
    }
}

fn random_heart(rng: &mut impl Rng) -> HeartSeed {
    let tint = if rng.gen::<f32>() > 0.5 {
        HeartTint::Amber
    } else {
        HeartTint::Coral
    };
    let opacity = 0.15 + rng.gen::<f32>() * 0.15;
    let base = Vec3::new(
        centered(rng, HEART_SPREAD_XY),
        centered(rng, HEART_SPREAD_XY),
        centered(rng, HEART_SPREAD_Z) + HEART_Z_SHIFT,
    );
    HeartSeed {
        base,
        scale: rng.gen::<f32>() * 1.5 + 0.5,
        speed: rng.gen::<f32>() * 0.3 + 0.1,
        rot_speed: (rng.gen::<f32>() - 0.5) * 0.02,
        float_offset: rng.gen::<f32>() * TAU,
        tint,
        opacity,
    }
}

/// Heart pose after `t` seconds.
///
/// Integrates a drift of `sin(t*speed + offset)` vertically and
/// `cos(0.7*t*speed + offset)` horizontally, scaled to the per-frame step at
/// the reference frame rate, plus a constant spin.
pub fn heart_pose(seed: &HeartSeed, t: f32) -> HeartPose {
    let s = seed.speed.max(1e-3);
    let o = seed.float_offset;
    let y_rate = HEART_FLOAT_Y_PER_FRAME * REFERENCE_FPS;
    let x_rate = HEART_FLOAT_X_PER_FRAME * REFERENCE_FPS;
    let kx = HEART_FLOAT_X_RATE * s;

    let dy = y_rate / s * (o.cos() - (s * t + o).cos());
    let dx = x_rate / kx * ((kx * t + o).sin() - o.sin());
    HeartPose {
        position: seed.base + Vec3::new(dx, dy, 0.0),
        rotation_z: HEART_BASE_ROTATION + seed.rot_speed * REFERENCE_FPS * t,
        scale: seed.scale,
    }
}

/// Camera target for a pointer in normalized [-1, 1] viewport coordinates
/// (y down, as reported by the browser).
#[inline]
pub fn parallax_target(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * PARALLAX_RANGE, -pointer.y * PARALLAX_RANGE)
}

/// Blend factor for `dt_sec`; exactly the per-frame factor at the
/// reference rate.
#[inline]
pub fn parallax_alpha(dt_sec: f32) -> f32 {
    let frames = (dt_sec.max(0.0) * REFERENCE_FPS).min(REFERENCE_FPS);
    1.0 - (1.0 - PARALLAX_SMOOTHING).powf(frames)
}

/// Move the camera's xy toward the pointer target.
#[inline]
pub fn ease_camera(current: Vec2, pointer: Vec2, dt_sec: f32) -> Vec2 {
    current + (parallax_target(pointer) - current) * parallax_alpha(dt_sec)
}

/// Vertical offset of the background plane for a page scroll position.
#[inline]
pub fn plane_offset_y(scroll_y: f64) -> f32 {
    scroll_y as f32 * SCROLL_PLANE_FACTOR
}
