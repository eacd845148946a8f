// Host-side tests for scene layout and motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use motion::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{PI, TAU};

fn seed_at_origin(speed: f32, offset: f32, rot_speed: f32) -> HeartSeed {
    HeartSeed {
        base: Vec3::ZERO,
        scale: 1.0,
        speed,
        rot_speed,
        float_offset: offset,
        tint: HeartTint::Coral,
        opacity: 0.2,
    }
}

#[test]
fn layout_has_requested_counts() {
    let layout = SceneLayout::generate(&mut StdRng::seed_from_u64(7), PARTICLE_COUNT, HEART_COUNT);
    assert_eq!(layout.particles.len(), 100);
    assert_eq!(layout.hearts.len(), 15);
}

#[test]
fn particles_stay_inside_their_volume() {
    let layout = SceneLayout::generate(&mut StdRng::seed_from_u64(11), 500, 0);
    for p in &layout.particles {
        let [x, y, z] = p.position;
        assert!(x.abs() <= PARTICLE_SPREAD_XY / 2.0);
        assert!(y.abs() <= PARTICLE_SPREAD_XY / 2.0);
        assert!(z.abs() <= PARTICLE_SPREAD_Z / 2.0);
        assert!((0.5..=1.0).contains(&p.scale));
        assert!((0.2..=0.7).contains(&p.speed));
        assert!((0.0..=TAU).contains(&p.offset));
    }
}

#[test]
fn hearts_stay_inside_their_volume() {
    let layout = SceneLayout::generate(&mut StdRng::seed_from_u64(3), 0, 300);
    let mut tints = (0, 0);
    for h in &layout.hearts {
        assert!(h.base.x.abs() <= HEART_SPREAD_XY / 2.0);
        assert!(h.base.y.abs() <= HEART_SPREAD_XY / 2.0);
        assert!(h.base.z <= 0.0 && h.base.z >= -20.0);
        assert!((0.5..=2.0).contains(&h.scale));
        assert!((0.1..=0.4).contains(&h.speed));
        assert!(h.rot_speed.abs() <= 0.01);
        assert!((0.15..=0.30).contains(&h.opacity));
        match h.tint {
            HeartTint::Amber => tints.0 += 1,
            HeartTint::Coral => tints.1 += 1,
        }
    }
    assert!(tints.0 > 0 && tints.1 > 0);
}

#[test]
fn same_seed_same_layout() {
    let a = SceneLayout::generate(&mut StdRng::seed_from_u64(42), 10, 4);
    let b = SceneLayout::generate(&mut StdRng::seed_from_u64(42), 10, 4);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
    }
    for (ha, hb) in a.hearts.iter().zip(&b.hearts) {
        assert_eq!(ha.base, hb.base);
    }
}

#[test]
fn heart_starts_at_base_tip_down() {
    let mut seed = seed_at_origin(0.25, 1.3, 0.004);
    seed.base = Vec3::new(4.0, -2.0, -12.0);
    seed.scale = 1.7;
    let pose = heart_pose(&seed, 0.0);
    assert!((pose.position - seed.base).length() < 1e-5);
    assert!((pose.rotation_z - PI).abs() < 1e-6);
    assert_eq!(pose.scale, 1.7);
}

#[test]
fn heart_drift_matches_per_frame_step() {
    // At 60 fps each frame moves y by 0.02*sin(t*speed + offset) and x by
    // 0.01*cos(0.7*t*speed + offset); check the velocity at a few times.
    let seed = seed_at_origin(0.3, 0.8, 0.0);
    let h = 1e-3;
    for &t in &[0.5_f32, 3.0, 7.25] {
        let a = heart_pose(&seed, t).position;
        let b = heart_pose(&seed, t + h).position;
        let v = (b - a) / h;
        let vy = 0.02 * 60.0 * (t * 0.3 + 0.8).sin();
        let vx = 0.01 * 60.0 * (0.7 * t * 0.3 + 0.8).cos();
        assert!((v.y - vy).abs() < 2e-2, "vy {} vs {} at t={t}", v.y, vy);
        assert!((v.x - vx).abs() < 2e-2, "vx {} vs {} at t={t}", v.x, vx);
        assert_eq!(v.z, 0.0);
    }
}

#[test]
fn heart_drift_is_bounded() {
    let seed = seed_at_origin(0.1, 0.0, 0.0);
    for i in 0..2000 {
        let p = heart_pose(&seed, i as f32 * 0.5).position;
        // Amplitudes are 1.2/s and 0.6/(0.7s), doubled peak to peak.
        assert!(p.y.abs() <= 2.0 * 1.2 / 0.1 + 1e-3);
        assert!(p.x.abs() <= 2.0 * 0.6 / 0.07 + 1e-3);
    }
}

#[test]
fn heart_spins_at_rot_speed_per_frame() {
    let seed = seed_at_origin(0.2, 0.0, 0.01);
    let pose = heart_pose(&seed, 1.0);
    assert!((pose.rotation_z - (PI + 0.6)).abs() < 1e-5);
}

#[test]
fn parallax_alpha_at_reference_rate() {
    assert!((parallax_alpha(1.0 / 60.0) - 0.02).abs() < 1e-5);
    assert_eq!(parallax_alpha(0.0), 0.0);
    // Slower frames catch up further but never overshoot.
    let slow = parallax_alpha(1.0 / 30.0);
    assert!(slow > 0.02 && slow < 0.05);
    assert!(parallax_alpha(10.0) < 1.0);
}

#[test]
fn camera_eases_toward_pointer() {
    let pointer = Vec2::new(1.0, -1.0);
    assert_eq!(parallax_target(pointer), Vec2::new(3.0, 3.0));

    let mut cam = Vec2::ZERO;
    cam = ease_camera(cam, pointer, 1.0 / 60.0);
    assert!((cam - Vec2::new(0.06, 0.06)).length() < 1e-4);

    for _ in 0..2000 {
        cam = ease_camera(cam, pointer, 1.0 / 60.0);
    }
    assert!((cam - Vec2::new(3.0, 3.0)).length() < 1e-3);
}

#[test]
fn pointer_down_moves_camera_down() {
    // Browser y grows downward; camera y grows upward.
    let target = parallax_target(Vec2::new(0.0, 1.0));
    assert_eq!(target, Vec2::new(0.0, -3.0));
}

#[test]
fn plane_follows_scroll() {
    assert_eq!(plane_offset_y(0.0), 0.0);
    assert!((plane_offset_y(1000.0) - 10.0).abs() < 1e-6);
}

#[test]
fn model_matrix_places_heart() {
    let pose = HeartPose {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation_z: PI,
        scale: 2.0,
    };
    let p = pose.model_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
    assert!((p - Vec3::new(-1.0, 2.0, 3.0)).length() < 1e-5);
}
