// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_scene() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    // Background plane and every particle/heart sit between near and far.
    assert!(CAMERA_Z - PLANE_Z < CAMERA_FAR);
    assert!(CAMERA_Z - PARTICLE_SPREAD_Z / 2.0 > CAMERA_NEAR);
    assert!(CAMERA_Z - (HEART_Z_SHIFT + HEART_SPREAD_Z / 2.0) > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn plane_covers_the_particle_field() {
    assert!(PLANE_SIZE >= PARTICLE_SPREAD_XY);
    assert!(PLANE_Z < -PARTICLE_SPREAD_Z / 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_thresholds_are_fractions() {
    assert!(PARALLAX_SMOOTHING > 0.0 && PARALLAX_SMOOTHING < 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(HEART_FLOAT_X_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(COUNTER_DURATION_MS > 0.0);
    assert!(CAROUSEL_INTERVAL_MS > 0);
    assert!(REFERENCE_FPS > 0.0);
}

#[test]
fn counts_and_sampling() {
    assert_eq!(PARTICLE_COUNT, 100);
    assert_eq!(HEART_COUNT, 15);
    assert!(HEART_SEGMENT_SAMPLES >= 1);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!((1.0..=3.0).contains(&MAX_PIXEL_RATIO));
}
