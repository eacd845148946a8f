/// Scene, animation and page-interaction tuning constants.
///
/// These constants express intended behavior (e.g., durations, smoothing
/// factors, thresholds) and keep magic numbers out of the code.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 50.0;

// Output surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4;

// Background plane
pub const PLANE_SIZE: f32 = 200.0;
pub const PLANE_Z: f32 = -50.0;
pub const SCROLL_PLANE_FACTOR: f32 = 0.01; // world units per scrolled css pixel

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPREAD_XY: f32 = 100.0;
pub const PARTICLE_SPREAD_Z: f32 = 30.0;
pub const PARTICLE_SIZE: f32 = 80.0; // point size numerator, divided by view depth

// Floating hearts
pub const HEART_COUNT: usize = 15;
pub const HEART_SPREAD_XY: f32 = 80.0;
pub const HEART_SPREAD_Z: f32 = 20.0;
pub const HEART_Z_SHIFT: f32 = -10.0;
pub const HEART_SEGMENT_SAMPLES: usize = 12; // points sampled per Bezier segment
pub const HEART_BASE_ROTATION: f32 = std::f32::consts::PI; // tip pointing down
pub const HEART_FLOAT_Y_PER_FRAME: f32 = 0.02;
pub const HEART_FLOAT_X_PER_FRAME: f32 = 0.01;
pub const HEART_FLOAT_X_RATE: f32 = 0.7; // horizontal phase speed relative to vertical

// Pointer parallax
pub const PARALLAX_RANGE: f32 = 3.0; // camera travel at the viewport edge
pub const PARALLAX_SMOOTHING: f32 = 0.02; // per reference frame
pub const REFERENCE_FPS: f32 = 60.0;

// Counter animation
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Carousel
pub const CAROUSEL_INTERVAL_MS: i32 = 5000;

// Page interactions
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
