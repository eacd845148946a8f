use glam::{Mat4, Vec2, Vec3};

/// Perspective camera looking down -Z from a fixed depth; only its xy
/// drifts (pointer parallax).
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32, z: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Recompute the aspect ratio from a surface size. Zero-sized surfaces
    /// keep the previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn set_xy(&mut self, xy: Vec2) {
        self.eye.x = xy.x;
        self.eye.y = xy.y;
    }

    pub fn xy(&self) -> Vec2 {
        self.eye.truncate()
    }

    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view matrix. The camera translates without rotating, so the
    /// background stays square to the view while it drifts.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }
}
