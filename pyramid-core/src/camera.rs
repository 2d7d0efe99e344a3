/// Camera and perspective projection
use nalgebra::{Matrix4, Point3, Vector3};

use crate::config::CameraConfig;
use crate::error::SceneError;

/// Camera configuration for the view/projection pipeline.
///
/// The aspect ratio is taken from the display size at construction and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub at: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl Camera {
    /// Fails on an empty display or a degenerate frustum, either of which
    /// would make the per-frame projection impossible to build.
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidCamera(format!(
                "display is {width}x{height}, both sides must be non-zero"
            )));
        }
        if (config.far - config.near).abs() <= f32::EPSILON {
            return Err(SceneError::InvalidCamera(format!(
                "near ({}) and far ({}) planes coincide",
                config.near, config.far
            )));
        }

        Ok(Self {
            eye: config.eye,
            at: config.at,
            up: config.up,
            fovy: config.fovy,
            near: config.near,
            far: config.far,
            aspect: width as f32 / height as f32,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye, &self.at, &self.up)
    }

    /// Create the symmetric perspective projection matrix.
    ///
    /// OpenGL conventions: clip-space z in [-1, 1] and element (3, 2) = -1.
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fovy.to_radians(), self.near, self.far)
    }
}
