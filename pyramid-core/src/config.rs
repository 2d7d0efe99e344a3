/// Scene constants gathered in one place
use nalgebra::{Point3, Vector3};

/// Canvas element the web front end renders into unless told otherwise.
pub const DEFAULT_CANVAS_ID: &str = "gl-canvas";

/// Eye, target and frustum parameters for the camera variant
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub eye: Point3<f32>,
    pub at: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 1.0, 4.0),
            at: Point3::origin(),
            up: Vector3::y(),
            fovy: 40.0,
            near: 3.0,
            far: 5.0,
        }
    }
}

/// Everything a scene needs besides the geometry and the GPU context
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub canvas_id: String,
    pub clear_color: [f32; 4],
    /// Radians added to the rotation angle every frame.
    pub angle_increment: f64,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            clear_color: [1.0, 1.0, 1.0, 1.0],
            angle_increment: 0.01,
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }
}
