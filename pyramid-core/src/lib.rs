/// Pyramid Core Library - scene logic for the rotating pyramid
///
/// Geometry, rotation, camera and the render loop live here, independent of
/// any graphics API. GPU work goes through the `GraphicsBackend` trait.

pub mod animation;
pub mod backend;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render_loop;
pub mod rotation;
pub mod scene;
pub mod variant;

// Re-export commonly used types
pub use animation::{AnimationDriver, FrameUniforms, UniformLocations};
pub use backend::GraphicsBackend;
pub use camera::Camera;
pub use config::{CameraConfig, SceneConfig};
pub use error::SceneError;
pub use geometry::{flatten, flatten_matrix, Face, Mesh, Vertex};
pub use render_loop::{LoopState, RenderLoop};
pub use rotation::{RotationState, WrapMode};
pub use scene::Scene;
pub use variant::Variant;
