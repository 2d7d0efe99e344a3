/// Error type shared by the scene pipeline
use thiserror::Error;

/// Failures that can occur while setting up a scene.
///
/// Once a scene is running, per-frame work (clear, uniform push, draw) cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// No hardware-accelerated rendering context could be obtained. Fatal.
    #[error("rendering context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("failed to create {0} buffer")]
    BufferCreation(&'static str),

    #[error("shader program has no attribute named `{0}`")]
    MissingAttribute(String),

    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    InvalidIndex {
        face: usize,
        index: u8,
        vertex_count: usize,
    },

    /// Camera parameters nalgebra cannot build a perspective projection from.
    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error("unknown variant `{0}` (expected indexed, animated or camera)")]
    UnknownVariant(String),

    #[error("shader error: {0}")]
    Shader(String),
}
