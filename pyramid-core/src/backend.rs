/// The seam between scene logic and a concrete graphics API
use crate::error::SceneError;

/// Names of the shader inputs the scene binds to.
pub mod names {
    pub const POSITION_ATTRIBUTE: &str = "vPosition";
    pub const COLOR_ATTRIBUTE: &str = "vColor";
    pub const THETA_UNIFORM: &str = "theta";
    pub const VIEW_UNIFORM: &str = "viewMatrix";
    pub const PROJECTION_UNIFORM: &str = "projectionMatrix";
}

/// The subset of a GPU rasterization API the pyramid needs.
///
/// Implementations hold the rendering context and the linked shader program
/// as the current program. Uploads happen once at initialization; after that
/// only the uniform setters, `clear` and `draw_indexed_triangles` are called.
pub trait GraphicsBackend {
    type Buffer;
    type UniformLocation;

    fn set_viewport(&mut self, width: u32, height: u32);
    fn set_clear_color(&mut self, rgba: [f32; 4]);
    fn enable_depth_test(&mut self);

    /// Create an element array buffer holding 8-bit unsigned indices.
    fn upload_indices(&mut self, indices: &[u8]) -> Result<Self::Buffer, SceneError>;

    /// Create a vertex buffer and bind it to the named attribute with
    /// `components` packed floats per entry (stride 0, offset 0).
    fn upload_attribute(
        &mut self,
        name: &str,
        data: &[f32],
        components: usize,
    ) -> Result<Self::Buffer, SceneError>;

    /// `None` when the program does not expose the uniform.
    fn uniform_location(&mut self, name: &str) -> Option<Self::UniformLocation>;

    fn set_uniform_f32(&mut self, location: &Self::UniformLocation, value: f32);

    /// `matrix` is column-major.
    fn set_uniform_mat4(&mut self, location: &Self::UniformLocation, matrix: &[f32; 16]);

    /// Clear both the color and the depth buffer.
    fn clear(&mut self);

    /// Draw `count` unsigned-byte indices from the bound element array as triangles.
    fn draw_indexed_triangles(&mut self, count: usize);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded backend call
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Viewport(u32, u32),
        ClearColor([f32; 4]),
        DepthTest,
        UploadIndices(Vec<u8>),
        UploadAttribute {
            name: String,
            data: Vec<f32>,
            components: usize,
        },
        UniformLocation(String),
        UniformF32(String, f32),
        UniformMat4(String, [f32; 16]),
        Clear,
        Draw(usize),
    }

    /// Backend that records every call instead of talking to a GPU
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub calls: Vec<Call>,
        /// Uniforms the pretend shader program exposes.
        pub uniforms: Vec<&'static str>,
        pub missing_attribute: Option<&'static str>,
        next_buffer: u32,
    }

    impl RecordingBackend {
        pub fn with_uniforms(uniforms: &[&'static str]) -> Self {
            Self {
                uniforms: uniforms.to_vec(),
                ..Self::default()
            }
        }

        pub fn take_calls(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }
    }

    impl GraphicsBackend for RecordingBackend {
        type Buffer = u32;
        type UniformLocation = String;

        fn set_viewport(&mut self, width: u32, height: u32) {
            self.calls.push(Call::Viewport(width, height));
        }

        fn set_clear_color(&mut self, rgba: [f32; 4]) {
            self.calls.push(Call::ClearColor(rgba));
        }

        fn enable_depth_test(&mut self) {
            self.calls.push(Call::DepthTest);
        }

        fn upload_indices(&mut self, indices: &[u8]) -> Result<u32, SceneError> {
            self.calls.push(Call::UploadIndices(indices.to_vec()));
            self.next_buffer += 1;
            Ok(self.next_buffer)
        }

        fn upload_attribute(
            &mut self,
            name: &str,
            data: &[f32],
            components: usize,
        ) -> Result<u32, SceneError> {
            if self.missing_attribute == Some(name) {
                return Err(SceneError::MissingAttribute(name.to_string()));
            }
            self.calls.push(Call::UploadAttribute {
                name: name.to_string(),
                data: data.to_vec(),
                components,
            });
            self.next_buffer += 1;
            Ok(self.next_buffer)
        }

        fn uniform_location(&mut self, name: &str) -> Option<String> {
            self.calls.push(Call::UniformLocation(name.to_string()));
            self.uniforms
                .iter()
                .any(|u| *u == name)
                .then(|| name.to_string())
        }

        fn set_uniform_f32(&mut self, location: &String, value: f32) {
            self.calls.push(Call::UniformF32(location.clone(), value));
        }

        fn set_uniform_mat4(&mut self, location: &String, matrix: &[f32; 16]) {
            self.calls.push(Call::UniformMat4(location.clone(), *matrix));
        }

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_indexed_triangles(&mut self, count: usize) {
            self.calls.push(Call::Draw(count));
        }
    }
}
