/// `GraphicsBackend` over a WebGL2 rendering context
use js_sys::Float32Array;
use pyramid_core::{GraphicsBackend, SceneError};
use web_sys::{WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlUniformLocation};

/// WebGL2 context plus the program made current for the scene
pub struct WebGlBackend {
    gl: Gl,
    program: WebGlProgram,
}

impl WebGlBackend {
    /// Make `program` the current program and wrap the context.
    pub fn new(gl: Gl, program: WebGlProgram) -> Self {
        gl.use_program(Some(&program));
        Self { gl, program }
    }
}

impl GraphicsBackend for WebGlBackend {
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn set_clear_color(&mut self, [r, g, b, a]: [f32; 4]) {
        self.gl.clear_color(r, g, b, a);
    }

    fn enable_depth_test(&mut self) {
        self.gl.enable(Gl::DEPTH_TEST);
    }

    fn upload_indices(&mut self, indices: &[u8]) -> Result<WebGlBuffer, SceneError> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(SceneError::BufferCreation("index"))?;
        self.gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
        self.gl
            .buffer_data_with_u8_array(Gl::ELEMENT_ARRAY_BUFFER, indices, Gl::STATIC_DRAW);
        Ok(buffer)
    }

    fn upload_attribute(
        &mut self,
        name: &str,
        data: &[f32],
        components: usize,
    ) -> Result<WebGlBuffer, SceneError> {
        let location: u32 = self
            .gl
            .get_attrib_location(&self.program, name)
            .try_into()
            .map_err(|_| SceneError::MissingAttribute(name.to_string()))?;

        let buffer = self
            .gl
            .create_buffer()
            .ok_or(SceneError::BufferCreation("attribute"))?;
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW);

        self.gl
            .vertex_attrib_pointer_with_i32(location, components as i32, Gl::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);
        Ok(buffer)
    }

    fn uniform_location(&mut self, name: &str) -> Option<WebGlUniformLocation> {
        let location = self.gl.get_uniform_location(&self.program, name);
        if location.is_none() {
            log::debug!("program has no uniform `{name}`");
        }
        location
    }

    fn set_uniform_f32(&mut self, location: &WebGlUniformLocation, value: f32) {
        self.gl.uniform1f(Some(location), value);
    }

    fn set_uniform_mat4(&mut self, location: &WebGlUniformLocation, matrix: &[f32; 16]) {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(location), false, matrix);
    }

    fn clear(&mut self) {
        self.gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    fn draw_indexed_triangles(&mut self, count: usize) {
        self.gl
            .draw_elements_with_i32(Gl::TRIANGLES, count as i32, Gl::UNSIGNED_BYTE, 0);
    }
}
