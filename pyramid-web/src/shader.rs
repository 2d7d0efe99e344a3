/// GLSL sources for each variant and program compile/link
use pyramid_core::{SceneError, Variant};
use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram, WebGlShader};

const INDEXED_VERTEX_SHADER: &str = r#"#version 300 es
in vec4 vPosition;
in vec4 vColor;
out vec4 fColor;

void main() {
    fColor = vColor;
    gl_Position = vPosition;
}
"#;

const ANIMATED_VERTEX_SHADER: &str = r#"#version 300 es
in vec4 vPosition;
in vec4 vColor;
out vec4 fColor;
uniform float theta;

void main() {
    float c = cos(theta);
    float s = sin(theta);
    // rotation about y, column-major
    mat4 ry = mat4(c, 0.0, -s, 0.0,
                   0.0, 1.0, 0.0, 0.0,
                   s, 0.0, c, 0.0,
                   0.0, 0.0, 0.0, 1.0);
    fColor = vColor;
    gl_Position = ry * vPosition;
}
"#;

const CAMERA_VERTEX_SHADER: &str = r#"#version 300 es
in vec4 vPosition;
in vec4 vColor;
out vec4 fColor;
uniform float theta;
uniform mat4 viewMatrix;
uniform mat4 projectionMatrix;

void main() {
    float c = cos(theta);
    float s = sin(theta);
    mat4 ry = mat4(c, 0.0, -s, 0.0,
                   0.0, 1.0, 0.0, 0.0,
                   s, 0.0, c, 0.0,
                   0.0, 0.0, 0.0, 1.0);
    fColor = vColor;
    gl_Position = projectionMatrix * viewMatrix * ry * vPosition;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec4 fColor;
out vec4 fragColor;

void main() {
    fragColor = fColor;
}
"#;

pub fn vertex_shader_source(variant: Variant) -> &'static str {
    match variant {
        Variant::Indexed => INDEXED_VERTEX_SHADER,
        Variant::Animated => ANIMATED_VERTEX_SHADER,
        Variant::Camera => CAMERA_VERTEX_SHADER,
    }
}

pub fn fragment_shader_source() -> &'static str {
    FRAGMENT_SHADER
}

pub fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SceneError::Shader("unable to create shader object".to_string()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown error compiling shader".to_string());
        gl.delete_shader(Some(&shader));
        Err(SceneError::Shader(info))
    }
}

pub fn link_program(
    gl: &Gl,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, SceneError> {
    let program = gl
        .create_program()
        .ok_or_else(|| SceneError::Shader("unable to create program object".to_string()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown error linking program".to_string());
        gl.delete_program(Some(&program));
        Err(SceneError::Shader(info))
    }
}

/// Compile and link the program for `variant`
pub fn build_program(gl: &Gl, variant: Variant) -> Result<WebGlProgram, SceneError> {
    let vertex = compile_shader(gl, Gl::VERTEX_SHADER, vertex_shader_source(variant))?;
    let fragment = compile_shader(gl, Gl::FRAGMENT_SHADER, fragment_shader_source())?;
    let program = link_program(gl, &vertex, &fragment)?;
    log::debug!("linked shader program for {variant} variant");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_inputs_per_variant() {
        for variant in Variant::ALL {
            let source = vertex_shader_source(variant);
            assert!(source.starts_with("#version 300 es"));
            assert!(source.contains("in vec4 vPosition;"));
            assert!(source.contains("in vec4 vColor;"));
            assert_eq!(
                source.contains("uniform float theta;"),
                variant != Variant::Indexed
            );
            assert_eq!(source.contains("uniform mat4 viewMatrix;"), variant.uses_camera());
            assert_eq!(
                source.contains("uniform mat4 projectionMatrix;"),
                variant.uses_camera()
            );
        }
    }

    #[test]
    fn test_fragment_shader_writes_color() {
        assert!(fragment_shader_source().contains("fragColor = fColor;"));
    }
}
