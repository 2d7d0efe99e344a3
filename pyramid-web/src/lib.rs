/// Pyramid Web - WebGL2 front end for the rotating pyramid
///
/// Acquires the canvas context, builds the shader program for the chosen
/// variant and hands the scene to the browser's display refresh loop.

use pyramid_core::{Mesh, RenderLoop, Scene, SceneConfig, SceneError, Variant};
use wasm_bindgen::prelude::*;

pub mod backend;
pub mod context;
pub mod frame;
pub mod shader;

pub use backend::WebGlBackend;
pub use context::CanvasContext;

fn to_js(err: SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct PyramidRenderer {
    render_loop: RenderLoop<WebGlBackend>,
}

impl PyramidRenderer {
    /// Acquire the context and initialize the scene.
    ///
    /// A missing rendering context is fatal: the user is alerted before the
    /// error is returned.
    pub fn with_config(variant: Variant, config: &SceneConfig) -> Result<Self, SceneError> {
        let context = CanvasContext::acquire(&config.canvas_id).inspect_err(context::report_fatal)?;
        let size = context.size();

        let program = shader::build_program(&context.gl, variant)?;
        let backend = WebGlBackend::new(context.gl, program);
        let scene = Scene::initialize(backend, &Mesh::pyramid(), variant, config, size)?;

        Ok(Self {
            render_loop: RenderLoop::new(scene),
        })
    }
}

#[wasm_bindgen]
impl PyramidRenderer {
    /// Initialize `variant` ("indexed", "animated" or "camera") on the canvas
    /// with id `canvas_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, variant: &str) -> Result<PyramidRenderer, JsValue> {
        let variant = variant.parse::<Variant>().map_err(to_js)?;
        let config = SceneConfig::default().with_canvas_id(canvas_id);
        Self::with_config(variant, &config).map_err(to_js)
    }

    /// Draw a single frame now, outside the refresh loop
    pub fn render(&mut self) -> f32 {
        self.render_loop.start();
        self.render_loop
            .tick()
            .map(|frame| frame.theta)
            .unwrap_or_default()
    }

    /// Current rotation angle in radians
    pub fn theta(&self) -> f64 {
        self.render_loop.scene().driver().rotation().theta()
    }

    pub fn variant(&self) -> String {
        self.render_loop.scene().variant().to_string()
    }

    /// Hand the renderer to the display refresh loop. Runs until the page closes.
    pub fn run(self) -> Result<(), JsValue> {
        frame::run(self.render_loop)
    }
}

/// Initialize a variant on a canvas and start animating it
#[wasm_bindgen]
pub fn start(canvas_id: &str, variant: &str) -> Result<(), JsValue> {
    PyramidRenderer::new(canvas_id, variant)?.run()
}

#[wasm_bindgen]
pub fn start_indexed(canvas_id: &str) -> Result<(), JsValue> {
    start(canvas_id, Variant::Indexed.name())
}

#[wasm_bindgen]
pub fn start_animated(canvas_id: &str) -> Result<(), JsValue> {
    start(canvas_id, Variant::Animated.name())
}

#[wasm_bindgen]
pub fn start_camera(canvas_id: &str) -> Result<(), JsValue> {
    start(canvas_id, Variant::Camera.name())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("pyramid-web loaded");
    Ok(())
}
