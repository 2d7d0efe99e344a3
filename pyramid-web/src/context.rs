/// Canvas lookup and WebGL2 context acquisition
use pyramid_core::SceneError;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as Gl};

/// A canvas together with the rendering context bound to it
pub struct CanvasContext {
    pub canvas: HtmlCanvasElement,
    pub gl: Gl,
}

impl CanvasContext {
    /// Find the canvas by id and request a hardware-accelerated WebGL2 context.
    pub fn acquire(canvas_id: &str) -> Result<Self, SceneError> {
        let unavailable = |reason: &str| SceneError::ContextUnavailable(reason.to_string());

        let window = web_sys::window().ok_or_else(|| unavailable("missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| unavailable("missing document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| unavailable(&format!("canvas `{canvas_id}` not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| unavailable(&format!("`{canvas_id}` is not a canvas")))?;

        let gl = canvas
            .get_context("webgl2")
            .map_err(|_| unavailable("WebGL isn't available"))?
            .ok_or_else(|| unavailable("WebGL isn't available"))?
            .dyn_into::<Gl>()
            .map_err(|_| unavailable("context is not WebGL2"))?;

        log::debug!(
            "acquired WebGL2 context for `{}` ({}x{})",
            canvas_id,
            canvas.width(),
            canvas.height()
        );
        Ok(Self { canvas, gl })
    }

    /// Display size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
}

/// Tell the user synchronously that startup cannot continue.
pub fn report_fatal(err: &SceneError) {
    log::error!("{err}");
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(&err.to_string()).is_err() {
            log::warn!("could not show alert");
        }
    }
}
