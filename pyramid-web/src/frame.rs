/// Display-refresh scheduling through `requestAnimationFrame`
use std::cell::RefCell;
use std::rc::Rc;

use pyramid_core::{GraphicsBackend, RenderLoop};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("missing window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Start the loop and tick it on every display refresh.
///
/// A single closure is registered and re-requested after each tick, so the
/// browser holds at most one pending request and the stack never grows. The
/// closure keeps itself alive for the lifetime of the page.
pub fn run<B: GraphicsBackend + 'static>(mut render_loop: RenderLoop<B>) -> Result<(), JsValue> {
    render_loop.start();
    let render_loop = Rc::new(RefCell::new(render_loop));

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move || {
        render_loop.borrow_mut().tick();

        if let Some(closure) = next.borrow().as_ref() {
            if let Err(err) = request_frame(closure) {
                log::error!("could not schedule next frame, stopping: {err:?}");
            }
        }
    }));

    let first = callback.borrow();
    let closure = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    request_frame(closure)?;
    Ok(())
}
