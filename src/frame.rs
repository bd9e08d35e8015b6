use crate::canvas::CanvasSurface;
use curve_core::{AnimationController, RngSource, StrokeStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: AnimationController<RngSource>,
    pub surface: CanvasSurface,
    pub style: StrokeStyle,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Err(e) = self.controller.render(&mut self.surface, &self.style) {
            log::error!("render error: {}", e);
        }
    }
}

/// A running `setInterval` loop. The callback lives as long as the handle,
/// so keep it alive until [`IntervalHandle::cancel`].
pub struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn cancel(self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
        log::info!("animation loop {} stopped", self.id);
    }
}

/// Run one frame every `timestep_ms` until cancelled.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    timestep_ms: u32,
) -> anyhow::Result<IntervalHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    let timeout = i32::try_from(timestep_ms)?;
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref::<js_sys::Function>(),
            timeout,
        )
        .map_err(|e| anyhow::anyhow!("setInterval error: {:?}", e))?;
    Ok(IntervalHandle { id, _tick: tick })
}
