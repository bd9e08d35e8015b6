#![cfg(target_arch = "wasm32")]
use curve_core::{AnimationController, RngSource, StrokeStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod params;
mod style;

thread_local! {
    static LOOP: RefCell<Option<frame::IntervalHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("curvedrift-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation; the last frame stays on the canvas.
#[wasm_bindgen]
pub fn stop() {
    if let Some(handle) = LOOP.with(|l| l.borrow_mut().take()) {
        handle.cancel();
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let surface = canvas::CanvasSurface::new(canvas)?;
    // Fail before the loop starts if there is nothing to draw on
    curve_core::CurveSurface::viewport(&surface)?;

    let settings = params::settings_from_query(&dom::location_query());
    let mut rng = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let config = settings.resolve(&mut rng)?;
    let timestep_ms = config.interpolation_timestep_ms;
    let controller = AnimationController::new(config, rng)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        surface,
        style: StrokeStyle::default(),
    }));
    let handle = frame::start_loop(frame_ctx, timestep_ms)?;
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
