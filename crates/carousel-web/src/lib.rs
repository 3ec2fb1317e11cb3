#![cfg(target_arch = "wasm32")]
//! WASM entry point. Finds every carousel wrap in the page, builds a
//! controller per wrap, wires its listeners, and starts one shared frame
//! loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod controller;
mod dom;
mod events;
mod frame;
mod gesture;
mod style;

use controller::Controller;
use events::{wire_controller, ControllerWiring};
use frame::{start_loop, FrameContext};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    if let Err(e) = boot() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Runs `init` now if the DOM is ready, otherwise defers it to
/// `DOMContentLoaded`. Module scripts normally load after parsing, but a
/// dynamic import can land earlier.
fn boot() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
        return Ok(());
    }
    init()
}

fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let wraps = dom::query_all_document(&document, "[data-3d-carousel-wrap]");
    if wraps.is_empty() {
        log::info!("no carousel wraps in page");
        return Ok(());
    }

    let mut controllers = Vec::new();
    for wrap in wraps {
        let controller = Rc::new(RefCell::new(Controller::new(window.clone(), wrap)));
        wire_controller(ControllerWiring {
            window: window.clone(),
            controller: controller.clone(),
        });
        controllers.push(controller);
    }
    log::info!("[engine] {} carousel(s) running", controllers.len());

    start_loop(Rc::new(RefCell::new(FrameContext { controllers })));
    Ok(())
}
