use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::constants::RESIZE_DEBOUNCE_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::controller::Controller;
use crate::gesture;

pub struct ControllerWiring {
    pub window: web::Window,
    pub controller: Rc<RefCell<Controller>>,
}

/// Wires every listener one controller needs. Closures are wired once per
/// page and `forget`-leaked; they dispatch into whatever engine the
/// controller currently holds.
pub fn wire_controller(w: ControllerWiring) {
    let wrap = w.controller.borrow().wrap().clone();

    // Pointer press on the wrap starts a drag. Capturing the pointer keeps
    // the matching release deliverable even off-window.
    {
        let controller = w.controller.clone();
        let wrap_capture = wrap.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !gesture::starts_drag(ev.button()) {
                return;
            }
            if gesture::captures_pointer(&ev.pointer_type()) {
                ev.prevent_default();
                _ = wrap_capture.set_pointer_capture(ev.pointer_id());
            }
            controller.borrow_mut().pointer_down(ev.client_x() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = wrap.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Moves are window-level so a drag survives leaving the wrap.
    {
        let controller = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            controller.borrow_mut().pointer_move(ev.client_x() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = w
            .window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Release anywhere ends the drag; cancelled pointers count as releases.
    {
        let controller = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            controller.borrow_mut().pointer_up(ev.client_x() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = w
            .window
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = w
            .window
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Trackpads and mouse wheels fire these without moving the page.
    {
        let controller = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            controller.borrow_mut().on_wheel(ev.delta_y());
        }) as Box<dyn FnMut(_)>);
        _ = w
            .window
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let controller = w.controller.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            controller.borrow_mut().on_scroll();
        }) as Box<dyn FnMut(_)>);
        _ = w
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Native image dragging would eat the pointer stream mid-drag.
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = wrap.add_event_listener_with_callback("dragstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Debounced resize: every event resets the timer, the settle callback
    // fires once the burst stops, and the controller decides whether the
    // width actually changed.
    {
        let controller = w.controller.clone();
        let window = w.window.clone();
        let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let settle = Closure::wrap(Box::new(move || {
            controller.borrow_mut().on_resize_settled();
        }) as Box<dyn FnMut()>);
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            if let Some(handle) = pending.borrow_mut().take() {
                window.clear_timeout_with_handle(handle);
            }
            let handle = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    settle.as_ref().unchecked_ref(),
                    RESIZE_DEBOUNCE_MS,
                )
                .ok();
            *pending.borrow_mut() = handle;
        }) as Box<dyn FnMut(_)>);
        _ = w
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
