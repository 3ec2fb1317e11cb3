use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn document(window: &web::Window) -> Result<web::Document> {
    window.document().ok_or_else(|| anyhow!("no document"))
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Document-wide variant of [`query_all`].
pub fn query_all_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}
