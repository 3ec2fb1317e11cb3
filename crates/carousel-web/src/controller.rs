use carousel_core::constants::{
    FRAME_LAG_FALLBACK_SEC, FRAME_LAG_THRESHOLD_SEC, GATE_START_VIEWPORT_FRACTION,
};
use carousel_core::geometry::ResizeGate;
use carousel_core::{Carousel, CarouselParams, Tuning};
use instant::Instant;
use web_sys as web;

use crate::dom;
use crate::style;

/// One carousel instance: cached DOM handles on one side, the engine on the
/// other. Listeners and the frame loop dispatch into the current engine;
/// between `destroy` and `build` there is none and everything is a no-op.
pub struct Controller {
    window: web::Window,
    wrap: web::HtmlElement,
    tuning: Tuning,
    panels: Vec<web::HtmlElement>,
    blur_targets: Vec<Vec<web::HtmlElement>>,
    contents: Vec<web::HtmlElement>,
    engine: Option<Carousel>,
    resize_gate: ResizeGate,
    started: Instant,
    last_frame: Instant,
}

impl Controller {
    pub fn new(window: web::Window, wrap: web::HtmlElement) -> Self {
        let width = dom::viewport_width(&window);
        let tuning = match wrap.get_attribute("data-3d-carousel-variant").as_deref() {
            Some("mellow") => Tuning::mellow(),
            _ => Tuning::standard(),
        };
        let mut controller = Self {
            window,
            wrap,
            tuning,
            panels: Vec::new(),
            blur_targets: Vec::new(),
            contents: Vec::new(),
            engine: None,
            resize_gate: ResizeGate::new(width),
            started: Instant::now(),
            last_frame: Instant::now(),
        };
        controller.build();
        controller
    }

    pub fn wrap(&self) -> &web::HtmlElement {
        &self.wrap
    }

    /// Measures the page, re-queries the markup, and constructs a fresh
    /// engine. Must run against untransformed elements; `destroy` guarantees
    /// that on the rebuild path.
    pub fn build(&mut self) {
        let width = dom::viewport_width(&self.window);
        let scroll = dom::scroll_y(&self.window);

        self.panels = dom::query_all(&self.wrap, "[data-3d-carousel-panel]");
        self.contents = dom::query_all(&self.wrap, "[data-3d-carousel-content]");
        self.blur_targets = self
            .panels
            .iter()
            .map(|panel| {
                let mut screens = dom::query_all(panel, ".img-carousel__screen");
                if screens.is_empty() {
                    screens = dom::query_all(panel, ".img-carousel__img");
                }
                if screens.is_empty() {
                    screens.push(panel.clone());
                }
                screens
            })
            .collect();

        // Gate band in document space: wrap top hitting 80% viewport height
        // down to wrap bottom leaving at the viewport top.
        let rect = self.wrap.get_bounding_client_rect();
        let top = rect.top() + scroll;
        let gate_start = top - dom::viewport_height(&self.window) * GATE_START_VIEWPORT_FRACTION;
        let gate_end = top + rect.height();

        let mut engine = Carousel::new(CarouselParams {
            panel_count: self.panels.len(),
            content_count: self.contents.len(),
            viewport_width: width,
            gate_start,
            gate_end,
            seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
            tuning: self.tuning,
        });

        let origin = style::panel_origin(engine.geometry().radius);
        for panel in &self.panels {
            dom::set_style(panel, "transform-origin", &origin);
        }

        // Play-on-refresh: the gate sees the current scroll position once.
        engine.scroll_to(scroll, self.now());

        log::info!(
            "[build] {} panels, {} content, radius {:.0}px",
            self.panels.len(),
            self.contents.len(),
            engine.geometry().radius
        );
        self.engine = Some(engine);

        // Styles land before the next frame so a rebuild never paints the
        // raw stylesheet state, and an armed wrap starts shrunk and hidden.
        self.paint();
    }

    /// Drops the engine (taking every live timeline with it) and hands all
    /// inline styles back to the stylesheet.
    pub fn destroy(&mut self) {
        self.engine = None;
        for panel in &self.panels {
            dom::clear_style(panel, "transform");
            dom::clear_style(panel, "transform-origin");
        }
        for targets in &self.blur_targets {
            for target in targets {
                dom::clear_style(target, "filter");
            }
        }
        dom::clear_style(&self.wrap, "transform");
        for content in &self.contents {
            dom::clear_style(content, "opacity");
            dom::clear_style(content, "visibility");
        }
    }

    /// Debounced-resize landing point. Only a settled width change rebuilds;
    /// mobile address-bar height changes land here and are ignored.
    pub fn on_resize_settled(&mut self) {
        let width = dom::viewport_width(&self.window);
        if self.resize_gate.settle(width) {
            log::info!("[resize] width now {:.0}px, rebuilding", width);
            self.destroy();
            self.build();
        }
    }

    /// Advances the engine one frame and writes the results into the DOM.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let mut dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        if dt > FRAME_LAG_THRESHOLD_SEC {
            dt = FRAME_LAG_FALLBACK_SEC;
        }

        if let Some(engine) = self.engine.as_mut() {
            engine.tick(dt);
        }
        self.paint();
    }

    /// Writes the engine's current state into the DOM.
    fn paint(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        for (index, panel) in self.panels.iter().enumerate() {
            let transform = style::panel_transform(engine.panel_angle(index));
            dom::set_style(panel, "transform", &transform);
        }

        if engine.take_blur_pass() {
            for (index, targets) in self.blur_targets.iter().enumerate() {
                let filter = style::blur_filter(engine.panel_blur_px(index));
                for target in targets {
                    dom::set_style(target, "filter", &filter);
                }
            }
        }

        let pose = engine.wrap_pose();
        dom::set_style(&self.wrap, "transform", &style::wrap_transform(pose));

        for (index, content) in self.contents.iter().enumerate() {
            let alpha = engine.content_alpha(index);
            dom::set_style(content, "opacity", &style::content_opacity(alpha));
            dom::set_style(content, "visibility", style::content_visibility(alpha));
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        let now = self.now();
        if let Some(engine) = self.engine.as_mut() {
            engine.pointer_press(x, now);
        }
    }

    pub fn pointer_move(&mut self, x: f64) {
        let now = self.now();
        if let Some(engine) = self.engine.as_mut() {
            engine.pointer_move(x, now);
        }
    }

    pub fn pointer_up(&mut self, x: f64) {
        let now = self.now();
        if let Some(engine) = self.engine.as_mut() {
            engine.pointer_release(x, now);
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        let now = self.now();
        if let Some(engine) = self.engine.as_mut() {
            engine.wheel(delta_y, now);
        }
    }

    pub fn on_scroll(&mut self) {
        let y = dom::scroll_y(&self.window);
        let now = self.now();
        if let Some(engine) = self.engine.as_mut() {
            engine.scroll_to(y, now);
        }
    }

    fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
