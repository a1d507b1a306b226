use crate::config::EffectsConfig;
use crate::core::{
    header_scrolled, Debounce, FrameEffect, LoopHandle, ScrollState, SmoothScroll, Throttle, Tick,
    TrackerWriter, ViewportState,
};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Throttled scroll listener: updates the scroll tracker, the progress bar
/// and the header state (if the page has a `<header>`).
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    cfg: &EffectsConfig,
    scroll: TrackerWriter<ScrollState>,
) -> anyhow::Result<()> {
    let indicator = dom::create_div(document, "scroll-indicator")?;
    dom::body(document)?.append_child(&indicator).map_err(dom::js_err)?;
    let header = dom::query_all(document, "header").into_iter().next();
    let threshold = cfg.header_threshold_px;
    let mut throttle = Throttle::new(cfg.scroll_throttle_ms);

    let win = window.clone();
    let doc = document.clone();
    dom::on_passive(window, "scroll", move |_: web::Event| {
        if !throttle.ready(instant::now()) {
            return;
        }
        let state = dom::scroll_state(&win, &doc);
        scroll.set(state);
        dom::set_style(&indicator, "width", &format!("{:.2}%", state.percent()));
        if let Some(h) = &header {
            let cl = h.class_list();
            _ = if header_scrolled(state.offset, threshold) {
                cl.add_1("scrolled")
            } else {
                cl.remove_1("scrolled")
            };
        }
    });
    Ok(())
}

/// Debounced resize listener; the viewport tracker only changes once the
/// window has been still for the debounce delay.
pub fn wire_resize(window: &web::Window, cfg: &EffectsConfig, viewport: TrackerWriter<ViewportState>) {
    let debounce = Rc::new(RefCell::new(Debounce::new(cfg.resize_debounce_ms)));
    let viewport = Rc::new(viewport);
    dom::on(window, "resize", move |_: web::Event| {
        let token = debounce.borrow_mut().call();
        let delay = debounce.borrow().delay_ms();
        let debounce = debounce.clone();
        let viewport = viewport.clone();
        dom::set_timeout(delay, move || {
            if !debounce.borrow_mut().expire(token) {
                return;
            }
            if let Some(w) = web::window() {
                let vp = dom::viewport(&w);
                log::debug!("[resize] viewport {}x{}", vp.width, vp.height);
                viewport.set(vp);
            }
        });
    });
}

struct ScrollAnimation {
    window: web::Window,
    scroll: SmoothScroll,
}

impl FrameEffect for ScrollAnimation {
    fn frame(&mut self, now_ms: f64) -> Tick {
        let (y, done) = self.scroll.sample(now_ms);
        self.window.scroll_to_with_x_and_y(0.0, y);
        if done {
            Tick::Done
        } else {
            Tick::Continue
        }
    }
}

/// Smooth scrolling for in-page anchors. A missing target leaves the click
/// alone; a new click replaces a scroll still in flight.
pub fn wire_anchor_scroll(window: &web::Window, document: &web::Document, cfg: &EffectsConfig) {
    let active: Rc<RefCell<Option<LoopHandle>>> = Rc::new(RefCell::new(None));
    let anchors = dom::query_all(document, "a[href^=\"#\"]");
    let (duration, header_offset) = (cfg.smooth_scroll_ms, cfg.smooth_scroll_offset_px);
    for anchor in &anchors {
        let (win, doc, el, active) = (window.clone(), document.clone(), anchor.clone(), active.clone());
        dom::on(anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let target = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok());
            let Some(target) = target else {
                log::debug!("[scroll] no target for {}", href);
                return;
            };
            if let Some(prev) = active.borrow_mut().take() {
                prev.stop();
            }
            let from = win.scroll_y().unwrap_or(0.0);
            let anim = ScrollAnimation {
                window: win.clone(),
                scroll: SmoothScroll::new(from, target.offset_top() as f64, header_offset, duration),
            };
            *active.borrow_mut() = Some(frame::start_loop(Rc::new(RefCell::new(anim))));
        });
    }
    log::debug!("[scroll] {} anchors", anchors.len());
}
