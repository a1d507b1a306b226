use crate::config::EffectsConfig;
use crate::core::{
    translate_px, CursorFollower, FrameEffect, LoopHandle, PointerState, Tick, Tracker,
};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct CursorView {
    follower: CursorFollower,
    pointer: Tracker<PointerState>,
    hovering: Tracker<bool>,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
}

impl FrameEffect for CursorView {
    fn frame(&mut self, _now_ms: f64) -> Tick {
        self.follower.point_to(self.pointer.get().as_vec2());
        self.follower.set_hover(self.hovering.get());
        self.follower.step();
        dom::set_transform(&self.ring, &translate_px(self.follower.ring));
        dom::set_transform(&self.dot, &translate_px(self.follower.dot));
        Tick::Continue
    }
}

/// Create the ring and dot elements and start their frame loop. Returns the
/// ring so the hover listener can toggle its `hover` class.
pub fn init(
    document: &web::Document,
    cfg: &EffectsConfig,
    pointer: Tracker<PointerState>,
    hovering: Tracker<bool>,
) -> anyhow::Result<(web::HtmlElement, LoopHandle)> {
    let body = dom::body(document)?;
    let ring = dom::create_div(document, "custom-cursor")?;
    let dot = dom::create_div(document, "cursor-dot")?;
    body.append_child(&ring).map_err(dom::js_err)?;
    body.append_child(&dot).map_err(dom::js_err)?;

    let view = CursorView {
        follower: CursorFollower::new(cfg.cursor_smoothing, cfg.cursor_hover_smoothing),
        pointer,
        hovering,
        ring: ring.clone(),
        dot,
    };
    let handle = frame::start_loop(Rc::new(RefCell::new(view)));
    Ok((ring, handle))
}
