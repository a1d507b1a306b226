use crate::core::{is_hover_target, PointerState, TrackerWriter};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HOVER_CLASS: &str = "hover";

/// Single writer for the pointer tracker.
pub fn wire_pointer_tracking(document: &web::Document, pointer: TrackerWriter<PointerState>) {
    dom::on(document, "mousemove", move |ev: web::MouseEvent| {
        pointer.set(PointerState {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });
}

fn event_hits_target(ev: &web::MouseEvent) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    let class_name = el.class_name();
    is_hover_target(&el.tag_name(), class_name.split_whitespace())
}

/// Document-level hover delegation: one `mouseover`/`mouseout` pair tests
/// the event target's tag and classes, so elements added later are covered
/// too.
pub fn wire_hover_delegation(
    document: &web::Document,
    ring: web::HtmlElement,
    hovering: TrackerWriter<bool>,
) {
    let hovering = Rc::new(hovering);

    let (ring_over, hover_over) = (ring.clone(), hovering.clone());
    dom::on(document, "mouseover", move |ev: web::MouseEvent| {
        if event_hits_target(&ev) {
            _ = ring_over.class_list().add_1(HOVER_CLASS);
            hover_over.set(true);
        }
    });

    dom::on(document, "mouseout", move |ev: web::MouseEvent| {
        if event_hits_target(&ev) {
            _ = ring.class_list().remove_1(HOVER_CLASS);
            hovering.set(false);
        }
    });
}
