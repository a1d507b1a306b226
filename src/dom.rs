use crate::core::{ScrollState, ViewportState};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("document has no <body>"))
}

pub fn create_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = create_element(document, "div")?;
    el.set_class_name(class);
    Ok(el)
}

/// All elements matching `selector` that are HTML elements.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    set_style(el, "transform", value);
}

pub fn viewport(window: &web::Window) -> ViewportState {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    ViewportState::new(w as u32, h as u32)
}

pub fn scroll_state(window: &web::Window, document: &web::Document) -> ScrollState {
    let offset = window.scroll_y().unwrap_or(0.0);
    let scrollable = document
        .document_element()
        .map(|root| (root.scroll_height() - root.client_height()) as f64)
        .unwrap_or(0.0);
    ScrollState::new(offset, scrollable)
}

/// Missing `matchMedia` support counts as "no preference".
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn on<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like `on`, registered with `{ passive: true }` for scroll-type events.
pub fn on_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Run `f` once the page has fired `load`, or right away if it already has.
pub fn when_loaded(window: &web::Window, document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "complete" {
        f();
        return;
    }
    let mut f = Some(f);
    on(window, "load", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .ok();
    cb.forget();
    id
}

/// A repeating timer; `cancel` clears it.
pub struct IntervalHandle {
    id: i32,
}

impl IntervalHandle {
    pub fn cancel(&self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

pub fn set_interval(delay_ms: u32, f: impl FnMut() + 'static) -> anyhow::Result<IntervalHandle> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(js_err)?;
    cb.forget();
    Ok(IntervalHandle { id })
}

/// Resize a canvas backing store to the viewport, in CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: ViewportState) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}
