use crate::config::EffectsConfig;
use crate::constants::REVEAL_SELECTOR;
use crate::core::{RevealObserver, Visibility};
use crate::dom;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const IN_VIEW_CLASS: &str = "in-view";

/// Observe every reveal section once; the first time one is visible enough
/// it is unobserved and, after the reveal delay, gets `in-view`.
pub fn init(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<()> {
    let sections = Rc::new(dom::query_all(document, REVEAL_SELECTOR));
    if sections.is_empty() {
        log::debug!("[reveal] nothing to observe");
        return Ok(());
    }
    let state = Rc::new(RefCell::new(RevealObserver::<usize>::new(cfg.reveal_threshold)));
    let threshold = state.borrow().threshold();
    let delay_ms = cfg.reveal_delay_ms;

    let cb_sections = sections.clone();
    let cb_state = state.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: web::IntersectionObserver| {
        let batch: Vec<Visibility<usize>> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let target = entry.target();
                let key = cb_sections.iter().position(|s| {
                    let el: &web::Element = s;
                    *el == target
                })?;
                Some(Visibility {
                    key,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
            })
            .collect();

        let ready = cb_state.borrow_mut().on_batch(&batch);
        for key in ready {
            if let Some(v) = batch.iter().find(|v| v.key == key) {
                log::debug!("[reveal] section {} entered at ratio {:.3}", key, v.ratio);
            }
            let el = cb_sections[key].clone();
            observer.unobserve(&el);
            let state = cb_state.clone();
            dom::set_timeout(delay_ms, move || {
                if state.borrow_mut().complete(key) {
                    _ = el.class_list().add_1(IN_VIEW_CLASS);
                    log::debug!("[reveal] section {} in view", key);
                }
            });
        }
    }) as Box<dyn FnMut(Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin("0px");
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
        .map_err(dom::js_err)?;
    callback.forget();

    let mut st = state.borrow_mut();
    for (i, section) in sections.iter().enumerate() {
        st.observe(i);
        observer.observe(section);
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Ok(())
}
