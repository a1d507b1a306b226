//! Preloader overlay shown until the lifecycle gate opens.

use crate::core::LifecycleGate;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PRELOADER_ID: &str = "preloader";
const LOADING_CLASS: &str = "loading";

const PRELOADER_HTML: &str = r#"
  <div class="loader-container">
    <div class="spinner">
      <div class="spinner-ring"></div>
      <div class="spinner-ring"></div>
      <div class="spinner-ring"></div>
    </div>
    <div class="loading-text">LOADING</div>
    <div class="progress-bar">
      <div class="progress-fill"></div>
    </div>
  </div>
"#;

pub fn show(document: &web::Document) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let el = dom::create_element(document, "div")?;
    el.set_id(PRELOADER_ID);
    el.set_inner_html(PRELOADER_HTML);
    body.prepend_with_node_1(&el).map_err(dom::js_err)?;
    _ = body.class_list().add_1(LOADING_CLASS);
    Ok(())
}

/// Start the fade and detach the overlay once the CSS transition is over.
pub fn hide(document: &web::Document, detach_delay_ms: u32) {
    if let Some(body) = document.body() {
        _ = body.class_list().remove_1(LOADING_CLASS);
    }
    let doc = document.clone();
    dom::set_timeout(detach_delay_ms, move || {
        if let Some(el) = doc.get_element_by_id(PRELOADER_ID) {
            el.remove();
            log::debug!("[gate] preloader detached");
        }
    });
}

/// Show the preloader and arm both halves of the gate: the minimum display
/// timer and the page `load` signal.
pub fn run_preloader(
    window: &web::Window,
    document: &web::Document,
    min_display_ms: u32,
    detach_delay_ms: u32,
) -> anyhow::Result<()> {
    show(document)?;
    let gate = Rc::new(RefCell::new(LifecycleGate::new()));
    let shown_at = Instant::now();

    let open = {
        let doc = document.clone();
        move |gate_opened: bool| {
            if gate_opened {
                log::info!("[gate] open after {:?}", shown_at.elapsed());
                hide(&doc, detach_delay_ms);
            }
        }
    };

    {
        let gate = gate.clone();
        let open = open.clone();
        dom::set_timeout(min_display_ms, move || {
            let opened = gate.borrow_mut().mark_minimum_elapsed();
            open(opened);
        });
    }

    dom::when_loaded(window, document, move || {
        let opened = gate.borrow_mut().mark_loaded();
        open(opened);
    });
    Ok(())
}
