use crate::config::{EffectsConfig, OVERRIDE_KEYS};
use crate::core::{tracker, LoopHandle, PointerState};
use crate::dom::{self, IntervalHandle};
use crate::{effects, events, overlay};
use anyhow::anyhow;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Handles of everything that keeps running after start-up.
#[derive(Default)]
struct Running {
    loops: Vec<(&'static str, LoopHandle)>,
    particles: Option<IntervalHandle>,
}

thread_local! {
    static RUNNING: RefCell<Running> = RefCell::new(Running::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop every frame loop and the particle spawner. Listeners stay attached
/// but have nothing left to drive.
#[wasm_bindgen]
pub fn stop_effects() {
    RUNNING.with(|r| {
        let mut r = r.borrow_mut();
        for (name, handle) in r.loops.drain(..) {
            handle.stop();
            log::debug!("[fx] stopped {}", name);
        }
        if let Some(p) = r.particles.take() {
            p.cancel();
        }
    });
    log::info!("[fx] effects stopped");
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::on(document, "DOMContentLoaded", move |_: web::Event| {
            _ = resolve.call0(&JsValue::NULL);
        });
    });
    JsFuture::from(promise).await.map_err(dom::js_err)?;
    Ok(())
}

fn log_branding() {
    let styles = [
        "font-size: 24px; font-weight: bold; color: #00bfff; text-shadow: 0 0 10px #00bfff;",
        "font-size: 14px; color: #0077ff;",
        "font-size: 12px; color: #7a8599;",
    ];
    web::console::log_4(
        &"%cPAGE FX%c\n\n%cRendered in Rust + WebAssembly".into(),
        &styles[0].into(),
        &styles[2].into(),
        &styles[1].into(),
    );
}

/// Defaults, overridden by any `data-fx-*` attributes on `<body>`.
fn config_from_document(document: &web::Document) -> EffectsConfig {
    let mut cfg = EffectsConfig::default();
    let Some(body) = document.body() else {
        return cfg;
    };
    let pairs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|k| body.get_attribute(&format!("data-fx-{k}")).map(|v| (*k, v)))
        .collect();
    let outcome = cfg.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    for e in &outcome.errors {
        log::warn!("[config] ignored override: {:#}", e);
    }
    if outcome.applied > 0 {
        log::info!("[config] {} overrides applied", outcome.applied);
    }
    cfg
}

/// Run one module's set-up; a failure is logged and the others carry on.
fn init_guarded<T>(name: &str, f: impl FnOnce() -> anyhow::Result<T>) -> Option<T> {
    match f() {
        Ok(v) => {
            log::debug!("[fx] {} started", name);
            Some(v)
        }
        Err(e) => {
            log::warn!("[fx] {} skipped: {:#}", name, e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    dom_ready(&document).await?;
    log_branding();
    let cfg = config_from_document(&document);

    init_guarded("preloader", || {
        overlay::run_preloader(&window, &document, cfg.preloader_min_ms, cfg.preloader_detach_ms)
    });

    let (w, d) = (window.clone(), document.clone());
    dom::when_loaded(&window, &document, move || start_effects(&w, &d, &cfg));
    Ok(())
}

fn start_effects(window: &web::Window, document: &web::Document, cfg: &EffectsConfig) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let mut running = Running::default();

    if dom::prefers_reduced_motion(window) {
        log::info!("[fx] reduced motion requested; decorative effects off");
    } else {
        let (pointer_w, pointer) = tracker(PointerState::default());
        let (viewport_w, viewport) = tracker(dom::viewport(window));
        let (scroll_w, scroll) = tracker(dom::scroll_state(window, document));
        let (hover_w, hovering) = tracker(false);

        events::pointer::wire_pointer_tracking(document, pointer_w);
        events::scroll::wire_resize(window, cfg, viewport_w);

        if let Some(h) = init_guarded("cursor", || {
            let (ring, handle) = effects::cursor::init(document, cfg, pointer, hovering)?;
            events::pointer::wire_hover_delegation(document, ring, hover_w);
            Ok(handle)
        }) {
            running.loops.push(("cursor", h));
        }
        if let Some(h) = init_guarded("stars", || effects::stars::init(document, cfg, viewport.clone())) {
            running.loops.push(("stars", h));
        }
        init_guarded("scroll", || events::scroll::wire_scroll(window, document, cfg, scroll_w));
        if let Some(h) = init_guarded("parallax", || effects::parallax::init(document, scroll)) {
            running.loops.push(("parallax", h));
        }
        init_guarded("magnetic", || effects::hover::init_magnetic(document, cfg));
        init_guarded("tilt", || effects::hover::init_tilt(document, cfg));
        running.particles = init_guarded("particles", || effects::particles::init(document, cfg, viewport));
        events::keyboard::wire_konami(document, cfg);
    }

    events::scroll::wire_anchor_scroll(window, document, cfg);
    init_guarded("reveal", || effects::reveal::init(document, cfg));
    init_guarded("forms", || effects::forms::init(document));

    log::info!("[fx] {} frame loops running", running.loops.len());
    RUNNING.with(|r| *r.borrow_mut() = running);
}
