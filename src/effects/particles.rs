use crate::config::EffectsConfig;
use crate::constants::PARTICLE_EASING;
use crate::core::{Keyframe, ParticleCensus, ParticleSpec, Tracker, ViewportState};
use crate::dom::{self, IntervalHandle};
use js_sys::{Array, Object, Reflect};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn keyframes_to_js(frames: &[Keyframe]) -> anyhow::Result<Array> {
    let out = Array::new();
    for kf in frames {
        let obj = Object::new();
        Reflect::set(&obj, &"transform".into(), &kf.transform.as_str().into()).map_err(dom::js_err)?;
        Reflect::set(&obj, &"opacity".into(), &kf.opacity.into()).map_err(dom::js_err)?;
        if let Some(offset) = kf.offset {
            Reflect::set(&obj, &"offset".into(), &offset.into()).map_err(dom::js_err)?;
        }
        out.push(&obj);
    }
    Ok(out)
}

fn spawn(
    document: &web::Document,
    spec: &ParticleSpec,
    viewport_height: f64,
    census: &Rc<RefCell<ParticleCensus>>,
) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let el = dom::create_element(document, "div")?;
    el.set_attribute("style", &spec.style()).map_err(dom::js_err)?;
    body.append_child(&el).map_err(dom::js_err)?;

    let frames = Object::from(keyframes_to_js(&spec.keyframes(viewport_height))?);
    let opts = web::KeyframeAnimationOptions::new();
    opts.set_duration(spec.lifetime_ms);
    opts.set_easing(PARTICLE_EASING);
    let animation = el.animate_with_keyframe_animation_options(Some(&frames), &opts);

    census.borrow_mut().spawned();
    let census = census.clone();
    let finished = Closure::once(move || {
        el.remove();
        census.borrow_mut().retired();
    });
    animation.set_onfinish(Some(finished.as_ref().unchecked_ref()));
    finished.forget();
    Ok(())
}

/// Spawn one particle per interval until the handle is cancelled. Each
/// particle removes itself when its animation finishes.
pub fn init(
    document: &web::Document,
    cfg: &EffectsConfig,
    viewport: Tracker<ViewportState>,
) -> anyhow::Result<IntervalHandle> {
    let doc = document.clone();
    let census = Rc::new(RefCell::new(ParticleCensus::default()));
    let mut rng = StdRng::from_entropy();
    let (min_ms, span_ms) = (cfg.particle_lifetime_min_ms, cfg.particle_lifetime_span_ms);
    dom::set_interval(cfg.particle_interval_ms, move || {
        let spec = ParticleSpec::random(&mut rng, min_ms, span_ms);
        let height = viewport.get().height as f64;
        if let Err(e) = spawn(&doc, &spec, height, &census) {
            log::warn!("[particles] spawn failed: {:?}", e);
            return;
        }
        let c = census.borrow();
        log::trace!("[particles] live={} total={}", c.live(), c.total());
    })
}
