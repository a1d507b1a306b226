use crate::config::EffectsConfig;
use crate::core::KeySequence;
use crate::dom;
use web_sys as web;

const RAINBOW_KEYFRAMES: &str = "
  @keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    100% { filter: hue-rotate(360deg); }
  }
";

/// Hue-rotate the whole page for `duration_ms`, then restore it.
fn activate_rainbow(document: &web::Document, duration_ms: u32) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = dom::create_element(document, "style")?;
    style.set_text_content(Some(RAINBOW_KEYFRAMES));
    head.append_child(&style).map_err(dom::js_err)?;
    dom::set_style(&body, "animation", "rainbow 2s infinite");

    dom::set_timeout(duration_ms, move || {
        dom::set_style(&body, "animation", "");
        style.remove();
    });
    Ok(())
}

pub fn wire_konami(document: &web::Document, cfg: &EffectsConfig) {
    let mut sequence = KeySequence::new(cfg.konami_sequence);
    let duration_ms = cfg.konami_effect_ms;
    let doc = document.clone();
    dom::on(document, "keydown", move |ev: web::KeyboardEvent| {
        if sequence.push(&ev.key()) {
            log::info!("[konami] activated");
            if let Err(e) = activate_rainbow(&doc, duration_ms) {
                log::warn!("[konami] {:?}", e);
            }
        }
    });
}
