use crate::core::{card_parallax, hero_parallax, FrameEffect, LoopHandle, ScrollState, Tick, Tracker};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hero and feature-card parallax, redrawn on frames where the scroll
/// offset moved.
pub struct ParallaxView {
    scroll: Tracker<ScrollState>,
    hero: Option<web::HtmlElement>,
    cards: Vec<web::HtmlElement>,
    last_offset: Option<f64>,
}

impl FrameEffect for ParallaxView {
    fn frame(&mut self, _now_ms: f64) -> Tick {
        let offset = self.scroll.get().offset;
        if self.last_offset == Some(offset) {
            return Tick::Continue;
        }
        self.last_offset = Some(offset);

        if let Some(hero) = &self.hero {
            let p = hero_parallax(offset);
            dom::set_transform(hero, &format!("translateY({:.2}px)", p.translate_y));
            dom::set_style(hero, "opacity", &format!("{:.3}", p.opacity));
        }
        for (i, card) in self.cards.iter().enumerate() {
            if let Some(y) = card_parallax(offset, card.offset_top() as f64, i) {
                dom::set_transform(card, &format!("translateY({:.2}px)", y));
            }
        }
        Tick::Continue
    }
}

pub fn init(document: &web::Document, scroll: Tracker<ScrollState>) -> anyhow::Result<LoopHandle> {
    let hero = dom::query_all(document, ".hero").into_iter().next();
    let cards = dom::query_all(document, ".feature");
    if hero.is_none() && cards.is_empty() {
        anyhow::bail!("no .hero or .feature elements");
    }
    let view = ParallaxView {
        scroll,
        hero,
        cards,
        last_offset: None,
    };
    Ok(frame::start_loop(Rc::new(RefCell::new(view))))
}
