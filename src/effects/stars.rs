use crate::config::EffectsConfig;
use crate::core::{
    parallax_offset, star_count, tracker, translate_px, FrameEffect, LoopHandle, StarField,
    Throttle, Tick, Tracker, ViewportState,
};
use crate::dom;
use crate::frame;
use crate::render::StarPainter;
use anyhow::anyhow;
use glam::Vec2;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct StarCanvas {
    field: StarField,
    painter: StarPainter,
    canvas: web::HtmlCanvasElement,
    viewport: Tracker<ViewportState>,
    shift: Tracker<Vec2>,
    size: ViewportState,
}

impl FrameEffect for StarCanvas {
    fn frame(&mut self, _now_ms: f64) -> Tick {
        let vp = self.viewport.get();
        if vp != self.size {
            dom::sync_canvas_backing_size(&self.canvas, vp);
            self.field.resize(vp);
            self.size = vp;
            log::debug!("[stars] canvas {}x{}", vp.width, vp.height);
        }

        self.painter.fade(self.size.width, self.size.height);
        self.field.step();
        for star in &self.field.stars {
            self.painter.draw_star(star);
        }
        dom::set_transform(&self.canvas, &translate_px(self.shift.get()));
        Tick::Continue
    }
}

pub fn init(
    document: &web::Document,
    cfg: &EffectsConfig,
    viewport: Tracker<ViewportState>,
) -> anyhow::Result<LoopHandle> {
    let canvas = dom::create_element(document, "canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("not a canvas: {:?}", e))?;
    canvas.set_id("stars");
    dom::body(document)?
        .prepend_with_node_1(&canvas)
        .map_err(dom::js_err)?;

    let size = viewport.get();
    dom::sync_canvas_backing_size(&canvas, size);
    let count = star_count(size.width, cfg.star_width_divisor, cfg.star_cap);
    let field = StarField::new(size, count, StdRng::from_entropy());
    let painter = StarPainter::new(&canvas, cfg.star_trail_fade_alpha)?;
    log::info!("[stars] {} stars for {}px width", count, size.width);

    // Pointer parallax runs on its own throttled listener, not the frame loop.
    let (shift_writer, shift) = tracker(Vec2::ZERO);
    let mut throttle = Throttle::new(cfg.star_pointer_throttle_ms);
    let strength = cfg.star_parallax_strength;
    let vp = viewport.clone();
    dom::on(document, "mousemove", move |ev: web::MouseEvent| {
        if !throttle.ready(instant::now()) {
            return;
        }
        let p = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        shift_writer.set(parallax_offset(p, vp.get(), strength));
    });

    let view = StarCanvas {
        field,
        painter,
        canvas,
        viewport,
        shift,
        size,
    };
    Ok(frame::start_loop(Rc::new(RefCell::new(view))))
}
