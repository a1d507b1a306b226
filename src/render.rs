use crate::core::{star_fill_style, trail_fill_style, Star};
use crate::dom::js_err;
use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D drawing for the star field.
pub struct StarPainter {
    ctx: web::CanvasRenderingContext2d,
    trail_style: String,
}

impl StarPainter {
    pub fn new(canvas: &web::HtmlCanvasElement, fade_alpha: f32) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected context type: {:?}", e))?;
        Ok(Self {
            ctx,
            trail_style: trail_fill_style(fade_alpha),
        })
    }

    /// Darken the previous frame instead of clearing it.
    pub fn fade(&self, width: u32, height: u32) {
        self.ctx.set_fill_style_str(&self.trail_style);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    pub fn draw_star(&self, star: &Star) {
        self.ctx.set_fill_style_str(&star_fill_style(star.opacity));
        self.ctx.begin_path();
        _ = self.ctx.arc(
            star.position.x as f64,
            star.position.y as f64,
            star.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }
}
