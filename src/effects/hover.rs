use crate::config::EffectsConfig;
use crate::core::{
    magnetic_offset, magnetic_transform, tilt_angles, tilt_transform, Bounds, MAGNETIC_REST,
    TILT_REST,
};
use crate::dom;
use glam::Vec2;
use web_sys as web;

fn bounds_of(el: &web::HtmlElement) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[inline]
fn pointer_of(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Wire `mousemove`/`mouseleave` on each element; `on_move` maps pointer and
/// bounds to a transform, `rest` is written on leave.
fn wire_each(
    elements: Vec<web::HtmlElement>,
    rest: &'static str,
    on_move: impl Fn(Vec2, Bounds) -> String + Clone + 'static,
) -> usize {
    let n = elements.len();
    for el in elements {
        let target = el.clone();
        let on_move = on_move.clone();
        dom::on(&el, "mousemove", move |ev: web::MouseEvent| {
            let transform = on_move(pointer_of(&ev), bounds_of(&target));
            dom::set_transform(&target, &transform);
        });
        let target = el.clone();
        dom::on(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::set_transform(&target, rest);
        });
    }
    n
}

pub fn init_magnetic(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<()> {
    let strength = cfg.magnetic_strength;
    let n = wire_each(dom::query_all(document, "button"), MAGNETIC_REST, move |p, b| {
        magnetic_transform(magnetic_offset(p, b, strength))
    });
    log::debug!("[hover] magnetic on {} buttons", n);
    Ok(())
}

pub fn init_tilt(document: &web::Document, cfg: &EffectsConfig) -> anyhow::Result<()> {
    let divisor = cfg.tilt_divisor;
    let n = wire_each(dom::query_all(document, ".feature"), TILT_REST, move |p, b| {
        let (rx, ry) = tilt_angles(p, b, divisor);
        tilt_transform(rx, ry)
    });
    log::debug!("[hover] tilt on {} cards", n);
    Ok(())
}
