//! Magnetic button and tilt card transforms. These follow raw pointer
//! events directly; nothing here is smoothed.

use crate::constants::*;
use glam::Vec2;

/// Client-space rectangle of the hovered element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

pub const MAGNETIC_REST: &str = "translate(0, 0) scale(1)";
pub const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)";

#[inline]
pub fn magnetic_offset(pointer: Vec2, bounds: Bounds, strength: f32) -> Vec2 {
    (pointer - bounds.center()) * strength
}

pub fn magnetic_transform(offset: Vec2) -> String {
    format!(
        "translate({:.2}px, {:.2}px) scale({})",
        offset.x, offset.y, MAGNETIC_SCALE
    )
}

/// `(rotate_x, rotate_y)` in degrees: the card leans toward the pointer.
#[inline]
pub fn tilt_angles(pointer: Vec2, bounds: Bounds, divisor: f32) -> (f32, f32) {
    let center = bounds.center();
    let rotate_x = (pointer.y - center.y) / divisor;
    let rotate_y = (center.x - pointer.x) / divisor;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{}px) scale({})",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y, TILT_LIFT_PX, TILT_SCALE
    )
}
