use crate::constants::{HOVER_TARGET_CLASSES, HOVER_TARGET_TAGS};
use crate::core::interp::lerp;
use glam::Vec2;

/// Dot and ring positions for the custom cursor.
///
/// The dot follows the pointer exactly; the ring is exponentially smoothed
/// toward it once per frame, with a larger factor while hovering an
/// interactive element.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub dot: Vec2,
    pub ring: Vec2,
    pub target: Vec2,
    pub hovering: bool,
    smoothing: f32,
    hover_smoothing: f32,
}

impl CursorFollower {
    pub fn new(smoothing: f32, hover_smoothing: f32) -> Self {
        Self {
            dot: Vec2::ZERO,
            ring: Vec2::ZERO,
            target: Vec2::ZERO,
            hovering: false,
            smoothing,
            hover_smoothing,
        }
    }

    #[inline]
    pub fn point_to(&mut self, pointer: Vec2) {
        self.target = pointer;
        self.dot = pointer;
    }

    pub fn set_hover(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        if self.hovering {
            self.hover_smoothing
        } else {
            self.smoothing
        }
    }

    pub fn step(&mut self) {
        let f = self.factor();
        self.ring = Vec2::new(
            lerp(self.ring.x, self.target.x, f),
            lerp(self.ring.y, self.target.y, f),
        );
    }
}

/// Capability check used by the delegated hover listener: does an element
/// with this tag and class list count as interactive?
pub fn is_hover_target<'a>(tag: &str, classes: impl IntoIterator<Item = &'a str>) -> bool {
    if HOVER_TARGET_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
    {
        return true;
    }
    classes
        .into_iter()
        .any(|c| HOVER_TARGET_CLASSES.contains(&c))
}

pub fn translate_px(p: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", p.x, p.y)
}
