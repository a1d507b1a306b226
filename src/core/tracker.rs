//! Input trackers: latest pointer, viewport and scroll values.
//!
//! A tracker is created as a `(TrackerWriter, Tracker)` pair. The writer is
//! not `Clone`, so exactly one event handler owns it; readers are cheap
//! clones handed to every effect that needs the value.

use crate::core::interp::clamp;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

pub struct TrackerWriter<T: Copy> {
    cell: Rc<Cell<T>>,
}

#[derive(Clone)]
pub struct Tracker<T: Copy> {
    cell: Rc<Cell<T>>,
}

pub fn tracker<T: Copy>(initial: T) -> (TrackerWriter<T>, Tracker<T>) {
    let cell = Rc::new(Cell::new(initial));
    (TrackerWriter { cell: cell.clone() }, Tracker { cell })
}

impl<T: Copy> TrackerWriter<T> {
    #[inline]
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    #[inline]
    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub fn reader(&self) -> Tracker<T> {
        Tracker {
            cell: self.cell.clone(),
        }
    }
}

impl<T: Copy> Tracker<T> {
    #[inline]
    pub fn get(&self) -> T {
        self.cell.get()
    }
}

/// Pointer position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

impl ViewportState {
    /// Dimensions are kept positive so ratios against them stay finite.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    /// Document scroll height minus client height.
    pub scrollable: f64,
}

impl ScrollState {
    pub fn new(offset: f64, scrollable: f64) -> Self {
        Self {
            offset: offset.max(0.0),
            scrollable,
        }
    }

    pub fn percent(self) -> f64 {
        scroll_percent(self.offset, self.scrollable)
    }
}

/// Scroll progress in `[0, 100]`. A page that cannot scroll reports 0.
pub fn scroll_percent(offset: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    clamp(offset / scrollable * 100.0, 0.0, 100.0)
}
