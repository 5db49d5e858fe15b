//! Pointer gestures on a page
//!
//! A gesture is one press-move-release sequence on a single element:
//! - `controller`: the press/drag/resize state machine and pixel → percent conversion
//! - `snap`: alignment of a dragged photo against the page and its siblings
//! - `resize`: corner-handle resizing with a fixed opposite corner

mod controller;
mod resize;
mod snap;

pub use controller::*;
pub use resize::*;
pub use snap::*;

/// Pointer sample in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    /// Milliseconds on any monotonic clock; only differences are used
    pub time_ms: u64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, time_ms: 0 }
    }

    pub fn at(x: f64, y: f64, time_ms: u64) -> Self {
        Self { x, y, time_ms }
    }

    /// Straight-line distance in pixels
    pub fn distance_to(&self, other: &Pointer) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Bounding box of the rendered page in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer travel from `from` to `to`, in percent of the page
    pub fn delta_percent(&self, from: &Pointer, to: &Pointer) -> (f64, f64) {
        (
            (to.x - from.x) / self.width * 100.0,
            (to.y - from.y) / self.height * 100.0,
        )
    }

    /// Pointer position relative to the page, in percent
    pub fn to_percent(&self, pointer: &Pointer) -> (f64, f64) {
        (
            (pointer.x - self.left) / self.width * 100.0,
            (pointer.y - self.top) / self.height * 100.0,
        )
    }
}

/// An element on a page that can be selected or manipulated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Photo(String),
    Sticker(String),
    Text(String),
}

impl ElementRef {
    pub fn id(&self) -> &str {
        match self {
            ElementRef::Photo(id) | ElementRef::Sticker(id) | ElementRef::Text(id) => id,
        }
    }
}

/// Alignment guides shown while a photo is dragged
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuideLines {
    /// x position of the active vertical guide
    pub vertical: Option<f64>,
    /// y position of the active horizontal guide
    pub horizontal: Option<f64>,
}

impl GuideLines {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}
