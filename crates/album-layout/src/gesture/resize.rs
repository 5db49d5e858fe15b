//! Corner-handle resizing
//!
//! Each handle keeps the opposite corner fixed and moves the two edges it
//! touches to the pointer. Edges are clamped so the box keeps a minimum
//! size and does not grow past the page. Resizing never snaps.

use crate::constants::MAX_PERCENT;
use crate::geometry::Frame;

/// Corner handle being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top-left
    Nw,
    /// Top-right
    Ne,
    /// Bottom-left
    Sw,
    /// Bottom-right
    Se,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::Nw,
        ResizeHandle::Ne,
        ResizeHandle::Sw,
        ResizeHandle::Se,
    ];

    fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::Sw)
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::Ne)
    }
}

/// Box produced by dragging `handle` of `start` to `pointer` (page percent)
pub fn resize_frame(start: Frame, handle: ResizeHandle, pointer: (f64, f64), min_size: f64) -> Frame {
    let (px, py) = pointer;
    let mut frame = start;

    if handle.moves_left() {
        frame.x = px.min(start.right() - min_size).max(0.0);
        frame.w = start.right() - frame.x;
    } else {
        frame.w = (px - start.x).min(MAX_PERCENT - start.x).max(min_size);
    }

    if handle.moves_top() {
        frame.y = py.min(start.bottom() - min_size).max(0.0);
        frame.h = start.bottom() - frame.y;
    } else {
        frame.h = (py - start.y).min(MAX_PERCENT - start.y).max(min_size);
    }

    frame
}
