//! Gesture state machine
//!
//! ```text
//! Idle ──press──▶ Pressed ──moved past threshold──▶ Dragging ──release──▶ Idle (dragged)
//!   │               └──────────────release─────────────────────────────▶ Idle (clicked)
//!   └──resize handle──▶ Resizing ──release──▶ Idle (resized)
//! ```
//!
//! The controller owns the gesture for its whole lifetime: `end` and
//! `cancel` always return it to `Idle`, and a new gesture cannot begin while
//! one is active.

use crate::constants::DRAG_THRESHOLD_PX;
use crate::geometry::Frame;

use super::{ContainerBox, ElementRef, Pointer, ResizeHandle, resize_frame};

#[derive(Debug, Clone)]
struct Press {
    element: ElementRef,
    start: Pointer,
    start_frame: Frame,
    container: ContainerBox,
}

#[derive(Debug, Clone)]
struct Resize {
    element: ElementRef,
    handle: ResizeHandle,
    start_frame: Frame,
    container: ContainerBox,
    min_size: f64,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed(Press),
    Dragging(Press),
    Resizing(Resize),
}

/// Geometry change produced by one pointer move
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMove {
    /// Element's top-left (or center, for texts) moved to `x`, `y`.
    /// Not yet clamped: bounds depend on the element kind.
    Drag { element: ElementRef, x: f64, y: f64 },
    /// Element's new box
    Resize { element: ElementRef, frame: Frame },
}

/// How a gesture ended
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEnd {
    /// No gesture was active
    None,
    /// Released without moving past the drag threshold
    Clicked(ElementRef),
    Dragged(ElementRef),
    Resized(ElementRef),
}

#[derive(Debug, Clone)]
pub struct GestureController {
    phase: Phase,
    drag_threshold_px: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl GestureController {
    pub fn new(drag_threshold_px: f64) -> Self {
        Self {
            phase: Phase::Idle,
            drag_threshold_px,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// True once a press has moved far enough to count as a drag
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.phase, Phase::Resizing(_))
    }

    /// Element the active gesture belongs to
    pub fn element(&self) -> Option<&ElementRef> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pressed(press) | Phase::Dragging(press) => Some(&press.element),
            Phase::Resizing(resize) => Some(&resize.element),
        }
    }

    /// Start a press on an element whose geometry is `start_frame`.
    /// Returns false if another gesture is active.
    pub fn begin_press(
        &mut self,
        element: ElementRef,
        pointer: Pointer,
        start_frame: Frame,
        container: ContainerBox,
    ) -> bool {
        if self.is_active() {
            log::debug!("Ignoring press on {:?}: gesture already active", element);
            return false;
        }
        self.phase = Phase::Pressed(Press {
            element,
            start: pointer,
            start_frame,
            container,
        });
        true
    }

    /// Start resizing from a corner handle.
    /// Returns false if another gesture is active.
    pub fn begin_resize(
        &mut self,
        element: ElementRef,
        handle: ResizeHandle,
        start_frame: Frame,
        container: ContainerBox,
        min_size: f64,
    ) -> bool {
        if self.is_active() {
            log::debug!("Ignoring resize of {:?}: gesture already active", element);
            return false;
        }
        self.phase = Phase::Resizing(Resize {
            element,
            handle,
            start_frame,
            container,
            min_size,
        });
        true
    }

    /// Feed a pointer move. Returns the geometry change, if any.
    pub fn handle_move(&mut self, pointer: Pointer) -> Option<GestureMove> {
        if let Phase::Pressed(press) = &self.phase {
            if press.start.distance_to(&pointer) <= self.drag_threshold_px {
                return None;
            }
            let press = press.clone();
            self.phase = Phase::Dragging(press);
        }

        match &self.phase {
            Phase::Idle | Phase::Pressed(_) => None,
            Phase::Dragging(press) => {
                let (dx, dy) = press.container.delta_percent(&press.start, &pointer);
                Some(GestureMove::Drag {
                    element: press.element.clone(),
                    x: press.start_frame.x + dx,
                    y: press.start_frame.y + dy,
                })
            }
            Phase::Resizing(resize) => {
                let target = resize.container.to_percent(&pointer);
                Some(GestureMove::Resize {
                    element: resize.element.clone(),
                    frame: resize_frame(resize.start_frame, resize.handle, target, resize.min_size),
                })
            }
        }
    }

    /// Finish the active gesture
    pub fn end(&mut self) -> GestureEnd {
        match std::mem::take(&mut self.phase) {
            Phase::Idle => GestureEnd::None,
            Phase::Pressed(press) => GestureEnd::Clicked(press.element),
            Phase::Dragging(press) => GestureEnd::Dragged(press.element),
            Phase::Resizing(resize) => GestureEnd::Resized(resize.element),
        }
    }

    /// Abandon the active gesture without reporting a click
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}
