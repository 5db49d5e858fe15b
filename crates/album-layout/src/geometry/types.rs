//! Geometry data types
//!
//! These are the boxes that drag, resize, snapping and templates operate on,
//! plus the persisted (possibly partial) form of a photo layout.

use crate::constants::MAX_PERCENT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::CropRect;

/// A box on the page in percent, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Degrees, display only
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            rotation: 0.0,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal center
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Vertical center
    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Whether the interiors of two frames overlap. Frames that only share
    /// an edge do not intersect.
    pub fn intersects(&self, other: &Frame) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the frame lies entirely on the page
    pub fn is_within_page(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= MAX_PERCENT && self.bottom() <= MAX_PERCENT
    }

    /// Move the frame so it cannot leave the page, keeping its size
    pub fn clamp_position(mut self) -> Self {
        self.x = clamp_axis(self.x, self.w);
        self.y = clamp_axis(self.y, self.h);
        self
    }
}

/// Clamp a top-left coordinate to `[0, 100 - extent]`
pub fn clamp_axis(value: f64, extent: f64) -> f64 {
    value.min(MAX_PERCENT - extent).max(0.0)
}

/// Complete geometry of a photo on its page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhotoLayout {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub frame: Frame,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub crop: Option<CropRect>,
}

impl PhotoLayout {
    pub fn crop_or_default(&self) -> CropRect {
        self.crop.unwrap_or_default()
    }
}

impl From<Frame> for PhotoLayout {
    fn from(frame: Frame) -> Self {
        Self { frame, crop: None }
    }
}

/// A photo layout as stored by the API. Rows written by older editors may
/// carry only some of the fields; a layout counts as present only when it
/// has a numeric `x`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredLayout {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub x: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub y: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub w: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub h: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rotation: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub crop: Option<CropRect>,
}

impl StoredLayout {
    pub fn has_position(&self) -> bool {
        self.x.is_some()
    }
}

impl From<PhotoLayout> for StoredLayout {
    fn from(layout: PhotoLayout) -> Self {
        Self {
            x: Some(layout.frame.x),
            y: Some(layout.frame.y),
            w: Some(layout.frame.w),
            h: Some(layout.frame.h),
            rotation: Some(layout.frame.rotation),
            crop: layout.crop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_edges() {
        let frame = Frame::new(50.0, 10.0, 20.0, 30.0);
        assert_eq!(frame.right(), 70.0);
        assert_eq!(frame.center_x(), 60.0);
        assert_eq!(frame.bottom(), 40.0);
        assert_eq!(frame.center_y(), 25.0);
    }

    #[test]
    fn test_touching_frames_do_not_intersect() {
        let left = Frame::new(0.0, 0.0, 50.0, 50.0);
        let right = Frame::new(50.0, 0.0, 50.0, 50.0);
        assert!(!left.intersects(&right));

        let overlapping = Frame::new(49.0, 10.0, 10.0, 10.0);
        assert!(left.intersects(&overlapping));
    }

    #[test]
    fn test_clamp_position_keeps_size() {
        let frame = Frame::new(95.0, -20.0, 30.0, 40.0).clamp_position();
        assert_eq!(frame.x, 70.0);
        assert_eq!(frame.y, 0.0);
        assert_eq!(frame.w, 30.0);
        assert!(frame.is_within_page());
    }
}
