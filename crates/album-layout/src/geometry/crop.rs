//! Crop rectangles
//!
//! A crop selects a sub-rectangle of the source image (in percent of the
//! image). Rendering a crop scales the image up and shifts it so the crop
//! rectangle exactly fills the photo's box.

use crate::constants::MAX_PERCENT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest width/height a crop can shrink to
const MIN_CROP_EXTENT: f64 = 1.0;

/// Visible part of a photo's source image, in percent of the image
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropRect {
    pub l: f64,
    pub t: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for CropRect {
    fn default() -> Self {
        Self {
            l: 0.0,
            t: 0.0,
            w: MAX_PERCENT,
            h: MAX_PERCENT,
        }
    }
}

/// One editable crop value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropEdge {
    Left,
    Top,
    Width,
    Height,
}

/// Placement of the image inside its box, as CSS-style percentages of the box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropTransform {
    pub width_pct: f64,
    pub height_pct: f64,
    pub left_pct: f64,
    pub top_pct: f64,
}

impl CropRect {
    pub fn new(l: f64, t: f64, w: f64, h: f64) -> Self {
        Self { l, t, w, h }
    }

    /// Whether the image must be drawn cropped
    pub fn is_active(&self) -> bool {
        self.l > 0.0 || self.t > 0.0 || self.w < MAX_PERCENT || self.h < MAX_PERCENT
    }

    /// Image placement that makes the crop rectangle fill the box, or `None`
    /// if the image is drawn unmodified
    pub fn display_transform(&self) -> Option<CropTransform> {
        if !self.is_active() {
            return None;
        }
        Some(CropTransform {
            width_pct: (MAX_PERCENT / self.w) * 100.0,
            height_pct: (MAX_PERCENT / self.h) * 100.0,
            left_pct: -(self.l / self.w) * 100.0,
            top_pct: -(self.t / self.h) * 100.0,
        })
    }

    /// Apply an edit from the crop panel.
    ///
    /// Left/top are clamped to `[0, 99]`, and moving them shrinks the
    /// width/height so the crop stays inside the image. Width/height are
    /// clamped to `[1, 100 - offset]`.
    pub fn with_edge(mut self, edge: CropEdge, value: f64) -> Self {
        let max_offset = MAX_PERCENT - MIN_CROP_EXTENT;
        match edge {
            CropEdge::Left => {
                self.l = value.clamp(0.0, max_offset);
                self.w = self.w.min(MAX_PERCENT - self.l);
            }
            CropEdge::Top => {
                self.t = value.clamp(0.0, max_offset);
                self.h = self.h.min(MAX_PERCENT - self.t);
            }
            CropEdge::Width => {
                self.w = value.max(MIN_CROP_EXTENT).min(MAX_PERCENT - self.l);
            }
            CropEdge::Height => {
                self.h = value.max(MIN_CROP_EXTENT).min(MAX_PERCENT - self.t);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crop_is_inactive() {
        assert!(!CropRect::default().is_active());
        assert_eq!(CropRect::default().display_transform(), None);
    }

    #[test]
    fn test_left_crop_transform() {
        let crop = CropRect::new(10.0, 0.0, 80.0, 100.0);
        let transform = crop.display_transform().unwrap();
        assert_eq!(transform.width_pct, 125.0);
        assert_eq!(transform.left_pct, -12.5);
        assert_eq!(transform.height_pct, 100.0);
        assert_eq!(transform.top_pct, 0.0);
    }

    #[test]
    fn test_moving_left_edge_shrinks_width() {
        let crop = CropRect::default().with_edge(CropEdge::Left, 30.0);
        assert_eq!(crop, CropRect::new(30.0, 0.0, 70.0, 100.0));

        // A narrow crop is left alone
        let crop = CropRect::new(0.0, 0.0, 50.0, 100.0).with_edge(CropEdge::Left, 30.0);
        assert_eq!(crop.w, 50.0);
    }

    #[test]
    fn test_width_clamped_to_remaining_image() {
        let crop = CropRect::new(40.0, 20.0, 10.0, 10.0);
        assert_eq!(crop.with_edge(CropEdge::Width, 90.0).w, 60.0);
        assert_eq!(crop.with_edge(CropEdge::Width, 0.0).w, 1.0);
        assert_eq!(crop.with_edge(CropEdge::Height, 95.0).h, 80.0);
        assert_eq!(crop.with_edge(CropEdge::Top, 90.0).h, 10.0);
    }

    #[test]
    fn test_edge_offsets_stay_on_image() {
        let crop = CropRect::default().with_edge(CropEdge::Left, 100.0);
        assert_eq!(crop, CropRect::new(99.0, 0.0, 1.0, 100.0));
        let transform = crop.display_transform().unwrap();
        assert_eq!(transform.width_pct, 10_000.0);
        assert_eq!(transform.left_pct, -9_900.0);

        let crop = CropRect::default().with_edge(CropEdge::Top, 250.0);
        assert_eq!((crop.t, crop.h), (99.0, 1.0));
        assert!(crop.display_transform().unwrap().top_pct.is_finite());

        let crop = CropRect::new(20.0, 20.0, 50.0, 50.0)
            .with_edge(CropEdge::Left, -5.0)
            .with_edge(CropEdge::Top, -5.0);
        assert_eq!(crop, CropRect::new(0.0, 0.0, 50.0, 50.0));
    }
}
