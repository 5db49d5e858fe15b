//! Default placement for photos without a saved layout
//!
//! Photos that were uploaded but never positioned fall into an implicit
//! two-column grid. `effective_layout` is the only place that decides
//! between a saved layout and the grid cell, so every renderer and the
//! editor agree on where a photo is.

use crate::constants::{DEFAULT_GRID_CELL, DEFAULT_GRID_GUTTER, DEFAULT_GRID_PITCH};
use crate::types::Photo;

use super::{Frame, PhotoLayout};

/// Grid cell for the photo at `index` on its page.
///
/// Cells are 46% square with a 2% gutter, two per row:
/// index 0 → (2, 2), 1 → (50, 2), 2 → (2, 50), 3 → (50, 50).
pub fn default_layout(index: usize) -> Frame {
    let col = (index % 2) as f64;
    let row = (index / 2) as f64;
    Frame::new(
        col * DEFAULT_GRID_PITCH + DEFAULT_GRID_GUTTER,
        row * DEFAULT_GRID_PITCH + DEFAULT_GRID_GUTTER,
        DEFAULT_GRID_CELL,
        DEFAULT_GRID_CELL,
    )
}

/// Geometry a photo is drawn and edited with.
///
/// Uses the stored layout when it has a numeric `x`; any other missing
/// field is filled from the grid cell at `index_in_page`, and rotation
/// defaults to 0. Without a stored position the grid cell is used as is.
pub fn effective_layout(photo: &Photo, index_in_page: usize) -> PhotoLayout {
    let cell = default_layout(index_in_page);
    match photo.layout {
        Some(stored) if stored.has_position() => PhotoLayout {
            frame: Frame {
                x: stored.x.unwrap_or(cell.x),
                y: stored.y.unwrap_or(cell.y),
                w: stored.w.unwrap_or(cell.w),
                h: stored.h.unwrap_or(cell.h),
                rotation: stored.rotation.unwrap_or(0.0),
            },
            crop: stored.crop,
        },
        _ => cell.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StoredLayout;

    #[test]
    fn test_default_cells() {
        assert_eq!(default_layout(0), Frame::new(2.0, 2.0, 46.0, 46.0));
        assert_eq!(default_layout(1), Frame::new(50.0, 2.0, 46.0, 46.0));
        assert_eq!(default_layout(2), Frame::new(2.0, 50.0, 46.0, 46.0));
        assert_eq!(default_layout(3), Frame::new(50.0, 50.0, 46.0, 46.0));
        // Fifth photo starts a third row below the page
        assert_eq!(default_layout(4).y, 98.0);
    }

    #[test]
    fn test_default_cells_do_not_overlap() {
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert!(!default_layout(i).intersects(&default_layout(j)));
                }
            }
        }
    }

    #[test]
    fn test_default_cells_keep_gutters() {
        for i in 0..4 {
            let cell = default_layout(i);
            assert!(cell.x >= 2.0 && cell.y >= 2.0);
            assert!(cell.right() <= 98.0 && cell.bottom() <= 98.0);
        }
        // 4% between neighbours: 2% on each side
        assert_eq!(default_layout(1).x - default_layout(0).right(), 4.0);
    }

    #[test]
    fn test_effective_layout_without_position_uses_grid() {
        let mut photo = Photo::new("p", "a.jpg", 0);
        assert_eq!(effective_layout(&photo, 3).frame, default_layout(3));

        photo.layout = Some(StoredLayout {
            y: Some(10.0),
            ..Default::default()
        });
        assert_eq!(effective_layout(&photo, 1).frame, default_layout(1));
    }

    #[test]
    fn test_effective_layout_fills_missing_fields() {
        let mut photo = Photo::new("p", "a.jpg", 0);
        photo.layout = Some(StoredLayout {
            x: Some(30.0),
            w: Some(20.0),
            ..Default::default()
        });
        let layout = effective_layout(&photo, 2);
        assert_eq!(layout.frame, Frame::new(30.0, 50.0, 20.0, 46.0));
        assert_eq!(layout.crop, None);
    }
}
