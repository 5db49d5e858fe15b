//! Alignment snapping for dragged photos
//!
//! Vertical guide targets are the page's left edge, center and right edge
//! plus the left/center/right of every other photo; horizontal targets
//! work the same way with top/middle/bottom. Each axis snaps independently
//! to the closest target within the threshold.

use crate::constants::PAGE_SNAP_TARGETS;
use crate::geometry::{Frame, clamp_axis};

use super::GuideLines;

/// Snapped top-left position and the guides that caused it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    pub x: f64,
    pub y: f64,
    pub guides: GuideLines,
}

/// Snap `moving` (already clamped to the page) against the page and
/// `siblings`. Distances must be strictly below `threshold`; on a tie the
/// first candidate found wins.
pub fn snap_to_guides(moving: Frame, siblings: &[Frame], threshold: f64) -> SnapOutcome {
    let vertical_targets = targets(siblings, |f| [f.x, f.center_x(), f.right()]);
    let horizontal_targets = targets(siblings, |f| [f.y, f.center_y(), f.bottom()]);

    let (x, vertical) = snap_axis(moving.x, moving.w, &vertical_targets, threshold);
    let (y, horizontal) = snap_axis(moving.y, moving.h, &horizontal_targets, threshold);

    SnapOutcome {
        x,
        y,
        guides: GuideLines {
            vertical,
            horizontal,
        },
    }
}

fn targets(siblings: &[Frame], edges: impl Fn(&Frame) -> [f64; 3]) -> Vec<f64> {
    let mut targets = PAGE_SNAP_TARGETS.to_vec();
    for sibling in siblings {
        targets.extend(edges(sibling));
    }
    targets
}

/// Snap one axis. `start` is the top-left coordinate, `extent` the size.
fn snap_axis(start: f64, extent: f64, targets: &[f64], threshold: f64) -> (f64, Option<f64>) {
    // Offsets of the leading edge, center and trailing edge from `start`
    let anchors = [0.0, extent / 2.0, extent];

    let mut best = threshold;
    let mut found: Option<(f64, f64)> = None;
    for &target in targets {
        for offset in anchors {
            let distance = (start + offset - target).abs();
            if distance < best {
                best = distance;
                found = Some((target, offset));
            }
        }
    }

    match found {
        Some((target, offset)) => (clamp_axis(target - offset, extent), Some(target)),
        None => (start, None),
    }
}
