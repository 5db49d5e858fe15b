//! Shared constants for the album page editor
//!
//! This module centralizes the magic numbers used by layout, gesture
//! handling and pagination. All geometry values are percentages of the
//! page's rendered box unless noted otherwise.

// =============================================================================
// Page Coordinate Space
// =============================================================================

/// Upper bound of the percentage coordinate space
pub const MAX_PERCENT: f64 = 100.0;

/// Column pitch of the implicit two-column default grid
pub const DEFAULT_GRID_PITCH: f64 = 48.0;

/// Gutter between default grid cells and the page edge
pub const DEFAULT_GRID_GUTTER: f64 = 2.0;

/// Edge length of a default grid cell
pub const DEFAULT_GRID_CELL: f64 = 46.0;

// =============================================================================
// Gestures
// =============================================================================

/// Pointer travel (pixels) before a press becomes a drag
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Distance (percent) under which a dragged edge snaps to a guide
pub const SNAP_THRESHOLD: f64 = 2.5;

/// Page-level snap targets shared by both axes
pub const PAGE_SNAP_TARGETS: [f64; 3] = [0.0, 50.0, 100.0];

/// Minimum photo edge length after resizing
pub const MIN_PHOTO_SIZE: f64 = 8.0;

/// Minimum sticker edge length after resizing
pub const MIN_STICKER_SIZE: f64 = 3.0;

/// Two taps on the same text within this window open the content editor
pub const DOUBLE_TAP_MS: u64 = 400;

// =============================================================================
// Stickers
// =============================================================================

/// Edge length of a sticker that has no stored size
pub const STICKER_DEFAULT_SIZE: f64 = 12.0;

/// Position of a sticker that has no stored position
pub const STICKER_DEFAULT_POSITION: f64 = 10.0;

/// Position at which newly added stickers appear
pub const STICKER_SPAWN_POSITION: f64 = 15.0;

// =============================================================================
// Text
// =============================================================================

/// Smallest font size the editor allows (pixels)
pub const MIN_FONT_SIZE: f64 = 14.0;

/// Largest font size the editor allows (pixels)
pub const MAX_FONT_SIZE: f64 = 52.0;

/// Font size of new texts (pixels)
pub const DEFAULT_FONT_SIZE: f64 = 28.0;

/// Flip-book surfaces never shrink text below this size (pixels)
pub const FLIP_BOOK_MIN_FONT_SIZE: f64 = 12.0;

/// Default anchor of a page text
pub const DEFAULT_PAGE_TEXT_X: f64 = 50.0;
pub const DEFAULT_PAGE_TEXT_Y: f64 = 25.0;

/// Default anchor of a cover title
pub const DEFAULT_COVER_TEXT_X: f64 = 50.0;
pub const DEFAULT_COVER_TEXT_Y: f64 = 18.0;

// =============================================================================
// Colors
// =============================================================================

pub const DEFAULT_PAGE_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_PAGE_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_COVER_TEXT_COLOR: &str = "#ffffff";

/// Background shown for a cover without an image
pub const EMPTY_COVER_BACKGROUND: &str = "#333333";

// =============================================================================
// Album Shape
// =============================================================================

pub const MIN_PAGES: usize = 1;
pub const MAX_PAGES: usize = 50;

/// Viewports at or below this width (pixels) use single-page mode
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Flip-book size on narrow viewports (pixels)
pub const BOOK_SIZE_MOBILE: (u32, u32) = (340, 460);

/// Flip-book size on wide viewports (pixels)
pub const BOOK_SIZE_DESKTOP: (u32, u32) = (680, 920);
