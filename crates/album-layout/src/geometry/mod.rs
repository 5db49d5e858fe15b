//! Percentage-based page geometry
//!
//! Every placed element lives in a coordinate space where the page's
//! rendered box spans `0..100` on both axes:
//! - Frames and photo layouts (top-left anchored boxes)
//! - The implicit two-column default grid
//! - Crop rectangles and their display transform

mod crop;
mod grid;
mod types;

pub use crop::*;
pub use grid::*;
pub use types::*;
