pub mod constants;
mod cover;
mod editor;
pub mod geometry;
pub mod gesture;
mod options;
mod page_count;
mod pagination;
mod render;
mod stats;
mod template;
mod types;
mod wire;

pub use cover::CoverEditor;
pub use editor::{GestureOutcome, PageEditor, SavePlan};
pub use geometry::{
    CropEdge, CropRect, CropTransform, Frame, PhotoLayout, StoredLayout, default_layout,
    effective_layout,
};
pub use gesture::{ContainerBox, ElementRef, GuideLines, Pointer, ResizeHandle};
pub use options::*;
pub use page_count::*;
pub use pagination::*;
pub use render::{
    CoverFace, CoverScene, PageScene, PhotoBox, RenderSurface, SpreadScene, StickerBox, TextBox,
    render_cover, render_page, render_spread,
};
pub use stats::*;
pub use template::*;
pub use types::*;
pub use wire::*;
