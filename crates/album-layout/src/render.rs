//! Render model
//!
//! Turns a page or cover into positioned boxes for a drawing surface. Every
//! surface takes photo geometry from `effective_layout`, so a page looks the
//! same in the editor, the shared view and the flip-book.

use crate::constants::*;
use crate::geometry::{CropTransform, Frame, PhotoLayout, effective_layout};
use crate::types::*;

/// Where a page is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSurface {
    EditorCanvas,
    SharedView,
    FlipBookPage,
    FlipBookSpread,
}

impl RenderSurface {
    pub const ALL: [RenderSurface; 4] = [
        RenderSurface::EditorCanvas,
        RenderSurface::SharedView,
        RenderSurface::FlipBookPage,
        RenderSurface::FlipBookSpread,
    ];

    /// Smallest font size the surface may scale text down to
    pub fn min_font_size(self) -> Option<f64> {
        match self {
            RenderSurface::FlipBookPage | RenderSurface::FlipBookSpread => {
                Some(FLIP_BOOK_MIN_FONT_SIZE)
            }
            RenderSurface::EditorCanvas | RenderSurface::SharedView => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoBox {
    pub photo_id: String,
    pub storage_path: String,
    pub frame: Frame,
    /// Image placement inside the box when the photo is cropped
    pub crop: Option<CropTransform>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickerBox {
    pub sticker_id: String,
    pub path: String,
    pub frame: Frame,
}

/// A text centered on `x`, `y`
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub min_font_size: Option<f64>,
    pub color: String,
}

impl TextBox {
    fn new(text: &TextElement, fallback_color: &str, surface: RenderSurface) -> Self {
        Self {
            content: text.content.clone(),
            x: text.x,
            y: text.y,
            font_size: text.font_size,
            min_font_size: surface.min_font_size(),
            color: resolve_color(&text.color, fallback_color).to_string(),
        }
    }
}

/// One page, ready to draw. Photos come first, then stickers, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct PageScene {
    pub page_id: String,
    pub surface: RenderSurface,
    pub background: String,
    pub photos: Vec<PhotoBox>,
    pub stickers: Vec<StickerBox>,
    pub texts: Vec<TextBox>,
}

impl PageScene {
    /// Geometry of every photo, in drawing order
    pub fn photo_frames(&self) -> Vec<Frame> {
        self.photos.iter().map(|p| p.frame).collect()
    }
}

pub(crate) fn compose_scene<'a>(
    page_id: &str,
    photos: impl IntoIterator<Item = (&'a Photo, PhotoLayout)>,
    config: &PageConfig,
    surface: RenderSurface,
) -> PageScene {
    let photos = photos
        .into_iter()
        .map(|(photo, layout)| PhotoBox {
            photo_id: photo.id.clone(),
            storage_path: photo.storage_path.clone(),
            frame: layout.frame,
            crop: layout.crop.and_then(|c| c.display_transform()),
        })
        .collect();

    let stickers = config
        .stickers
        .iter()
        .filter(|s| !s.path.is_empty())
        .map(|s| StickerBox {
            sticker_id: s.id.clone(),
            path: s.path.clone(),
            frame: Frame {
                x: s.x,
                y: s.y,
                w: s.w,
                h: s.h,
                rotation: s.rotation,
            },
        })
        .collect();

    let texts = config
        .texts
        .iter()
        .map(|t| TextBox::new(t, DEFAULT_PAGE_TEXT_COLOR, surface))
        .collect();

    PageScene {
        page_id: page_id.to_string(),
        surface,
        background: resolve_color(&config.background_color, DEFAULT_PAGE_BACKGROUND).to_string(),
        photos,
        stickers,
        texts,
    }
}

/// Lay out a stored page for `surface`
pub fn render_page(page: &Page, surface: RenderSurface) -> PageScene {
    let photos = page
        .sorted_photos()
        .into_iter()
        .enumerate()
        .map(|(index, photo)| (photo, effective_layout(photo, index)));
    compose_scene(&page.id, photos, &page.page_config, surface)
}

/// Both halves of a spread
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadScene {
    pub left: Option<PageScene>,
    pub right: Option<PageScene>,
}

pub fn render_spread(
    left: Option<&Page>,
    right: Option<&Page>,
    surface: RenderSurface,
) -> SpreadScene {
    SpreadScene {
        left: left.map(|p| render_page(p, surface)),
        right: right.map(|p| render_page(p, surface)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverFace {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverScene {
    pub face: CoverFace,
    pub image_url: Option<String>,
    /// Solid fill used when there is no cover image
    pub background: Option<String>,
    /// Titles; only the front face carries text
    pub texts: Vec<TextBox>,
}

/// Lay out the front or back cover. `cover_url` is the resolved image of
/// the album's cover, if it has one.
pub fn render_cover(
    cover: &CoverConfig,
    cover_url: Option<&str>,
    face: CoverFace,
    surface: RenderSurface,
) -> CoverScene {
    let image_url = cover_url
        .or(cover.cover_url.as_deref())
        .filter(|url| !url.is_empty())
        .map(str::to_string);
    let background = match image_url {
        Some(_) => None,
        None => Some(EMPTY_COVER_BACKGROUND.to_string()),
    };
    let texts = match face {
        CoverFace::Front => cover
            .resolved_texts()
            .iter()
            .map(|t| TextBox::new(t, DEFAULT_COVER_TEXT_COLOR, surface))
            .collect(),
        CoverFace::Back => Vec::new(),
    };

    CoverScene {
        face,
        image_url,
        background,
        texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CropRect, StoredLayout};

    #[test]
    fn test_invalid_colors_fall_back() {
        let mut page = Page::new("p", 0);
        page.page_config.background_color = "blue".into();
        page.page_config.texts.push(TextElement::new("t", 50.0, 50.0, "#12345"));

        let scene = render_page(&page, RenderSurface::SharedView);
        assert_eq!(scene.background, "#ffffff");
        assert_eq!(scene.texts[0].color, "#000000");
    }

    #[test]
    fn test_stickers_without_path_are_skipped() {
        let mut page = Page::new("p", 0);
        page.page_config.stickers.push(Sticker::spawn("a", ""));
        page.page_config.stickers.push(Sticker::spawn("b", "stickers/star.png"));
        let scene = render_page(&page, RenderSurface::EditorCanvas);
        assert_eq!(scene.stickers.len(), 1);
        assert_eq!(scene.stickers[0].sticker_id, "b");
    }

    #[test]
    fn test_flip_book_sets_min_font() {
        let mut page = Page::new("p", 0);
        page.page_config.texts.push(TextElement::new("t", 50.0, 50.0, "#ff0000"));
        assert_eq!(
            render_page(&page, RenderSurface::FlipBookPage).texts[0].min_font_size,
            Some(12.0)
        );
        assert_eq!(
            render_page(&page, RenderSurface::EditorCanvas).texts[0].min_font_size,
            None
        );
    }

    #[test]
    fn test_cropped_photo_carries_transform() {
        let mut page = Page::new("p", 0);
        let mut photo = Photo::new("a", "a.jpg", 0);
        photo.layout = Some(StoredLayout {
            x: Some(10.0),
            crop: Some(CropRect::new(10.0, 0.0, 80.0, 100.0)),
            ..Default::default()
        });
        page.album_photos.push(photo);

        let scene = render_page(&page, RenderSurface::FlipBookSpread);
        let crop = scene.photos[0].crop.unwrap();
        assert_eq!(crop.width_pct, 125.0);
        assert_eq!(crop.left_pct, -12.5);
    }

    #[test]
    fn test_cover_faces() {
        let cover = CoverConfig {
            header_text: Some("Summer".into()),
            ..Default::default()
        };
        let front = render_cover(&cover, None, CoverFace::Front, RenderSurface::FlipBookPage);
        assert_eq!(front.background.as_deref(), Some("#333333"));
        assert_eq!(front.texts.len(), 1);
        assert_eq!(front.texts[0].color, "#ffffff");
        assert_eq!((front.texts[0].x, front.texts[0].y), (50.0, 18.0));

        let back = render_cover(&cover, Some("covers/blue.jpg"), CoverFace::Back, RenderSurface::FlipBookPage);
        assert!(back.texts.is_empty());
        assert_eq!(back.image_url.as_deref(), Some("covers/blue.jpg"));
        assert_eq!(back.background, None);
    }
}
