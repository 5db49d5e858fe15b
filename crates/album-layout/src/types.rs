use crate::constants::*;
use crate::geometry::{CropRect, StoredLayout};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Album has no pages")]
    NoPages,
    #[error("Page {0} does not exist")]
    PageNotFound(usize),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Returns true for `#rrggbb` strings
pub fn is_valid_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Use `color` if it is a valid `#rrggbb` string, otherwise `fallback`
pub fn resolve_color<'a>(color: &'a str, fallback: &'a str) -> &'a str {
    if is_valid_hex_color(color) {
        color
    } else {
        fallback
    }
}

/// Treat an explicit JSON `null` like a missing field
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cover texts without a stored position sit at the cover title spot,
/// not the page text spot. `null` is an empty list.
#[cfg(feature = "serde")]
fn cover_texts<'de, D>(deserializer: D) -> std::result::Result<Vec<TextElement>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct StoredCoverText {
        #[serde(default)]
        id: String,
        #[serde(default)]
        content: String,
        x: Option<f64>,
        y: Option<f64>,
        #[serde(rename = "fontSize", default = "default_font_size")]
        font_size: f64,
        #[serde(default)]
        color: String,
    }

    let stored: Option<Vec<StoredCoverText>> = Option::deserialize(deserializer)?;
    Ok(stored
        .unwrap_or_default()
        .into_iter()
        .map(|text| TextElement {
            id: text.id,
            content: text.content,
            x: text.x.unwrap_or(DEFAULT_COVER_TEXT_X),
            y: text.y.unwrap_or(DEFAULT_COVER_TEXT_Y),
            font_size: text.font_size,
            color: text.color,
        })
        .collect())
}

#[cfg(feature = "serde")]
fn default_sticker_position() -> f64 {
    STICKER_DEFAULT_POSITION
}

#[cfg(feature = "serde")]
fn default_sticker_size() -> f64 {
    STICKER_DEFAULT_SIZE
}

#[cfg(feature = "serde")]
fn default_text_x() -> f64 {
    DEFAULT_PAGE_TEXT_X
}

#[cfg(feature = "serde")]
fn default_text_y() -> f64 {
    DEFAULT_PAGE_TEXT_Y
}

#[cfg(feature = "serde")]
fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

#[cfg(feature = "serde")]
fn default_background() -> String {
    DEFAULT_PAGE_BACKGROUND.to_string()
}

#[cfg(feature = "serde")]
fn default_text_color() -> String {
    DEFAULT_PAGE_TEXT_COLOR.to_string()
}

/// A photo placed on a page
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Photo {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub storage_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photo_order: i64,
    /// Geometry as last saved; `None` or a layout without `x` means
    /// "use the default grid cell"
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub layout: Option<StoredLayout>,
}

impl Photo {
    pub fn new(id: impl Into<String>, storage_path: impl Into<String>, photo_order: i64) -> Self {
        Self {
            id: id.into(),
            storage_path: storage_path.into(),
            photo_order,
            layout: None,
        }
    }

    /// Crop stored with this photo, if any
    pub fn crop(&self) -> Option<CropRect> {
        self.layout.as_ref().and_then(|l| l.crop)
    }
}

/// Decorative image placed on a page (top-left anchored)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sticker {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Storage path of the element image
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: String,
    #[cfg_attr(feature = "serde", serde(default = "default_sticker_position"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_sticker_position"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_sticker_size"))]
    pub w: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_sticker_size"))]
    pub h: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
}

impl Sticker {
    /// A freshly added sticker at the spawn position
    pub fn spawn(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            x: STICKER_SPAWN_POSITION,
            y: STICKER_SPAWN_POSITION,
            w: STICKER_DEFAULT_SIZE,
            h: STICKER_DEFAULT_SIZE,
            rotation: 0.0,
        }
    }
}

/// Free text placed on a page or cover. Unlike photos, `x`/`y` is the
/// center of the text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextElement {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "String::is_empty")
    )]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    #[cfg_attr(feature = "serde", serde(default = "default_text_x"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_text_y"))]
    pub y: f64,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "fontSize", default = "default_font_size")
    )]
    pub font_size: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
}

impl TextElement {
    pub fn new(id: impl Into<String>, x: f64, y: f64, color: &str) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            x,
            y,
            font_size: DEFAULT_FONT_SIZE,
            color: color.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Clamp a font size to the range the editor allows
pub fn clamp_font_size(size: f64) -> f64 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Per-page decoration, persisted as an opaque blob by the API
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_background"))]
    pub background_color: String,
    #[cfg_attr(feature = "serde", serde(default = "default_text_color"))]
    pub text_color: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub stickers: Vec<Sticker>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub texts: Vec<TextElement>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_PAGE_BACKGROUND.to_string(),
            text_color: DEFAULT_PAGE_TEXT_COLOR.to_string(),
            stickers: Vec::new(),
            texts: Vec::new(),
        }
    }
}

/// One album page
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_order: i64,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub page_config: PageConfig,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub album_photos: Vec<Photo>,
}

impl Page {
    pub fn new(id: impl Into<String>, page_order: i64) -> Self {
        Self {
            id: id.into(),
            page_order,
            ..Default::default()
        }
    }

    /// Photos in display order (stable by `photo_order`)
    pub fn sorted_photos(&self) -> Vec<&Photo> {
        let mut photos: Vec<&Photo> = self.album_photos.iter().collect();
        photos.sort_by_key(|p| p.photo_order);
        photos
    }
}

/// Cover decoration. `header_*` fields are the single-title format that
/// predates `texts` and are still read.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoverConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_email: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cover_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "cover_texts"))]
    pub texts: Vec<TextElement>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub header_text: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub header_x: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub header_y: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub header_font_size: Option<f64>,
}

impl CoverConfig {
    /// Texts to draw on the cover. Falls back to the legacy single title
    /// when no texts are stored.
    pub fn resolved_texts(&self) -> Vec<TextElement> {
        if !self.texts.is_empty() {
            return self.texts.clone();
        }
        match self.header_text.as_deref() {
            Some(header) if !header.is_empty() => vec![TextElement {
                id: String::new(),
                content: header.to_string(),
                x: self.header_x.unwrap_or(DEFAULT_COVER_TEXT_X),
                y: self.header_y.unwrap_or(DEFAULT_COVER_TEXT_Y),
                font_size: self.header_font_size.unwrap_or(DEFAULT_FONT_SIZE),
                color: DEFAULT_COVER_TEXT_COLOR.to_string(),
            }],
            _ => Vec::new(),
        }
    }
}

/// An album as returned by the API
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Album {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub cover_config: CoverConfig,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub pages: Vec<Page>,
}

impl Album {
    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// Page by 1-based position in display order
    pub fn page_by_number(&self, number: usize) -> Result<&Page> {
        if self.pages.is_empty() {
            return Err(LayoutError::NoPages);
        }
        let mut pages: Vec<&Page> = self.pages.iter().collect();
        pages.sort_by_key(|p| p.page_order);
        number
            .checked_sub(1)
            .and_then(|i| pages.get(i).copied())
            .ok_or(LayoutError::PageNotFound(number))
    }
}
