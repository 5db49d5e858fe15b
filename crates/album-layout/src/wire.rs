//! Request bodies exchanged with the albums API, plus album document loading

use crate::geometry::PhotoLayout;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `PATCH /albums/{album}/photos/{photo}/layout`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutUpdate {
    pub layout: PhotoLayout,
}

/// `PATCH /albums/{album}/pages/{page}`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageConfigUpdate {
    pub page_config: PageConfig,
}

/// `PATCH /albums/{album}/pages/{page}/photos/reorder`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReorderPhotos {
    pub photo_ids: Vec<String>,
}

/// `PATCH /albums/{album}/photos/{photo}/move`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovePhoto {
    pub page_id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub photo_order: Option<i64>,
}

/// `POST /albums/{album}/pages/{page}/photos`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddPhoto {
    pub storage_path: String,
    pub photo_order: i64,
}

/// `PATCH /albums/{album}` for the cover
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverUpdate {
    pub cover_id: Option<String>,
    pub cover_config: CoverConfig,
}

/// Parse an album document as returned by `GET /albums/{album}`
#[cfg(feature = "serde")]
pub fn parse_album(json: &str) -> Result<Album> {
    let album = serde_json::from_str(json)?;
    Ok(album)
}

/// Read an album document from disk
#[cfg(feature = "serde")]
pub async fn load_album(path: impl AsRef<std::path::Path>) -> Result<Album> {
    let bytes = tokio::fs::read(path).await?;
    let album = serde_json::from_slice(&bytes)?;
    Ok(album)
}
