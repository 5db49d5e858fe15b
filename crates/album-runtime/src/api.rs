use std::fmt;
use std::future::Future;

use album_layout::{
    AddPhoto, Album, CoverUpdate, LayoutUpdate, MovePhoto, Page, PageConfigUpdate, Photo,
    ReorderPhotos,
};
use thiserror::Error;

/// Broad class of an API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Upload rejected for size (HTTP 413)
    PayloadTooLarge,
    NotFound,
    /// Request never reached the server
    Network,
    /// Any other error status
    Server,
    /// Response could not be read
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::PayloadTooLarge => "payload too large",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::Network => "network error",
            ApiErrorKind::Server => "server error",
            ApiErrorKind::Decode => "invalid response",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify an HTTP error status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            413 => ApiErrorKind::PayloadTooLarge,
            404 => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Server,
        };
        Self::new(kind, message)
    }

    /// Text to show the user
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::PayloadTooLarge => {
                "The photo is too large to upload. Try a smaller image.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Albums/photos/covers REST API
pub trait AlbumApi {
    fn get_album(&self, album_id: &str) -> impl Future<Output = ApiResult<Album>> + Send;

    /// Append an empty page
    fn add_page(&self, album_id: &str) -> impl Future<Output = ApiResult<Page>> + Send;

    fn delete_page(
        &self,
        album_id: &str,
        page_id: &str,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    fn update_page_config(
        &self,
        album_id: &str,
        page_id: &str,
        body: &PageConfigUpdate,
    ) -> impl Future<Output = ApiResult<Page>> + Send;

    /// Store the files and attach them to the end of a page
    fn upload_photos(
        &self,
        album_id: &str,
        page_id: &str,
        files: Vec<UploadFile>,
    ) -> impl Future<Output = ApiResult<Vec<Photo>>> + Send;

    /// Attach an already stored image to a page
    fn add_photo_to_page(
        &self,
        album_id: &str,
        page_id: &str,
        body: &AddPhoto,
    ) -> impl Future<Output = ApiResult<Photo>> + Send;

    fn remove_photo(
        &self,
        album_id: &str,
        page_id: &str,
        photo_id: &str,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    fn move_photo(
        &self,
        album_id: &str,
        photo_id: &str,
        body: &MovePhoto,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    fn reorder_photos(
        &self,
        album_id: &str,
        page_id: &str,
        body: &ReorderPhotos,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    fn update_photo_layout(
        &self,
        album_id: &str,
        photo_id: &str,
        body: &LayoutUpdate,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    fn update_cover(
        &self,
        album_id: &str,
        body: &CoverUpdate,
    ) -> impl Future<Output = ApiResult<()>> + Send;
}
