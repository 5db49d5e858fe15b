mod api;
mod handlers;
mod logger;
mod memory;
mod worker;

pub use api::{AlbumApi, ApiError, ApiErrorKind, ApiResult, UploadFile};
pub use logger::{StatusEntry, StatusLog};
pub use memory::MemoryAlbumApi;
pub use worker::worker_task;

// Re-export types from the layout crate
pub use album_layout::{Album, CoverUpdate, Page, Photo, SavePlan, UploadTicket};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum AlbumCommand {
    LoadAlbum,
    AddPage,
    /// Append two pages and show the new spread
    AddSpread,
    /// Grow or shrink the album. `None` keeps the current count.
    SetPageCount {
        requested: Option<usize>,
    },
    SavePage {
        plan: SavePlan,
    },
    UploadToPage {
        page_id: String,
        files: Vec<UploadFile>,
        /// Set when the upload targets a template slot
        ticket: Option<UploadTicket>,
    },
    RemovePhoto {
        page_id: String,
        photo_id: String,
    },
    MovePhoto {
        photo_id: String,
        to_page_id: String,
        photo_order: Option<i64>,
    },
    ReorderPhotos {
        page_id: String,
        photo_ids: Vec<String>,
    },
    SaveCover {
        update: CoverUpdate,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum AlbumUpdate {
    AlbumLoaded {
        album: Album,
    },
    PageAdded {
        album: Album,
    },
    SpreadAdded {
        album: Album,
        /// Spread-mode view showing the new pages
        view_index: usize,
    },
    PageCountApplied {
        album: Album,
        added: usize,
        deleted: usize,
    },
    PageSaved {
        page_id: String,
        page: Page,
    },
    PageSaveFailed {
        page_id: String,
        kind: ApiErrorKind,
        message: String,
    },
    PhotosUploaded {
        page_id: String,
        ticket: Option<UploadTicket>,
        photo_ids: Vec<String>,
        album: Album,
    },
    PhotoRemoved {
        photo_id: String,
        album: Album,
    },
    PhotoMoved {
        photo_id: String,
        album: Album,
    },
    PhotosReordered {
        page_id: String,
        album: Album,
    },
    CoverSaved,
    Error {
        kind: ApiErrorKind,
        message: String,
    },
}
