//! In-process `AlbumApi` over a single album document
//!
//! Used for offline editing of saved album JSON and as a stand-in server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use album_layout::{
    AddPhoto, Album, CoverUpdate, LayoutUpdate, MovePhoto, Page, PageConfigUpdate, Photo,
    ReorderPhotos, StoredLayout,
};

use crate::api::{AlbumApi, ApiError, ApiResult, UploadFile};

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ROW_ID.fetch_add(1, Ordering::SeqCst))
}

fn not_found(what: &str, id: &str) -> ApiError {
    ApiError::from_status(404, format!("{} {} not found", what, id))
}

pub struct MemoryAlbumApi {
    album: Mutex<Album>,
    max_upload_bytes: Option<usize>,
}

impl MemoryAlbumApi {
    pub fn new(album: Album) -> Self {
        Self {
            album: Mutex::new(album),
            max_upload_bytes: None,
        }
    }

    /// Reject uploads larger than `bytes` with a 413
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    /// Current state of the album
    pub fn snapshot(&self) -> Album {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Album> {
        self.album.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Run `f` on the album if `album_id` matches
    fn with_album<T>(
        &self,
        album_id: &str,
        f: impl FnOnce(&mut Album) -> ApiResult<T>,
    ) -> ApiResult<T> {
        let mut album = self.lock();
        if album.id != album_id {
            return Err(not_found("Album", album_id));
        }
        f(&mut album)
    }
}

fn page_mut<'a>(album: &'a mut Album, page_id: &str) -> ApiResult<&'a mut Page> {
    album
        .pages
        .iter_mut()
        .find(|p| p.id == page_id)
        .ok_or_else(|| not_found("Page", page_id))
}

fn photo_mut<'a>(album: &'a mut Album, photo_id: &str) -> ApiResult<&'a mut Photo> {
    album
        .pages
        .iter_mut()
        .flat_map(|p| p.album_photos.iter_mut())
        .find(|p| p.id == photo_id)
        .ok_or_else(|| not_found("Photo", photo_id))
}

fn take_photo(album: &mut Album, photo_id: &str) -> ApiResult<Photo> {
    for page in album.pages.iter_mut() {
        if let Some(pos) = page.album_photos.iter().position(|p| p.id == photo_id) {
            return Ok(page.album_photos.remove(pos));
        }
    }
    Err(not_found("Photo", photo_id))
}

fn next_photo_order(page: &Page) -> i64 {
    page.album_photos
        .iter()
        .map(|p| p.photo_order + 1)
        .max()
        .unwrap_or(0)
}

impl AlbumApi for MemoryAlbumApi {
    async fn get_album(&self, album_id: &str) -> ApiResult<Album> {
        self.with_album(album_id, |album| Ok(album.clone()))
    }

    async fn add_page(&self, album_id: &str) -> ApiResult<Page> {
        self.with_album(album_id, |album| {
            let order = album
                .pages
                .iter()
                .map(|p| p.page_order + 1)
                .max()
                .unwrap_or(0);
            let page = Page::new(next_id("page"), order);
            album.pages.push(page.clone());
            Ok(page)
        })
    }

    async fn delete_page(&self, album_id: &str, page_id: &str) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            let before = album.pages.len();
            album.pages.retain(|p| p.id != page_id);
            if album.pages.len() == before {
                return Err(not_found("Page", page_id));
            }
            Ok(())
        })
    }

    async fn update_page_config(
        &self,
        album_id: &str,
        page_id: &str,
        body: &PageConfigUpdate,
    ) -> ApiResult<Page> {
        self.with_album(album_id, |album| {
            let page = page_mut(album, page_id)?;
            page.page_config = body.page_config.clone();
            Ok(page.clone())
        })
    }

    async fn upload_photos(
        &self,
        album_id: &str,
        page_id: &str,
        files: Vec<UploadFile>,
    ) -> ApiResult<Vec<Photo>> {
        if let Some(limit) = self.max_upload_bytes
            && let Some(file) = files.iter().find(|f| f.bytes.len() > limit)
        {
            return Err(ApiError::from_status(
                413,
                format!("{} exceeds {} bytes", file.file_name, limit),
            ));
        }

        self.with_album(album_id, |album| {
            let album_key = album.id.clone();
            let page = page_mut(album, page_id)?;
            let mut order = next_photo_order(page);
            let mut created = Vec::with_capacity(files.len());
            for file in &files {
                let photo = Photo::new(
                    next_id("photo"),
                    format!("{}/{}", album_key, file.file_name),
                    order,
                );
                order += 1;
                page.album_photos.push(photo.clone());
                created.push(photo);
            }
            Ok(created)
        })
    }

    async fn add_photo_to_page(
        &self,
        album_id: &str,
        page_id: &str,
        body: &AddPhoto,
    ) -> ApiResult<Photo> {
        self.with_album(album_id, |album| {
            let page = page_mut(album, page_id)?;
            let photo = Photo::new(next_id("photo"), body.storage_path.clone(), body.photo_order);
            page.album_photos.push(photo.clone());
            Ok(photo)
        })
    }

    async fn remove_photo(&self, album_id: &str, page_id: &str, photo_id: &str) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            let page = page_mut(album, page_id)?;
            let pos = page
                .album_photos
                .iter()
                .position(|p| p.id == photo_id)
                .ok_or_else(|| not_found("Photo", photo_id))?;
            page.album_photos.remove(pos);
            Ok(())
        })
    }

    async fn move_photo(&self, album_id: &str, photo_id: &str, body: &MovePhoto) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            // Check the target before detaching the photo
            page_mut(album, &body.page_id)?;
            let mut photo = take_photo(album, photo_id)?;
            let page = page_mut(album, &body.page_id)?;
            photo.photo_order = body.photo_order.unwrap_or_else(|| next_photo_order(page));
            // Geometry belongs to the old page
            photo.layout = None;
            page.album_photos.push(photo);
            Ok(())
        })
    }

    async fn reorder_photos(
        &self,
        album_id: &str,
        page_id: &str,
        body: &ReorderPhotos,
    ) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            let page = page_mut(album, page_id)?;
            for (order, photo_id) in body.photo_ids.iter().enumerate() {
                let photo = page
                    .album_photos
                    .iter_mut()
                    .find(|p| &p.id == photo_id)
                    .ok_or_else(|| not_found("Photo", photo_id))?;
                photo.photo_order = order as i64;
            }
            Ok(())
        })
    }

    async fn update_photo_layout(
        &self,
        album_id: &str,
        photo_id: &str,
        body: &LayoutUpdate,
    ) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            photo_mut(album, photo_id)?.layout = Some(StoredLayout::from(body.layout));
            Ok(())
        })
    }

    async fn update_cover(&self, album_id: &str, body: &CoverUpdate) -> ApiResult<()> {
        self.with_album(album_id, |album| {
            album.cover_id = body.cover_id.clone();
            album.cover_config = body.cover_config.clone();
            Ok(())
        })
    }
}
