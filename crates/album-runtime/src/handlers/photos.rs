use album_layout::{MovePhoto, ReorderPhotos, UploadTicket};
use tokio::sync::mpsc;

use super::send_error;
use crate::AlbumUpdate;
use crate::api::{AlbumApi, ApiError, UploadFile};

/// Upload files to the end of a page. The ticket, if any, comes back with
/// the new photo ids so the caller can place them in the slot it opened.
pub async fn handle_upload<A: AlbumApi>(
    api: &A,
    album_id: &str,
    page_id: String,
    files: Vec<UploadFile>,
    ticket: Option<UploadTicket>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    if files.is_empty() {
        log::debug!("Nothing to upload");
        return;
    }
    let count = files.len();

    let result = async {
        let photos = api.upload_photos(album_id, &page_id, files).await?;
        let album = api.get_album(album_id).await?;
        Ok::<_, ApiError>((photos, album))
    }
    .await;

    match result {
        Ok((photos, album)) => {
            log::info!("Uploaded {} photo(s)", count);
            let _ = update_tx.send(AlbumUpdate::PhotosUploaded {
                page_id,
                ticket,
                photo_ids: photos.into_iter().map(|p| p.id).collect(),
                album,
            });
        }
        Err(e) => send_error("Upload failed", &e, update_tx),
    }
}

pub async fn handle_remove<A: AlbumApi>(
    api: &A,
    album_id: &str,
    page_id: String,
    photo_id: String,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let result = async {
        api.remove_photo(album_id, &page_id, &photo_id).await?;
        api.get_album(album_id).await
    }
    .await;

    match result {
        Ok(album) => {
            log::info!("Photo removed");
            let _ = update_tx.send(AlbumUpdate::PhotoRemoved { photo_id, album });
        }
        Err(e) => send_error("Failed to remove photo", &e, update_tx),
    }
}

pub async fn handle_move<A: AlbumApi>(
    api: &A,
    album_id: &str,
    photo_id: String,
    to_page_id: String,
    photo_order: Option<i64>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let body = MovePhoto {
        page_id: to_page_id,
        photo_order,
    };

    let result = async {
        api.move_photo(album_id, &photo_id, &body).await?;
        api.get_album(album_id).await
    }
    .await;

    match result {
        Ok(album) => {
            log::info!("Photo moved");
            let _ = update_tx.send(AlbumUpdate::PhotoMoved { photo_id, album });
        }
        Err(e) => send_error("Failed to move photo", &e, update_tx),
    }
}

pub async fn handle_reorder<A: AlbumApi>(
    api: &A,
    album_id: &str,
    page_id: String,
    photo_ids: Vec<String>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let body = ReorderPhotos { photo_ids };

    let result = async {
        api.reorder_photos(album_id, &page_id, &body).await?;
        api.get_album(album_id).await
    }
    .await;

    match result {
        Ok(album) => {
            let _ = update_tx.send(AlbumUpdate::PhotosReordered { page_id, album });
        }
        Err(e) => send_error("Failed to reorder photos", &e, update_tx),
    }
}
