use album_layout::CoverUpdate;
use tokio::sync::mpsc;

use super::send_error;
use crate::AlbumUpdate;
use crate::api::AlbumApi;

pub async fn handle_save<A: AlbumApi>(
    api: &A,
    album_id: &str,
    update: CoverUpdate,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    match api.update_cover(album_id, &update).await {
        Ok(()) => {
            log::info!("Cover saved");
            let _ = update_tx.send(AlbumUpdate::CoverSaved);
        }
        Err(e) => send_error("Failed to save cover", &e, update_tx),
    }
}
