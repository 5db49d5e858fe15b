use tokio::sync::mpsc;

use crate::api::AlbumApi;
use crate::handlers;
use crate::{AlbumCommand, AlbumUpdate};

/// Async worker task that performs album API calls and sends updates.
///
/// Commands are handled one at a time in arrival order. Returns once every
/// command sender has been dropped.
pub async fn worker_task<A>(
    api: A,
    album_id: String,
    mut command_rx: mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: mpsc::UnboundedSender<AlbumUpdate>,
) where
    A: AlbumApi + Send + Sync,
{
    log::debug!("Album worker started for {}", album_id);

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &api, &album_id, &update_tx).await;
    }

    log::debug!("Album worker for {} stopped", album_id);
}

async fn process_command<A: AlbumApi>(
    cmd: AlbumCommand,
    api: &A,
    album_id: &str,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    match cmd {
        AlbumCommand::LoadAlbum => {
            handlers::pages::handle_load(api, album_id, update_tx).await;
        }
        AlbumCommand::AddPage => {
            handlers::pages::handle_add_page(api, album_id, update_tx).await;
        }
        AlbumCommand::AddSpread => {
            handlers::pages::handle_add_spread(api, album_id, update_tx).await;
        }
        AlbumCommand::SetPageCount { requested } => {
            handlers::pages::handle_set_page_count(api, album_id, requested, update_tx).await;
        }
        AlbumCommand::SavePage { plan } => {
            handlers::pages::handle_save_page(api, album_id, plan, update_tx).await;
        }
        AlbumCommand::UploadToPage {
            page_id,
            files,
            ticket,
        } => {
            handlers::photos::handle_upload(api, album_id, page_id, files, ticket, update_tx).await;
        }
        AlbumCommand::RemovePhoto { page_id, photo_id } => {
            handlers::photos::handle_remove(api, album_id, page_id, photo_id, update_tx).await;
        }
        AlbumCommand::MovePhoto {
            photo_id,
            to_page_id,
            photo_order,
        } => {
            handlers::photos::handle_move(api, album_id, photo_id, to_page_id, photo_order, update_tx)
                .await;
        }
        AlbumCommand::ReorderPhotos { page_id, photo_ids } => {
            handlers::photos::handle_reorder(api, album_id, page_id, photo_ids, update_tx).await;
        }
        AlbumCommand::SaveCover { update } => {
            handlers::cover::handle_save(api, album_id, update, update_tx).await;
        }
    }
}
