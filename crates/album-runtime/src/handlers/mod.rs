pub mod cover;
pub mod pages;
pub mod photos;

use tokio::sync::mpsc;

use crate::AlbumUpdate;
use crate::api::ApiError;

/// Report a failed call to the UI
fn send_error(context: &str, err: &ApiError, update_tx: &mpsc::UnboundedSender<AlbumUpdate>) {
    log::warn!("{}: {}", context, err);
    let _ = update_tx.send(AlbumUpdate::Error {
        kind: err.kind,
        message: err.user_message(),
    });
}
