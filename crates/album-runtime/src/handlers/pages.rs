use album_layout::{
    LayoutUpdate, PageConfigUpdate, PageOp, SavePlan, ViewMode, plan_page_count,
    target_page_count, view_count,
};
use tokio::sync::mpsc;

use super::send_error;
use crate::AlbumUpdate;
use crate::api::{AlbumApi, ApiError};

pub async fn handle_load<A: AlbumApi>(
    api: &A,
    album_id: &str,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    match api.get_album(album_id).await {
        Ok(album) => {
            log::info!("Loaded album with {} pages", album.pages.len());
            let _ = update_tx.send(AlbumUpdate::AlbumLoaded { album });
        }
        Err(e) => send_error("Failed to load album", &e, update_tx),
    }
}

pub async fn handle_add_page<A: AlbumApi>(
    api: &A,
    album_id: &str,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let result = async {
        api.add_page(album_id).await?;
        api.get_album(album_id).await
    }
    .await;

    match result {
        Ok(album) => {
            log::info!("Page added");
            let _ = update_tx.send(AlbumUpdate::PageAdded { album });
        }
        Err(e) => send_error("Failed to add page", &e, update_tx),
    }
}

/// Two pages, created one after the other, then a reload
pub async fn handle_add_spread<A: AlbumApi>(
    api: &A,
    album_id: &str,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let result = async {
        api.add_page(album_id).await?;
        api.add_page(album_id).await?;
        api.get_album(album_id).await
    }
    .await;

    match result {
        Ok(album) => {
            let view_index = view_count(album.pages.len(), ViewMode::Spreads) - 1;
            log::info!("Spread added");
            let _ = update_tx.send(AlbumUpdate::SpreadAdded { album, view_index });
        }
        Err(e) => send_error("Failed to add spread", &e, update_tx),
    }
}

pub async fn handle_set_page_count<A: AlbumApi>(
    api: &A,
    album_id: &str,
    requested: Option<usize>,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let result = async {
        let album = api.get_album(album_id).await?;
        let target = target_page_count(requested, album.pages.len());
        let ops = plan_page_count(&album.pages, target);
        log::debug!(
            "Changing page count from {} to {} ({} operations)",
            album.pages.len(),
            target,
            ops.len()
        );

        let (mut added, mut deleted) = (0, 0);
        for op in ops {
            match op {
                PageOp::AddPage => {
                    api.add_page(album_id).await?;
                    added += 1;
                }
                PageOp::DeletePage(page_id) => {
                    api.delete_page(album_id, &page_id).await?;
                    deleted += 1;
                }
            }
        }

        let album = api.get_album(album_id).await?;
        Ok::<_, ApiError>((album, added, deleted))
    }
    .await;

    match result {
        Ok((album, added, deleted)) => {
            log::info!("Album now has {} pages", album.pages.len());
            let _ = update_tx.send(AlbumUpdate::PageCountApplied {
                album,
                added,
                deleted,
            });
        }
        Err(e) => send_error("Failed to change page count", &e, update_tx),
    }
}

/// Photo layouts are written one at a time, then the page config
pub async fn handle_save_page<A: AlbumApi>(
    api: &A,
    album_id: &str,
    plan: SavePlan,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let SavePlan {
        page_id,
        layouts,
        page_config,
    } = plan;

    let result = async {
        for (photo_id, layout) in layouts {
            api.update_photo_layout(album_id, &photo_id, &LayoutUpdate { layout })
                .await?;
        }
        api.update_page_config(album_id, &page_id, &PageConfigUpdate { page_config })
            .await
    }
    .await;

    match result {
        Ok(page) => {
            log::info!("Page saved");
            let _ = update_tx.send(AlbumUpdate::PageSaved { page_id, page });
        }
        Err(e) => {
            log::warn!("Failed to save page {}: {}", page_id, e);
            let _ = update_tx.send(AlbumUpdate::PageSaveFailed {
                page_id,
                kind: e.kind,
                message: e.user_message(),
            });
        }
    }
}
