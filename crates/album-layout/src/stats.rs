use crate::geometry::effective_layout;
use crate::pagination::{ViewMode, spread_count, view_count};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Summary of an album's contents and pagination
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlbumStatistics {
    pub pages: usize,
    pub spreads: usize,
    /// Navigable views in the requested mode
    pub views: usize,
    /// Flip-book targets: cover, every page, back cover
    pub flip_targets: usize,
    pub photos: usize,
    pub stickers: usize,
    pub texts: usize,
    /// Pages without photos, stickers or non-blank texts
    pub empty_pages: usize,
    /// Photo pairs on the same page whose boxes overlap
    pub overlapping_photo_pairs: usize,
}

/// Calculate statistics for an album
pub fn calculate_statistics(album: &Album, mode: ViewMode) -> AlbumStatistics {
    let pages = album.pages.len();

    let mut stats = AlbumStatistics {
        pages,
        spreads: spread_count(pages),
        views: view_count(pages, mode),
        flip_targets: view_count(pages, ViewMode::SinglePages),
        ..Default::default()
    };

    for page in &album.pages {
        let texts = page
            .page_config
            .texts
            .iter()
            .filter(|t| !t.is_blank())
            .count();

        stats.photos += page.album_photos.len();
        stats.stickers += page.page_config.stickers.len();
        stats.texts += texts;

        if page.album_photos.is_empty() && page.page_config.stickers.is_empty() && texts == 0 {
            stats.empty_pages += 1;
        }

        stats.overlapping_photo_pairs += count_overlaps(page);
    }

    log::debug!(
        "Album {}: {} pages, {} photos, {} overlapping pairs",
        album.id,
        stats.pages,
        stats.photos,
        stats.overlapping_photo_pairs
    );

    stats
}

fn count_overlaps(page: &Page) -> usize {
    let frames: Vec<_> = page
        .sorted_photos()
        .into_iter()
        .enumerate()
        .map(|(index, photo)| effective_layout(photo, index).frame)
        .collect();

    let mut overlaps = 0;
    for (i, a) in frames.iter().enumerate() {
        overlaps += frames[i + 1..].iter().filter(|b| a.intersects(b)).count();
    }
    overlaps
}
