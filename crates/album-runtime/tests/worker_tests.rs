use album_layout::{EditorOptions, PageEditor, ViewMode, find_template, view_count};
use album_runtime::*;
use tokio::sync::mpsc;

fn album_with_pages(count: usize) -> Album {
    let pages = (0..count)
        .map(|i| {
            let mut page = Page::new(format!("p{}", i + 1), i as i64);
            page.album_photos
                .push(Photo::new(format!("ph{}", i + 1), format!("a1/{}.jpg", i + 1), 0));
            page
        })
        .collect();
    Album {
        id: "a1".into(),
        pages,
        ..Default::default()
    }
}

/// Run the worker over `commands` and collect every update it sent
async fn run(api: MemoryAlbumApi, commands: Vec<AlbumCommand>) -> Vec<AlbumUpdate> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    for cmd in commands {
        command_tx.send(cmd).unwrap();
    }
    drop(command_tx);

    worker_task(api, "a1".to_string(), command_rx, update_tx).await;

    let mut updates = Vec::new();
    while let Ok(update) = update_rx.try_recv() {
        updates.push(update);
    }
    updates
}

fn last_album(updates: &[AlbumUpdate]) -> Album {
    match updates.last() {
        Some(AlbumUpdate::AlbumLoaded { album }) => album.clone(),
        other => panic!("expected AlbumLoaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_album() {
    let updates = run(MemoryAlbumApi::new(album_with_pages(2)), vec![AlbumCommand::LoadAlbum]).await;
    assert_eq!(last_album(&updates).pages.len(), 2);
}

#[tokio::test]
async fn test_add_spread_navigates_to_last_view() {
    let updates = run(
        MemoryAlbumApi::new(album_with_pages(3)),
        vec![AlbumCommand::AddSpread],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::SpreadAdded { album, view_index } => {
            assert_eq!(album.pages.len(), 5);
            assert_eq!(*view_index, 3);
            assert_eq!(*view_index, view_count(5, ViewMode::Spreads) - 1);
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_add_page() {
    let updates = run(MemoryAlbumApi::new(album_with_pages(1)), vec![AlbumCommand::AddPage]).await;
    match &updates[0] {
        AlbumUpdate::PageAdded { album } => {
            assert_eq!(album.pages.len(), 2);
            assert_eq!(album.pages[1].page_order, 1);
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_set_page_count_shrinks_from_the_end() {
    let updates = run(
        MemoryAlbumApi::new(album_with_pages(4)),
        vec![AlbumCommand::SetPageCount { requested: Some(2) }],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::PageCountApplied {
            album,
            added,
            deleted,
        } => {
            assert_eq!((*added, *deleted), (0, 2));
            let ids: Vec<_> = album.pages.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["p1", "p2"]);
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_set_page_count_clamps_and_keeps_current() {
    let updates = run(
        MemoryAlbumApi::new(album_with_pages(3)),
        vec![
            AlbumCommand::SetPageCount { requested: None },
            AlbumCommand::SetPageCount { requested: Some(80) },
        ],
    )
    .await;

    assert!(matches!(
        &updates[0],
        AlbumUpdate::PageCountApplied { added: 0, deleted: 0, .. }
    ));
    match &updates[1] {
        AlbumUpdate::PageCountApplied { album, added, .. } => {
            assert_eq!(*added, 47);
            assert_eq!(album.pages.len(), 50);
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_save_page_writes_layouts_and_config() {
    let album = album_with_pages(1);
    let mut editor = PageEditor::new(&album.pages[0], EditorOptions::default());
    editor.set_photo_rotation("ph1", 15.0);
    let text_id = editor.add_text();
    editor.set_text_content(&text_id, "Summer");
    editor.add_text();

    let updates = run(
        MemoryAlbumApi::new(album),
        vec![
            AlbumCommand::SavePage {
                plan: editor.save_plan(),
            },
            AlbumCommand::LoadAlbum,
        ],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::PageSaved { page_id, page } => {
            assert_eq!(page_id, "p1");
            assert_eq!(page.page_config.texts.len(), 1);
            assert_eq!(page.page_config.texts[0].content, "Summer");
            assert!(page.page_config.texts[0].id.is_empty());
        }
        other => panic!("unexpected update {:?}", other),
    }

    let album = last_album(&updates);
    let layout = album.pages[0].album_photos[0].layout.unwrap();
    assert_eq!(layout.rotation, Some(15.0));
    assert_eq!(layout.x, Some(2.0));
}

#[tokio::test]
async fn test_failed_save_reports_page_and_skips_config() {
    let album = album_with_pages(1);
    let mut editor = PageEditor::new(&album.pages[0], EditorOptions::default());
    editor.set_background_color("#223344");
    let mut plan = editor.save_plan();
    plan.layouts[0].0 = "ghost".into();

    let updates = run(
        MemoryAlbumApi::new(album),
        vec![AlbumCommand::SavePage { plan }, AlbumCommand::LoadAlbum],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::PageSaveFailed { page_id, kind, .. } => {
            assert_eq!(page_id, "p1");
            assert_eq!(*kind, ApiErrorKind::NotFound);
        }
        other => panic!("unexpected update {:?}", other),
    }
    assert_eq!(last_album(&updates).pages[0].page_config.background_color, "#ffffff");
}

#[tokio::test]
async fn test_slot_upload_round_trip() {
    let album = album_with_pages(1);
    let mut editor = PageEditor::new(&album.pages[0], EditorOptions::default());
    editor.apply_template(&find_template("2-h").unwrap());
    let ticket = editor.begin_slot_upload(1).unwrap();

    let updates = run(
        MemoryAlbumApi::new(album),
        vec![AlbumCommand::UploadToPage {
            page_id: "p1".into(),
            files: vec![UploadFile::new("beach.jpg", vec![1, 2, 3])],
            ticket: Some(ticket),
        }],
    )
    .await;

    let AlbumUpdate::PhotosUploaded {
        page_id,
        ticket: returned,
        photo_ids,
        album,
    } = &updates[0]
    else {
        panic!("unexpected update {:?}", updates[0]);
    };
    assert_eq!(*returned, Some(ticket));
    assert_eq!(photo_ids.len(), 1);

    let page = album.page(page_id).unwrap();
    assert_eq!(page.album_photos.len(), 2);
    assert_eq!(page.album_photos[1].storage_path, "a1/beach.jpg");
    assert_eq!(page.album_photos[1].photo_order, 1);

    editor.sync_photos(page.album_photos.clone());
    assert!(editor.complete_slot_upload(ticket, photo_ids));
    let board = editor.template().unwrap();
    assert_eq!(board.photo_in_slot(1), Some(photo_ids[0].as_str()));
    assert_eq!(editor.layout(&photo_ids[0]).unwrap().frame.x, 52.0);
}

#[tokio::test]
async fn test_oversized_upload_is_typed() {
    let api = MemoryAlbumApi::new(album_with_pages(1)).with_max_upload_bytes(2);
    let updates = run(
        api,
        vec![AlbumCommand::UploadToPage {
            page_id: "p1".into(),
            files: vec![UploadFile::new("huge.jpg", vec![0; 3])],
            ticket: None,
        }],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::Error { kind, message } => {
            assert_eq!(*kind, ApiErrorKind::PayloadTooLarge);
            assert!(message.contains("too large to upload"));
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_upload_sends_nothing() {
    let updates = run(
        MemoryAlbumApi::new(album_with_pages(1)),
        vec![AlbumCommand::UploadToPage {
            page_id: "p1".into(),
            files: Vec::new(),
            ticket: None,
        }],
    )
    .await;
    assert!(updates.is_empty());
}

#[tokio::test]
async fn test_photo_commands() {
    let updates = run(
        MemoryAlbumApi::new(album_with_pages(2)),
        vec![
            AlbumCommand::MovePhoto {
                photo_id: "ph1".into(),
                to_page_id: "p2".into(),
                photo_order: None,
            },
            AlbumCommand::ReorderPhotos {
                page_id: "p2".into(),
                photo_ids: vec!["ph1".into(), "ph2".into()],
            },
            AlbumCommand::RemovePhoto {
                page_id: "p2".into(),
                photo_id: "ph2".into(),
            },
            AlbumCommand::RemovePhoto {
                page_id: "p2".into(),
                photo_id: "ph2".into(),
            },
        ],
    )
    .await;

    match &updates[0] {
        AlbumUpdate::PhotoMoved { photo_id, album } => {
            assert_eq!(photo_id, "ph1");
            assert!(album.pages[0].album_photos.is_empty());
            assert_eq!(album.pages[1].album_photos.len(), 2);
            assert_eq!(album.pages[1].album_photos[1].photo_order, 1);
        }
        other => panic!("unexpected update {:?}", other),
    }

    match &updates[1] {
        AlbumUpdate::PhotosReordered { album, .. } => {
            let sorted: Vec<_> = album.pages[1]
                .sorted_photos()
                .into_iter()
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(sorted, vec!["ph1", "ph2"]);
        }
        other => panic!("unexpected update {:?}", other),
    }

    match &updates[2] {
        AlbumUpdate::PhotoRemoved { album, .. } => {
            assert_eq!(album.pages[1].album_photos.len(), 1);
        }
        other => panic!("unexpected update {:?}", other),
    }

    // Removing twice is an error, not a crash
    assert!(matches!(
        &updates[3],
        AlbumUpdate::Error {
            kind: ApiErrorKind::NotFound,
            ..
        }
    ));
}

#[tokio::test]
async fn test_save_cover() {
    let mut album = album_with_pages(1);
    album.cover_config.header_text = Some("Old title".into());
    let mut cover = album_layout::CoverEditor::new(&album);
    cover.select_cover("cover-3");
    cover.set_title("Our Wedding");

    let updates = run(
        MemoryAlbumApi::new(album),
        vec![
            AlbumCommand::SaveCover {
                update: cover.update(),
            },
            AlbumCommand::LoadAlbum,
        ],
    )
    .await;

    assert!(matches!(updates[0], AlbumUpdate::CoverSaved));
    let album = last_album(&updates);
    assert_eq!(album.cover_id.as_deref(), Some("cover-3"));
    assert_eq!(album.cover_config.header_text.as_deref(), Some("Our Wedding"));
}

#[tokio::test]
async fn test_wrong_album_reports_not_found() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    command_tx.send(AlbumCommand::LoadAlbum).unwrap();
    drop(command_tx);

    worker_task(
        MemoryAlbumApi::new(album_with_pages(1)),
        "missing".to_string(),
        command_rx,
        update_tx,
    )
    .await;

    assert!(matches!(
        update_rx.try_recv().unwrap(),
        AlbumUpdate::Error {
            kind: ApiErrorKind::NotFound,
            ..
        }
    ));
}
