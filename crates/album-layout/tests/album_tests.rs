use album_layout::*;

const ALBUM_JSON: &str = r##"{
    "id": "album-1",
    "cover_id": "base-3",
    "cover_config": {"userEmail": "a@example.com", "headerText": "Trip"},
    "pages": [
        {"id": "p2", "page_order": 5, "page_config": null, "album_photos": []},
        {"id": "p1", "page_order": 1, "page_config": {"backgroundColor": "#eeeeee"},
         "album_photos": [
            {"id": "a", "storage_path": "a.jpg", "photo_order": 0, "layout": null},
            {"id": "b", "storage_path": "b.jpg", "photo_order": 1,
             "layout": {"x": 20, "y": 20, "w": 46, "h": 46}}
         ]},
        {"id": "p3", "page_order": 9, "album_photos": []}
    ]
}"##;

#[test]
fn test_statistics_for_parsed_album() {
    let album = parse_album(ALBUM_JSON).unwrap();
    let stats = calculate_statistics(&album, ViewMode::Spreads);

    assert_eq!(stats.pages, 3);
    assert_eq!(stats.spreads, 2);
    assert_eq!(stats.views, 3);
    assert_eq!(stats.flip_targets, 5);
    assert_eq!(stats.photos, 2);
    assert_eq!(stats.empty_pages, 2);
    assert_eq!(stats.overlapping_photo_pairs, 1);
}

#[test]
fn test_page_by_number_uses_display_order() {
    let album = parse_album(ALBUM_JSON).unwrap();
    assert_eq!(album.page_by_number(1).unwrap().id, "p1");
    assert_eq!(album.page_by_number(3).unwrap().id, "p3");
    assert!(matches!(album.page_by_number(0), Err(LayoutError::PageNotFound(0))));
    assert!(matches!(album.page_by_number(4), Err(LayoutError::PageNotFound(4))));

    let empty = Album::default();
    assert!(matches!(empty.page_by_number(1), Err(LayoutError::NoPages)));
}

#[test]
fn test_shrinking_plan() {
    let album = parse_album(ALBUM_JSON).unwrap();
    let target = target_page_count(parse_page_count("1"), album.pages.len());
    assert_eq!(
        plan_page_count(&album.pages, target),
        vec![
            PageOp::DeletePage("p3".into()),
            PageOp::DeletePage("p2".into())
        ]
    );
}

#[tokio::test]
async fn test_load_album_from_file() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), ALBUM_JSON).await.unwrap();
    let album = load_album(temp.path()).await.unwrap();
    assert_eq!(album.cover_id.as_deref(), Some("base-3"));
    assert_eq!(album.cover_config.resolved_texts()[0].content, "Trip");

    let missing = load_album(temp.path().with_extension("missing")).await;
    assert!(matches!(missing, Err(LayoutError::Io(_))));
}

#[test]
fn test_cover_editor_round_trip() {
    let album = parse_album(ALBUM_JSON).unwrap();
    let mut editor = CoverEditor::new(&album);
    editor.set_user_email("b@example.com");
    editor.set_title("Road trip");

    let update = editor.update();
    assert_eq!(update.cover_config.user_email, "b@example.com");
    assert_eq!(update.cover_config.header_text.as_deref(), Some("Road trip"));
    assert_eq!(update.cover_config.texts[0].y, 18.0);
}
