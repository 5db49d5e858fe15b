use album_layout::*;

#[test]
fn test_default_options_are_valid() {
    let options = EditorOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.drag_threshold_px, 5.0);
    assert_eq!(options.snap_threshold, 2.5);
    assert_eq!(options.double_tap_ms, 400);
}

#[test]
fn test_validation_rejects_bad_sizes() {
    let mut options = EditorOptions::default();
    options.min_photo_size = 0.0;
    match options.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("photo")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let mut options = EditorOptions::default();
    options.snap_threshold = f64::NAN;
    assert!(options.validate().is_err());

    let mut options = EditorOptions::default();
    options.double_tap_ms = 0;
    assert!(options.validate().is_err());
}

#[test]
fn test_view_mode_for_width() {
    let options = EditorOptions::default();
    assert_eq!(options.view_mode_for_width(390), ViewMode::SinglePages);
    assert_eq!(options.view_mode_for_width(1280), ViewMode::Spreads);
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    let mut options = EditorOptions::default();
    options.snap_threshold = 4.0;
    options.default_view_mode = ViewMode::SinglePages;

    options.save(temp.path()).await.unwrap();
    let loaded = EditorOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_partial_file_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), r#"{"min_sticker_size": 5.0}"#)
        .await
        .unwrap();
    let loaded = EditorOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.min_sticker_size, 5.0);
    assert_eq!(loaded.min_photo_size, 8.0);
}

#[tokio::test]
async fn test_load_rejects_garbage() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), "not json").await.unwrap();
    assert!(matches!(
        EditorOptions::load(temp.path()).await,
        Err(LayoutError::Config(_))
    ));
}
