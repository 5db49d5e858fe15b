use album_layout::*;

fn mixed_page() -> Page {
    let mut page = Page::new("page", 4);
    let mut stored = Photo::new("stored", "s.jpg", 1);
    stored.layout = Some(StoredLayout {
        x: Some(12.0),
        y: Some(8.0),
        w: Some(40.0),
        rotation: Some(3.0),
        crop: Some(CropRect::new(0.0, 10.0, 100.0, 80.0)),
        ..Default::default()
    });
    let mut partial = Photo::new("partial", "p.jpg", 0);
    partial.layout = Some(StoredLayout {
        w: Some(10.0),
        ..Default::default()
    });
    page.album_photos = vec![stored, partial, Photo::new("plain", "q.jpg", 2)];
    page.page_config.texts.push(TextElement::new("t", 50.0, 50.0, "#abcdef"));
    page
}

#[test]
fn test_all_surfaces_share_geometry() {
    let page = mixed_page();
    let reference = render_page(&page, RenderSurface::EditorCanvas);

    for surface in RenderSurface::ALL {
        let scene = render_page(&page, surface);
        assert_eq!(scene.photo_frames(), reference.photo_frames(), "{:?}", surface);
        assert_eq!(
            scene.photos.iter().map(|p| p.crop).collect::<Vec<_>>(),
            reference.photos.iter().map(|p| p.crop).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_editor_opens_with_rendered_geometry() {
    let page = mixed_page();
    let editor = PageEditor::new(&page, EditorOptions::default());
    assert_eq!(
        editor.scene().photo_frames(),
        render_page(&page, RenderSurface::SharedView).photo_frames()
    );
}

#[test]
fn test_photo_order_and_fallbacks() {
    let scene = render_page(&mixed_page(), RenderSurface::SharedView);
    let ids: Vec<&str> = scene.photos.iter().map(|p| p.photo_id.as_str()).collect();
    assert_eq!(ids, ["partial", "stored", "plain"]);

    // No x: the whole stored layout is ignored
    assert_eq!(scene.photos[0].frame, default_layout(0));
    // Missing h comes from the grid cell of its index
    assert_eq!(scene.photos[1].frame.h, 46.0);
    assert_eq!(scene.photos[1].frame.rotation, 3.0);
    assert_eq!(scene.photos[2].frame, default_layout(2));
    assert!(scene.photos[1].crop.is_some());
}

#[test]
fn test_spread_renders_both_halves() {
    let left = mixed_page();
    let spread = render_spread(Some(&left), None, RenderSurface::FlipBookSpread);
    assert!(spread.right.is_none());
    let left_scene = spread.left.unwrap();
    assert_eq!(left_scene.surface, RenderSurface::FlipBookSpread);
    assert_eq!(left_scene.texts[0].min_font_size, Some(12.0));
}

#[test]
fn test_cover_texts_use_white_fallback() {
    let cover = CoverConfig {
        texts: vec![TextElement::new("", 30.0, 70.0, "white")],
        header_text: Some("Ignored".into()),
        ..Default::default()
    };
    let scene = render_cover(&cover, Some("covers/red.jpg"), CoverFace::Front, RenderSurface::SharedView);
    assert_eq!(scene.texts.len(), 1);
    assert_eq!(scene.texts[0].color, "#ffffff");
    assert_eq!((scene.texts[0].x, scene.texts[0].y), (30.0, 70.0));
    assert_eq!(scene.background, None);
}
