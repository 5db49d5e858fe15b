//! Single-page editor
//!
//! `PageEditor` holds the working copy of one page: photo layouts, stickers,
//! texts, the current selection and any applied template. Pointer events
//! from the host are routed through one `GestureController`, and `save_plan`
//! produces what has to be written back.

use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::*;
use crate::geometry::{CropEdge, Frame, PhotoLayout, clamp_axis, effective_layout};
use crate::gesture::*;
use crate::options::EditorOptions;
use crate::render::{PageScene, RenderSurface, compose_scene};
use crate::template::{Template, TemplateBoard, UploadTicket};
use crate::types::*;

/// What a finished gesture means to the host
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    None,
    Selected(ElementRef),
    Moved(ElementRef),
    Resized(ElementRef),
    /// A text was double-tapped; focus its content input
    EditText(String),
}

/// Everything a page save writes
#[derive(Debug, Clone, PartialEq)]
pub struct SavePlan {
    pub page_id: String,
    /// Layouts in photo order
    pub layouts: Vec<(String, PhotoLayout)>,
    /// Page config with blank texts removed and text ids stripped
    pub page_config: PageConfig,
}

#[derive(Debug, Clone)]
pub struct PageEditor {
    page_id: String,
    photos: Vec<Photo>,
    layouts: HashMap<String, PhotoLayout>,
    config: PageConfig,
    selection: Option<ElementRef>,
    gesture: GestureController,
    guides: GuideLines,
    template: Option<TemplateBoard>,
    slot_picker: Option<usize>,
    crop_panel_open: bool,
    last_text_tap: Option<(String, u64)>,
    options: EditorOptions,
}

fn new_element_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

impl PageEditor {
    pub fn new(page: &Page, options: EditorOptions) -> Self {
        let mut config = page.page_config.clone();
        for text in config.texts.iter_mut() {
            if text.id.is_empty() {
                text.id = new_element_id("t");
            }
            if text.color.is_empty() {
                text.color = DEFAULT_PAGE_TEXT_COLOR.to_string();
            }
        }

        let mut editor = Self {
            page_id: page.id.clone(),
            photos: Vec::new(),
            layouts: HashMap::new(),
            config,
            selection: None,
            gesture: GestureController::new(options.drag_threshold_px),
            guides: GuideLines::default(),
            template: None,
            slot_picker: None,
            crop_panel_open: false,
            last_text_tap: None,
            options,
        };
        editor.sync_photos(page.album_photos.clone());
        log::debug!(
            "Opened editor for page {} with {} photos",
            editor.page_id,
            editor.photos.len()
        );
        editor
    }

    // ---------------------------------------------------------------------
    // State accessors
    // ---------------------------------------------------------------------

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// Photos in display order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn layout(&self, photo_id: &str) -> Option<&PhotoLayout> {
        self.layouts.get(photo_id)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn sticker(&self, sticker_id: &str) -> Option<&Sticker> {
        self.config.stickers.iter().find(|s| s.id == sticker_id)
    }

    pub fn text(&self, text_id: &str) -> Option<&TextElement> {
        self.config.texts.iter().find(|t| t.id == text_id)
    }

    pub fn selection(&self) -> Option<&ElementRef> {
        self.selection.as_ref()
    }

    pub fn selected_photo_id(&self) -> Option<&str> {
        match &self.selection {
            Some(ElementRef::Photo(id)) => Some(id),
            _ => None,
        }
    }

    pub fn guides(&self) -> GuideLines {
        self.guides
    }

    /// Element being dragged, once the press has passed the drag threshold
    pub fn dragging(&self) -> Option<&ElementRef> {
        if self.gesture.is_dragging() {
            self.gesture.element()
        } else {
            None
        }
    }

    pub fn template(&self) -> Option<&TemplateBoard> {
        self.template.as_ref()
    }

    pub fn slot_picker(&self) -> Option<usize> {
        self.slot_picker
    }

    pub fn crop_panel_open(&self) -> bool {
        self.crop_panel_open
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Current state as drawn on the editor canvas
    pub fn scene(&self) -> PageScene {
        let photos = self.photos.iter().enumerate().map(|(i, photo)| {
            let layout = self
                .layouts
                .get(&photo.id)
                .copied()
                .unwrap_or_else(|| effective_layout(photo, i));
            (photo, layout)
        });
        compose_scene(&self.page_id, photos, &self.config, RenderSurface::EditorCanvas)
    }

    // ---------------------------------------------------------------------
    // Photos
    // ---------------------------------------------------------------------

    /// Replace the photo list after an upload, move or removal. Photos
    /// already on the canvas keep their working layout; new photos start
    /// from their stored layout or default grid cell.
    pub fn sync_photos(&mut self, mut photos: Vec<Photo>) {
        photos.sort_by_key(|p| p.photo_order);

        self.layouts
            .retain(|id, _| photos.iter().any(|p| &p.id == id));
        for (index, photo) in photos.iter().enumerate() {
            if !self.layouts.contains_key(&photo.id) {
                self.layouts
                    .insert(photo.id.clone(), effective_layout(photo, index));
            }
        }

        if let Some(board) = self.template.as_mut() {
            for photo in &self.photos {
                if !photos.iter().any(|p| p.id == photo.id) {
                    board.forget_photo(&photo.id);
                }
            }
        }

        let is_gone = |element: &ElementRef| match element {
            ElementRef::Photo(id) => !photos.iter().any(|p| &p.id == id),
            _ => false,
        };
        if self.selection.as_ref().is_some_and(is_gone) {
            self.selection = None;
            self.crop_panel_open = false;
        }
        if self.gesture.element().is_some_and(is_gone) {
            self.gesture.cancel();
            self.guides = GuideLines::default();
        }

        self.photos = photos;
    }

    pub fn set_photo_rotation(&mut self, photo_id: &str, degrees: f64) -> bool {
        match self.layouts.get_mut(photo_id) {
            Some(layout) => {
                layout.frame.rotation = degrees;
                true
            }
            None => false,
        }
    }

    pub fn set_crop_edge(&mut self, photo_id: &str, edge: CropEdge, value: f64) -> bool {
        match self.layouts.get_mut(photo_id) {
            Some(layout) => {
                layout.crop = Some(layout.crop_or_default().with_edge(edge, value));
                true
            }
            None => false,
        }
    }

    /// Show or hide the crop panel for the selected photo.
    /// Returns whether the panel is now open.
    pub fn toggle_crop_panel(&mut self) -> bool {
        self.crop_panel_open = self.selected_photo_id().is_some() && !self.crop_panel_open;
        self.crop_panel_open
    }

    // ---------------------------------------------------------------------
    // Stickers
    // ---------------------------------------------------------------------

    /// Add a sticker at the spawn position. Returns its id, or `None` for an
    /// empty path.
    pub fn add_sticker(&mut self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        let sticker = Sticker::spawn(new_element_id("s"), path);
        let id = sticker.id.clone();
        self.config.stickers.push(sticker);
        Some(id)
    }

    pub fn set_sticker_rotation(&mut self, sticker_id: &str, degrees: f64) -> bool {
        match self.sticker_mut(sticker_id) {
            Some(sticker) => {
                sticker.rotation = degrees;
                true
            }
            None => false,
        }
    }

    pub fn remove_sticker(&mut self, sticker_id: &str) -> bool {
        let before = self.config.stickers.len();
        self.config.stickers.retain(|s| s.id != sticker_id);
        if matches!(self.selection, Some(ElementRef::Sticker(_))) {
            self.selection = None;
        }
        self.config.stickers.len() != before
    }

    fn sticker_mut(&mut self, sticker_id: &str) -> Option<&mut Sticker> {
        self.config.stickers.iter_mut().find(|s| s.id == sticker_id)
    }

    // ---------------------------------------------------------------------
    // Texts
    // ---------------------------------------------------------------------

    /// Add an empty text at the default anchor and select it
    pub fn add_text(&mut self) -> String {
        let text = TextElement::new(
            new_element_id("t"),
            DEFAULT_PAGE_TEXT_X,
            DEFAULT_PAGE_TEXT_Y,
            DEFAULT_PAGE_TEXT_COLOR,
        );
        let id = text.id.clone();
        self.config.texts.push(text);
        self.selection = Some(ElementRef::Text(id.clone()));
        id
    }

    pub fn set_text_content(&mut self, text_id: &str, content: &str) -> bool {
        self.update_text(text_id, |t| t.content = content.to_string())
    }

    /// Font size is clamped to the editor's range
    pub fn set_text_font_size(&mut self, text_id: &str, size: f64) -> bool {
        self.update_text(text_id, |t| t.font_size = clamp_font_size(size))
    }

    pub fn set_text_color(&mut self, text_id: &str, color: &str) -> bool {
        self.update_text(text_id, |t| t.color = color.to_string())
    }

    pub fn remove_text(&mut self, text_id: &str) -> bool {
        let before = self.config.texts.len();
        self.config.texts.retain(|t| t.id != text_id);
        if self.selection == Some(ElementRef::Text(text_id.to_string())) {
            self.selection = None;
        }
        self.config.texts.len() != before
    }

    fn update_text(&mut self, text_id: &str, update: impl FnOnce(&mut TextElement)) -> bool {
        match self.config.texts.iter_mut().find(|t| t.id == text_id) {
            Some(text) => {
                update(text);
                true
            }
            None => false,
        }
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.config.background_color = color.to_string();
    }

    // ---------------------------------------------------------------------
    // Pointer gestures
    // ---------------------------------------------------------------------

    /// Press on a photo. The photo is selected on release if it was not
    /// dragged.
    pub fn photo_pointer_down(
        &mut self,
        photo_id: &str,
        pointer: Pointer,
        container: ContainerBox,
    ) -> bool {
        let Some(layout) = self.layouts.get(photo_id) else {
            return false;
        };
        self.gesture.begin_press(
            ElementRef::Photo(photo_id.to_string()),
            pointer,
            layout.frame,
            container,
        )
    }

    /// Press on a sticker. Selected on release like photos.
    pub fn sticker_pointer_down(
        &mut self,
        sticker_id: &str,
        pointer: Pointer,
        container: ContainerBox,
    ) -> bool {
        let Some(sticker) = self.sticker(sticker_id) else {
            return false;
        };
        let frame = Frame::new(sticker.x, sticker.y, sticker.w, sticker.h);
        self.gesture.begin_press(
            ElementRef::Sticker(sticker_id.to_string()),
            pointer,
            frame,
            container,
        )
    }

    /// Press on a text. Texts are selected immediately.
    pub fn text_pointer_down(
        &mut self,
        text_id: &str,
        pointer: Pointer,
        container: ContainerBox,
    ) -> bool {
        let Some(text) = self.text(text_id) else {
            return false;
        };
        let anchor = Frame::new(text.x, text.y, 0.0, 0.0);
        let element = ElementRef::Text(text_id.to_string());
        if !self
            .gesture
            .begin_press(element.clone(), pointer, anchor, container)
        {
            return false;
        }
        self.selection = Some(element);
        true
    }

    /// Press on a corner handle of a photo or sticker
    pub fn resize_pointer_down(
        &mut self,
        target: ElementRef,
        handle: ResizeHandle,
        container: ContainerBox,
    ) -> bool {
        let (frame, min_size) = match &target {
            ElementRef::Photo(id) => match self.layouts.get(id) {
                Some(layout) => (layout.frame, self.options.min_photo_size),
                None => return false,
            },
            ElementRef::Sticker(id) => match self.sticker(id) {
                Some(s) => (
                    Frame::new(s.x, s.y, s.w, s.h),
                    self.options.min_sticker_size,
                ),
                None => return false,
            },
            ElementRef::Text(_) => return false,
        };
        if !self
            .gesture
            .begin_resize(target.clone(), handle, frame, container, min_size)
        {
            return false;
        }
        self.selection = Some(target);
        true
    }

    /// Feed a pointer move. Returns true if any geometry changed.
    pub fn pointer_move(&mut self, pointer: Pointer) -> bool {
        match self.gesture.handle_move(pointer) {
            None => false,
            Some(GestureMove::Drag { element, x, y }) => self.apply_drag(&element, x, y),
            Some(GestureMove::Resize { element, frame }) => self.apply_resize(&element, frame),
        }
    }

    fn apply_drag(&mut self, element: &ElementRef, x: f64, y: f64) -> bool {
        match element {
            ElementRef::Photo(id) => {
                let Some(current) = self.layouts.get(id).map(|l| l.frame) else {
                    return false;
                };
                let moving = Frame {
                    x: clamp_axis(x, current.w),
                    y: clamp_axis(y, current.h),
                    ..current
                };
                // Display order: a snap tie goes to the earlier photo
                let siblings: Vec<Frame> = self
                    .photos
                    .iter()
                    .filter(|photo| &photo.id != id)
                    .filter_map(|photo| self.layouts.get(&photo.id))
                    .map(|layout| layout.frame)
                    .collect();
                let snapped = snap_to_guides(moving, &siblings, self.options.snap_threshold);
                self.guides = snapped.guides;
                match self.layouts.get_mut(id) {
                    Some(layout) => {
                        layout.frame.x = snapped.x;
                        layout.frame.y = snapped.y;
                        true
                    }
                    None => false,
                }
            }
            ElementRef::Sticker(id) => match self.sticker_mut(id) {
                Some(sticker) => {
                    sticker.x = clamp_axis(x, sticker.w);
                    sticker.y = clamp_axis(y, sticker.h);
                    true
                }
                None => false,
            },
            ElementRef::Text(id) => self.update_text(id, |t| {
                t.x = clamp_axis(x, 0.0);
                t.y = clamp_axis(y, 0.0);
            }),
        }
    }

    fn apply_resize(&mut self, element: &ElementRef, frame: Frame) -> bool {
        match element {
            ElementRef::Photo(id) => match self.layouts.get_mut(id) {
                Some(layout) => {
                    layout.frame = Frame {
                        rotation: layout.frame.rotation,
                        ..frame
                    };
                    true
                }
                None => false,
            },
            ElementRef::Sticker(id) => match self.sticker_mut(id) {
                Some(sticker) => {
                    sticker.x = frame.x;
                    sticker.y = frame.y;
                    sticker.w = frame.w;
                    sticker.h = frame.h;
                    true
                }
                None => false,
            },
            ElementRef::Text(_) => false,
        }
    }

    /// Release the pointer, finishing the active gesture
    pub fn pointer_up(&mut self, pointer: Pointer) -> GestureOutcome {
        self.guides = GuideLines::default();
        match self.gesture.end() {
            GestureEnd::None => GestureOutcome::None,
            GestureEnd::Dragged(element) => GestureOutcome::Moved(element),
            GestureEnd::Resized(element) => GestureOutcome::Resized(element),
            GestureEnd::Clicked(ElementRef::Text(id)) => self.text_tap(id, pointer.time_ms),
            GestureEnd::Clicked(element) => {
                self.selection = Some(element.clone());
                GestureOutcome::Selected(element)
            }
        }
    }

    fn text_tap(&mut self, id: String, time_ms: u64) -> GestureOutcome {
        let is_double = self.last_text_tap.as_ref().is_some_and(|(last_id, last_ms)| {
            *last_id == id && time_ms.saturating_sub(*last_ms) < self.options.double_tap_ms
        });

        self.selection = Some(ElementRef::Text(id.clone()));
        if is_double {
            self.last_text_tap = None;
            GestureOutcome::EditText(id)
        } else {
            self.last_text_tap = Some((id.clone(), time_ms));
            GestureOutcome::Selected(ElementRef::Text(id))
        }
    }

    /// Abandon the active gesture, e.g. when the pointer leaves the window
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
        self.guides = GuideLines::default();
    }

    /// Click on empty page area
    pub fn background_click(&mut self) {
        self.selection = None;
        self.slot_picker = None;
        self.crop_panel_open = false;
    }

    // ---------------------------------------------------------------------
    // Templates
    // ---------------------------------------------------------------------

    /// Switch to a template with all slots empty. Photo layouts are not
    /// touched until photos are assigned.
    pub fn apply_template(&mut self, template: &Template) {
        log::info!("Applying template {} to page {}", template.id, self.page_id);
        self.template = Some(TemplateBoard::new(template));
        self.slot_picker = None;
        if !matches!(self.selection, Some(ElementRef::Text(_))) {
            self.selection = None;
        }
    }

    /// Return to free-form layout; photos keep their current positions
    pub fn clear_template(&mut self) {
        self.template = None;
        self.slot_picker = None;
    }

    pub fn open_slot_picker(&mut self, slot: usize) -> bool {
        let exists = self
            .template
            .as_ref()
            .is_some_and(|board| slot < board.slot_count());
        if exists {
            self.slot_picker = Some(slot);
        }
        exists
    }

    pub fn close_slot_picker(&mut self) {
        self.slot_picker = None;
    }

    /// Move a photo into a slot, taking the slot's box as its layout.
    /// Any crop is kept.
    pub fn assign_photo_to_slot(&mut self, slot: usize, photo_id: &str) -> bool {
        if !self.layouts.contains_key(photo_id) {
            return false;
        }
        let Some(frame) = self
            .template
            .as_mut()
            .and_then(|board| board.assign(slot, photo_id))
        else {
            return false;
        };
        if let Some(layout) = self.layouts.get_mut(photo_id) {
            layout.frame = frame;
        }
        self.slot_picker = None;
        true
    }

    pub fn unassign_slot(&mut self, slot: usize) -> bool {
        self.template
            .as_mut()
            .is_some_and(|board| board.unassign(slot))
    }

    /// Photos on the page that are not in any slot
    pub fn unassigned_photos(&self) -> Vec<&Photo> {
        match &self.template {
            Some(board) => board.unassigned_photos(&self.photos),
            None => self.photos.iter().collect(),
        }
    }

    /// Start an upload meant for `slot`
    pub fn begin_slot_upload(&mut self, slot: usize) -> Option<UploadTicket> {
        self.template.as_mut()?.begin_upload(slot)
    }

    /// Finish a slot upload. `new_photo_ids` are the photos the upload
    /// created, already merged with `sync_photos`; the first one goes into
    /// the slot. Stale tickets are ignored.
    pub fn complete_slot_upload(&mut self, ticket: UploadTicket, new_photo_ids: &[String]) -> bool {
        let Some(slot) = self
            .template
            .as_mut()
            .and_then(|board| board.take_upload(ticket))
        else {
            return false;
        };
        self.slot_picker = None;
        match new_photo_ids
            .iter()
            .find(|id| self.layouts.contains_key(id.as_str()))
        {
            Some(photo_id) => {
                let photo_id = photo_id.clone();
                self.assign_photo_to_slot(slot, &photo_id)
            }
            None => {
                log::warn!("Upload for slot {} produced no photo on this page", slot);
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Saving
    // ---------------------------------------------------------------------

    pub fn save_plan(&self) -> SavePlan {
        let layouts = self
            .photos
            .iter()
            .filter_map(|p| self.layouts.get(&p.id).map(|l| (p.id.clone(), *l)))
            .collect();

        let mut page_config = self.config.clone();
        page_config.texts = self
            .config
            .texts
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| TextElement {
                id: String::new(),
                ..t.clone()
            })
            .collect();

        SavePlan {
            page_id: self.page_id.clone(),
            layouts,
            page_config,
        }
    }
}
