//! Cover editor
//!
//! The cover carries a chosen base cover or an uploaded image, the owner's
//! email, and free texts. The first text is the album title and is mirrored
//! into the legacy `header*` fields on save so older readers still see it.

use uuid::Uuid;

use crate::constants::*;
use crate::geometry::{Frame, clamp_axis};
use crate::gesture::*;
use crate::render::{CoverFace, CoverScene, RenderSurface, render_cover};
use crate::types::*;
use crate::wire::CoverUpdate;

#[derive(Debug, Clone)]
pub struct CoverEditor {
    cover_id: Option<String>,
    custom_cover_url: Option<String>,
    user_email: String,
    texts: Vec<TextElement>,
    selected_text: Option<String>,
    gesture: GestureController,
}

fn new_text_id() -> String {
    format!("t-{}", Uuid::new_v4().simple())
}

impl CoverEditor {
    pub fn new(album: &Album) -> Self {
        let config = &album.cover_config;
        let texts = config
            .resolved_texts()
            .into_iter()
            .map(|mut text| {
                if text.id.is_empty() {
                    text.id = new_text_id();
                }
                text
            })
            .collect();

        Self {
            cover_id: album.cover_id.clone(),
            custom_cover_url: config.cover_url.clone().filter(|u| !u.is_empty()),
            user_email: config.user_email.clone(),
            texts,
            selected_text: None,
            gesture: GestureController::default(),
        }
    }

    pub fn cover_id(&self) -> Option<&str> {
        self.cover_id.as_deref()
    }

    pub fn custom_cover_url(&self) -> Option<&str> {
        self.custom_cover_url.as_deref()
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn texts(&self) -> &[TextElement] {
        &self.texts
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected_text.as_deref()
    }

    /// Pick one of the base covers; drops any uploaded image
    pub fn select_cover(&mut self, cover_id: &str) {
        self.cover_id = Some(cover_id.to_string());
        self.custom_cover_url = None;
    }

    /// Use an uploaded image; drops the base cover choice
    pub fn set_custom_cover_url(&mut self, url: &str) {
        self.custom_cover_url = Some(url.to_string());
        self.cover_id = None;
    }

    pub fn set_user_email(&mut self, email: &str) {
        self.user_email = email.to_string();
    }

    /// Set the album title, creating it at the default position if needed
    pub fn set_title(&mut self, content: &str) {
        match self.texts.first_mut() {
            Some(title) => title.content = content.to_string(),
            None => {
                let mut title = TextElement::new(
                    new_text_id(),
                    DEFAULT_COVER_TEXT_X,
                    DEFAULT_COVER_TEXT_Y,
                    DEFAULT_COVER_TEXT_COLOR,
                );
                title.content = content.to_string();
                self.texts.push(title);
            }
        }
    }

    pub fn add_text(&mut self) -> String {
        let text = TextElement::new(
            new_text_id(),
            DEFAULT_COVER_TEXT_X,
            DEFAULT_COVER_TEXT_Y,
            DEFAULT_COVER_TEXT_COLOR,
        );
        let id = text.id.clone();
        self.texts.push(text);
        self.selected_text = Some(id.clone());
        id
    }

    pub fn set_text_content(&mut self, text_id: &str, content: &str) -> bool {
        self.update_text(text_id, |t| t.content = content.to_string())
    }

    pub fn set_text_font_size(&mut self, text_id: &str, size: f64) -> bool {
        self.update_text(text_id, |t| t.font_size = clamp_font_size(size))
    }

    pub fn set_text_color(&mut self, text_id: &str, color: &str) -> bool {
        self.update_text(text_id, |t| t.color = color.to_string())
    }

    pub fn remove_text(&mut self, text_id: &str) -> bool {
        let before = self.texts.len();
        self.texts.retain(|t| t.id != text_id);
        if self.selected_text.as_deref() == Some(text_id) {
            self.selected_text = None;
        }
        self.texts.len() != before
    }

    fn update_text(&mut self, text_id: &str, update: impl FnOnce(&mut TextElement)) -> bool {
        match self.texts.iter_mut().find(|t| t.id == text_id) {
            Some(text) => {
                update(text);
                true
            }
            None => false,
        }
    }

    /// Press on a cover text; selects it and starts a drag
    pub fn text_pointer_down(
        &mut self,
        text_id: &str,
        pointer: Pointer,
        container: ContainerBox,
    ) -> bool {
        let Some(text) = self.texts.iter().find(|t| t.id == text_id) else {
            return false;
        };
        let anchor = Frame::new(text.x, text.y, 0.0, 0.0);
        if !self.gesture.begin_press(
            ElementRef::Text(text_id.to_string()),
            pointer,
            anchor,
            container,
        ) {
            return false;
        }
        self.selected_text = Some(text_id.to_string());
        true
    }

    /// Move the dragged text. Cover texts clamp to the page and never snap.
    pub fn pointer_move(&mut self, pointer: Pointer) -> bool {
        match self.gesture.handle_move(pointer) {
            Some(GestureMove::Drag {
                element: ElementRef::Text(id),
                x,
                y,
            }) => self.update_text(&id, |t| {
                t.x = clamp_axis(x, 0.0);
                t.y = clamp_axis(y, 0.0);
            }),
            _ => false,
        }
    }

    pub fn pointer_up(&mut self) -> bool {
        !matches!(self.gesture.end(), GestureEnd::None)
    }

    pub fn scene(&self, surface: RenderSurface) -> CoverScene {
        render_cover(&self.config(), None, CoverFace::Front, surface)
    }

    fn config(&self) -> CoverConfig {
        let texts: Vec<TextElement> = self
            .texts
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| TextElement {
                id: String::new(),
                ..t.clone()
            })
            .collect();
        let title = texts.first();

        CoverConfig {
            user_email: self.user_email.clone(),
            cover_url: self.custom_cover_url.clone(),
            header_text: title.map(|t| t.content.clone()),
            header_x: title.map(|t| t.x),
            header_y: title.map(|t| t.y),
            header_font_size: title.map(|t| t.font_size),
            texts,
        }
    }

    /// Payload for saving the cover
    pub fn update(&self) -> CoverUpdate {
        CoverUpdate {
            cover_id: self.cover_id.clone(),
            cover_config: self.config(),
        }
    }
}
