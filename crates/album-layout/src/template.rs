//! Template slot assignment
//!
//! A template is a fixed set of slots. Assigning a photo to a slot copies
//! the slot's box into the photo's layout; the board only tracks which
//! photo sits in which slot. A photo occupies at most one slot.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::Frame;
use crate::types::{LayoutError, Photo, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NEXT_UPLOAD_TICKET: AtomicU64 = AtomicU64::new(1);

/// A preset arrangement of photo slots
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    pub id: String,
    pub name: String,
    pub slots: Vec<Frame>,
}

impl Template {
    fn new(id: &str, name: &str, slots: &[(f64, f64, f64, f64)]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slots: slots
                .iter()
                .map(|&(x, y, w, h)| Frame::new(x, y, w, h))
                .collect(),
        }
    }
}

/// Built-in template catalog
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new("1-full", "Single photo", &[(5.0, 5.0, 90.0, 90.0)]),
        Template::new(
            "2-h",
            "Two side by side",
            &[(2.0, 10.0, 46.0, 80.0), (52.0, 10.0, 46.0, 80.0)],
        ),
        Template::new(
            "2-v",
            "Two stacked",
            &[(10.0, 2.0, 80.0, 46.0), (10.0, 52.0, 80.0, 46.0)],
        ),
        Template::new(
            "3-l",
            "One large, two small",
            &[
                (2.0, 5.0, 48.0, 90.0),
                (52.0, 5.0, 46.0, 43.0),
                (52.0, 52.0, 46.0, 46.0),
            ],
        ),
        Template::new(
            "4-grid",
            "Grid of four",
            &[
                (2.0, 2.0, 46.0, 46.0),
                (52.0, 2.0, 46.0, 46.0),
                (2.0, 52.0, 46.0, 46.0),
                (52.0, 52.0, 46.0, 46.0),
            ],
        ),
    ]
}

/// Look up a built-in template by id
pub fn find_template(id: &str) -> Result<Template> {
    builtin_templates()
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| LayoutError::UnknownTemplate(id.to_string()))
}

/// Correlates an upload with the slot it was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    fn next() -> Self {
        Self(NEXT_UPLOAD_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingUpload {
    ticket: UploadTicket,
    slot: usize,
}

/// Slot occupancy for the template applied to a page
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBoard {
    template_id: String,
    slots: Vec<Frame>,
    occupants: Vec<Option<String>>,
    pending: Option<PendingUpload>,
}

impl TemplateBoard {
    /// Start a board with every slot empty
    pub fn new(template: &Template) -> Self {
        Self {
            template_id: template.id.clone(),
            slots: template.slots.clone(),
            occupants: vec![None; template.slots.len()],
            pending: None,
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn slots(&self) -> &[Frame] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn photo_in_slot(&self, slot: usize) -> Option<&str> {
        self.occupants.get(slot)?.as_deref()
    }

    pub fn slot_of(&self, photo_id: &str) -> Option<usize> {
        self.occupants
            .iter()
            .position(|o| o.as_deref() == Some(photo_id))
    }

    /// Put `photo_id` into `slot`, removing it from any other slot.
    /// Returns the slot's box, or `None` if the slot does not exist.
    pub fn assign(&mut self, slot: usize, photo_id: &str) -> Option<Frame> {
        let frame = *self.slots.get(slot)?;
        for occupant in self.occupants.iter_mut() {
            if occupant.as_deref() == Some(photo_id) {
                *occupant = None;
            }
        }
        self.occupants[slot] = Some(photo_id.to_string());
        log::debug!("Assigned photo {} to slot {} of {}", photo_id, slot, self.template_id);
        Some(frame)
    }

    /// Empty a slot. Returns false if it was already empty or does not exist.
    pub fn unassign(&mut self, slot: usize) -> bool {
        match self.occupants.get_mut(slot) {
            Some(occupant) => occupant.take().is_some(),
            None => false,
        }
    }

    /// Drop a photo that is no longer on the page
    pub fn forget_photo(&mut self, photo_id: &str) {
        if let Some(slot) = self.slot_of(photo_id) {
            self.occupants[slot] = None;
        }
    }

    /// Photos not sitting in any slot, in the given order
    pub fn unassigned_photos<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        photos
            .iter()
            .filter(|p| self.slot_of(&p.id).is_none())
            .collect()
    }

    /// Remember that an upload for `slot` is in flight. Replaces any
    /// earlier pending upload.
    pub fn begin_upload(&mut self, slot: usize) -> Option<UploadTicket> {
        if slot >= self.slots.len() {
            return None;
        }
        let ticket = UploadTicket::next();
        self.pending = Some(PendingUpload { ticket, slot });
        Some(ticket)
    }

    pub fn pending_slot(&self) -> Option<usize> {
        self.pending.map(|p| p.slot)
    }

    /// Consume the pending upload if `ticket` matches it, returning the
    /// slot the upload was meant for
    pub fn take_upload(&mut self, ticket: UploadTicket) -> Option<usize> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                Some(pending.slot)
            }
            _ => {
                log::debug!("Ignoring stale upload ticket {}", ticket.id());
                None
            }
        }
    }
}
