//! Structural editing operations on a timetable.
//!
//! Each operation changes only the slot sequence or slot fields; derived
//! start/end windows are never patched by hand. Callers re-run
//! [`crate::build_schedule`] after any edit — stored times are a cached
//! presentation of the derivation, not a source of truth.

use thiserror::Error;

use crate::schedule::coerce_duration_minutes;
use crate::slot::{Slot, Timetable};
use crate::types::{SlotColor, SlotId};

/// Editing failures.
///
/// Indices normally come from iterating the live sequence, so out-of-bounds
/// here means a caller bug — it fails loudly instead of silently corrupting
/// slot order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The index does not refer to a slot in the sequence.
    #[error("slot index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Inserting the slot would duplicate an existing ID.
    #[error("duplicate slot ID: {id}")]
    DuplicateSlotId { id: String },
}

/// A field-wise slot update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPatch {
    pub name: Option<String>,
    /// Coerced to a non-negative finite value on apply.
    pub duration_minutes: Option<f64>,
    pub color: Option<SlotColor>,
    pub is_buffer: Option<bool>,
    /// `Some(None)` clears the image.
    pub image_url: Option<Option<String>>,
}

impl Timetable {
    /// Inserts `slot` at `index`, shifting later slots. `index == len`
    /// appends.
    pub fn insert_slot(&mut self, index: usize, slot: Slot) -> Result<(), EditError> {
        if index > self.0.len() {
            return Err(EditError::IndexOutOfBounds {
                index,
                len: self.0.len(),
            });
        }
        if self.0.iter().any(|existing| existing.id == slot.id) {
            return Err(EditError::DuplicateSlotId {
                id: slot.id.to_string(),
            });
        }
        self.0.insert(index, slot);
        Ok(())
    }

    /// Appends `slot` at the end of the sequence.
    pub fn push_slot(&mut self, slot: Slot) -> Result<(), EditError> {
        self.insert_slot(self.0.len(), slot)
    }

    /// Removes and returns the slot at `index`.
    pub fn remove_slot(&mut self, index: usize) -> Result<Slot, EditError> {
        if index >= self.0.len() {
            return Err(EditError::IndexOutOfBounds {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Clones the slot at `index` under a freshly generated ID and inserts
    /// the copy immediately after the original. Returns the new ID.
    pub fn duplicate_slot(&mut self, index: usize) -> Result<SlotId, EditError> {
        let source = self.0.get(index).ok_or(EditError::IndexOutOfBounds {
            index,
            len: self.0.len(),
        })?;
        let mut copy = source.clone();
        copy.id = SlotId::generate();
        let id = copy.id.clone();
        self.0.insert(index + 1, copy);
        Ok(id)
    }

    /// Moves the slot at `from` so it ends up at position `to`.
    pub fn move_slot(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        let len = self.0.len();
        if from >= len {
            return Err(EditError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(EditError::IndexOutOfBounds { index: to, len });
        }
        let slot = self.0.remove(from);
        self.0.insert(to, slot);
        Ok(())
    }

    /// Applies a field-wise patch to the slot at `index`.
    pub fn update_slot(&mut self, index: usize, patch: SlotPatch) -> Result<(), EditError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds { index, len })?;

        if let Some(name) = patch.name {
            slot.name = name;
        }
        if let Some(minutes) = patch.duration_minutes {
            slot.duration_minutes = coerce_duration_minutes(minutes);
        }
        if let Some(color) = patch.color {
            slot.color = color;
        }
        if let Some(is_buffer) = patch.is_buffer {
            slot.is_buffer = is_buffer;
        }
        if let Some(image_url) = patch.image_url {
            slot.image_url = image_url;
        }
        Ok(())
    }
}
