//! Timetable snapshot types: slots, the ordered sequence, event config.

use serde::{Deserialize, Deserializer, Serialize};

use crate::schedule::coerce_duration_minutes;
use crate::types::{SlotColor, SlotId, ValidationError};

/// One scheduled performance unit: a DJ set, VJ set, or buffer block.
///
/// A slot's position in its [`Timetable`] IS its performance order; there is
/// no separate order field. Absolute start/end times are never stored on the
/// slot, they are re-derived from durations on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Stable identifier, unique within a timetable.
    pub id: SlotId,

    /// Display label. May be empty.
    #[serde(default)]
    pub name: String,

    /// Slot length in minutes. Non-negative; fractional values are allowed
    /// (0.1667 min = 10 s is used by the debug fast-forward mode) and `0`
    /// collapses the slot's window to a point. Malformed values are coerced
    /// to `0` on deserialization rather than rejected.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub duration_minutes: f64,

    /// Display color tag. No scheduling semantics.
    #[serde(default)]
    pub color: SlotColor,

    /// Buffers fill changeover time: no performer identity, but they
    /// participate in timing exactly like normal slots.
    #[serde(default)]
    pub is_buffer: bool,

    /// Opaque reference to a display image. Irrelevant to scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Slot {
    /// Creates a slot with a freshly generated ID and default display fields.
    #[must_use]
    pub fn new(name: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            id: SlotId::generate(),
            name: name.into(),
            duration_minutes: coerce_duration_minutes(duration_minutes),
            color: SlotColor::default(),
            is_buffer: false,
            image_url: None,
        }
    }
}

/// Deserializes a duration leniently: anything that is not a non-negative
/// finite number becomes `0` instead of an error.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().map_or(0.0, coerce_duration_minutes))
}

/// An ordered sequence of slots. Insertion order is performance order.
///
/// Built once from the persistence snapshot via [`Timetable::new`], which
/// rejects duplicate slot IDs so everything downstream can assume a
/// well-formed sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slot>", into = "Vec<Slot>")]
pub struct Timetable(pub(crate) Vec<Slot>);

impl Timetable {
    /// Builds a timetable, validating slot ID uniqueness.
    pub fn new(slots: Vec<Slot>) -> Result<Self, ValidationError> {
        let mut seen = std::collections::HashSet::new();
        for slot in &slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(ValidationError::DuplicateSlotId {
                    id: slot.id.to_string(),
                });
            }
        }
        Ok(Self(slots))
    }

    /// The slots in performance order.
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.0.iter()
    }

    /// Total event length in minutes, with malformed durations counted as 0.
    pub fn total_minutes(&self) -> f64 {
        self.0
            .iter()
            .map(|slot| coerce_duration_minutes(slot.duration_minutes))
            .sum()
    }
}

impl TryFrom<Vec<Slot>> for Timetable {
    type Error = ValidationError;

    fn try_from(slots: Vec<Slot>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<Timetable> for Vec<Slot> {
    fn from(timetable: Timetable) -> Self {
        timetable.0
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Event-level configuration: the display title and the instant slot 0 begins.
///
/// Date and time stay as strings because the resolution contract is
/// permissive: malformed values fall back to "now" instead of failing (see
/// [`crate::schedule::resolve_event_start`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Display title for the event.
    #[serde(default)]
    pub title: String,

    /// Calendar date of the event start, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: String,

    /// Time of day slot 0 begins, `HH:MM` 24h.
    #[serde(default)]
    pub start_time: String,
}
