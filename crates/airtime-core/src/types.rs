//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Two slots in one timetable carried the same ID.
    #[error("duplicate slot ID: {id}")]
    DuplicateSlotId { id: String },
}

/// A validated slot identifier.
///
/// Slot IDs must be non-empty strings and unique within a timetable. They are
/// assigned at creation and never reused after deletion within a session;
/// uniqueness is enforced when a [`crate::Timetable`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId(String);

impl SlotId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty { field: "slot ID" });
        }
        Ok(Self(id))
    }

    /// Mints a fresh random ID, for duplicated or newly created slots.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SlotId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SlotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A display color tag for a slot.
///
/// Drawn from the fixed lineup palette, or an arbitrary override (e.g. a hex
/// value). Colors identify slots visually and carry no scheduling semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotColor {
    Magenta,
    Purple,
    Blue,
    Cyan,
    Teal,
    Green,
    Amber,
    Red,
    /// Anything outside the palette, stored verbatim.
    Custom(String),
}

impl SlotColor {
    /// The fixed palette, in display order.
    pub const PALETTE: [Self; 8] = [
        Self::Magenta,
        Self::Purple,
        Self::Blue,
        Self::Cyan,
        Self::Teal,
        Self::Green,
        Self::Amber,
        Self::Red,
    ];

    /// String representation for storage and display.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Magenta => "magenta",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Custom(value) => value,
        }
    }
}

impl Default for SlotColor {
    fn default() -> Self {
        Self::Blue
    }
}

impl From<String> for SlotColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "magenta" => Self::Magenta,
            "purple" => Self::Purple,
            "blue" => Self::Blue,
            "cyan" => Self::Cyan,
            "teal" => Self::Teal,
            "green" => Self::Green,
            "amber" => Self::Amber,
            "red" => Self::Red,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for SlotColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SlotColor> for String {
    fn from(color: SlotColor) -> Self {
        match color {
            SlotColor::Custom(value) => value,
            named => named.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for SlotColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SlotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
