//! Timetable file persistence.
//!
//! A pretty-printed JSON document stands in for the cloud persistence
//! collaborator: commands load a full snapshot, apply one edit through the
//! core, and save the full snapshot back. Saves go through a temp file and
//! rename so a partially written document is never visible.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use airtime_core::{EventConfig, Timetable};

/// The persisted snapshot shape: event config plus the slot lineup.
///
/// Slot order in the document IS performance order. Per-slot start/end times
/// are never stored; they are re-derived from durations on every load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableDoc {
    #[serde(default)]
    pub event: EventConfig,

    /// Validated on ingress: duplicate slot IDs are rejected here, at the
    /// boundary, so the core can assume a well-formed sequence.
    #[serde(default)]
    pub slots: Timetable,
}

/// Loads and validates the timetable document.
pub fn load(path: &Path) -> Result<TimetableDoc> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read timetable {}", path.display()))?;
    let doc: TimetableDoc = serde_json::from_str(&raw)
        .with_context(|| format!("invalid timetable document {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        slots = doc.slots.len(),
        "loaded timetable"
    );
    Ok(doc)
}

/// Saves the full snapshot atomically (temp file + rename).
pub fn save(path: &Path, doc: &TimetableDoc) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(doc).context("failed to serialize timetable")?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved timetable");
    Ok(())
}
