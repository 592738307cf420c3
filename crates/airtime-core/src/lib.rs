//! Schedule derivation engine for live event timetables.
//!
//! This crate contains the domain logic for DJ/VJ lineup timetables:
//! - Timetable: an ordered sequence of slots with durations
//! - Schedule derivation: absolute start/end instants accumulated from durations
//! - Live-state classification: standby/upcoming/on-air/finished plus the
//!   currently playing slot
//! - Editing operations that preserve the "always recompute from durations"
//!   invariant
//!
//! Everything here is pure: no clock access, no I/O, no global state. The host
//! feeds in a snapshot of the timetable plus `now` on every tick and renders
//! the returned [`DerivedSchedule`].

pub mod edit;
pub mod engine;
pub mod schedule;
pub mod slot;
pub mod status;
pub mod types;

pub use edit::{EditError, SlotPatch};
pub use engine::{DerivedSchedule, compute_schedule};
pub use schedule::{DerivedSlot, build_schedule, resolve_event_start};
pub use slot::{EventConfig, Slot, Timetable};
pub use status::{EventStatus, LEAD_IN_MS, LiveState, classify};
pub use types::{SlotColor, SlotId, ValidationError};
