//! Event lifecycle classification relative to `now`.

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::schedule::DerivedSlot;

/// Lead-in window before the event start during which status is
/// [`EventStatus::Upcoming`] rather than [`EventStatus::Standby`].
///
/// Fixed at 3 hours; intentionally not configurable.
pub const LEAD_IN_MS: i64 = 3 * 60 * 60 * 1000;

/// The lead-in window as a [`TimeDelta`].
#[must_use]
pub fn lead_in() -> TimeDelta {
    TimeDelta::milliseconds(LEAD_IN_MS)
}

/// Event lifecycle state, derived from `now` on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// More than the lead-in window before start.
    Standby,
    /// Within the lead-in window, before start.
    Upcoming,
    /// Between start and end; some slot is current (or `now` sits in a gap
    /// between slots).
    OnAirBlock,
    /// At or after the end of the last slot.
    Finished,
}

impl EventStatus {
    /// String representation for display and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standby => "STANDBY",
            Self::Upcoming => "UPCOMING",
            Self::OnAirBlock => "ON_AIR_BLOCK",
            Self::Finished => "FINISHED",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification result: the lifecycle status plus the currently playing
/// slot, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveState {
    pub status: EventStatus,

    /// Index of the slot whose `[start, end)` window contains `now`.
    ///
    /// `None` outside [`EventStatus::OnAirBlock`], and also inside it when
    /// `now` falls between slots (possible around zero-duration slots). The
    /// caller resolves that to "next upcoming slot", never an error.
    pub current_index: Option<usize>,
}

/// Classifies `now` against the event span and locates the active slot.
///
/// Boundaries are half-open: at the exact instant one slot ends and the next
/// begins, the next slot is current — never both, never neither. At the final
/// slot's end the whole event flips to [`EventStatus::Finished`]. An empty
/// schedule has `event_end == event_start` and goes straight from
/// [`EventStatus::Upcoming`] to [`EventStatus::Finished`].
///
/// Total for any finite instants; never panics.
pub fn classify<Tz: TimeZone>(
    now: &DateTime<Tz>,
    event_start: &DateTime<Tz>,
    event_end: &DateTime<Tz>,
    derived: &[DerivedSlot<Tz>],
) -> LiveState {
    // Subtracting the lead-in can underflow near the representable floor;
    // no instant precedes the window then, so standby is unreachable.
    if let Some(lead_in_start) = event_start.clone().checked_sub_signed(lead_in()) {
        if *now < lead_in_start {
            return LiveState {
                status: EventStatus::Standby,
                current_index: None,
            };
        }
    }
    if now < event_start {
        return LiveState {
            status: EventStatus::Upcoming,
            current_index: None,
        };
    }
    if now >= event_end {
        return LiveState {
            status: EventStatus::Finished,
            current_index: None,
        };
    }

    // First match wins; zero-duration slots contain nothing and are skipped.
    let current_index = derived.iter().position(|slot| slot.contains(now));
    LiveState {
        status: EventStatus::OnAirBlock,
        current_index,
    }
}
