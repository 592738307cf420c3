//! Wall-clock source with the rehearsal offset.

use chrono::{DateTime, Local, TimeDelta};

/// Supplies `now` to the schedule engine.
///
/// The offset is a pure additive transform applied here, before `now` reaches
/// the core — the engine itself never knows about time travel.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: TimeDelta,
}

impl Clock {
    #[must_use]
    pub fn new(offset_ms: i64) -> Self {
        Self {
            offset: TimeDelta::milliseconds(offset_ms),
        }
    }

    /// The current (possibly shifted) local wall-clock instant.
    #[must_use]
    pub fn now(&self) -> DateTime<Local> {
        Local::now() + self.offset
    }
}
