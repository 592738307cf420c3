//! Time arithmetic: resolving the event start and deriving slot windows.
//!
//! Stored per-slot times do not exist in this system; absolute windows are
//! always re-derived here by sequential accumulation of durations from the
//! event's start instant. Every consumer goes through [`build_schedule`] so
//! the accumulation logic lives in exactly one place.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone};

use crate::slot::{EventConfig, Slot, Timetable};

/// Milliseconds per minute, the unit conversion used throughout.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Coerces a duration to a usable value: NaN, infinities and negatives all
/// become `0`. Bad data is treated as neutral, never as an error.
#[must_use]
pub fn coerce_duration_minutes(minutes: f64) -> f64 {
    if minutes.is_finite() && minutes > 0.0 {
        minutes
    } else {
        0.0
    }
}

/// A slot's duration in whole milliseconds, after coercion.
///
/// Fractional-minute durations round to the nearest millisecond.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "durations are bounded far below i64 milliseconds"
)]
pub fn slot_duration_ms(minutes: f64) -> i64 {
    #[expect(clippy::cast_precision_loss, reason = "MS_PER_MINUTE is exact in f64")]
    let ms = coerce_duration_minutes(minutes) * MS_PER_MINUTE as f64;
    ms.round() as i64
}

/// Resolves the configured start date/time into an absolute instant in the
/// timezone of `now`.
///
/// The contract is deliberately permissive: if either field is missing or
/// unparseable the function falls back to `now` instead of failing, so a
/// half-filled event config still produces a renderable schedule. The
/// fallback is logged because it makes the event start a moving target.
///
/// `now` is passed in rather than read from a clock to keep this pure.
pub fn resolve_event_start<Tz: TimeZone>(config: &EventConfig, now: &DateTime<Tz>) -> DateTime<Tz> {
    let Ok(date) = NaiveDate::parse_from_str(&config.start_date, "%Y-%m-%d") else {
        tracing::warn!(
            start_date = %config.start_date,
            "unparseable event start date, falling back to now"
        );
        return now.clone();
    };
    let Ok(time) = NaiveTime::parse_from_str(&config.start_time, "%H:%M") else {
        tracing::warn!(
            start_time = %config.start_time,
            "unparseable event start time, falling back to now"
        );
        return now.clone();
    };

    match now.timezone().from_local_datetime(&date.and_time(time)) {
        // Ambiguous (DST fall-back): use the earlier instant
        LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => start,
        LocalResult::None => {
            // DST spring-forward gap: the configured wall time never occurs
            tracing::warn!(
                start_date = %config.start_date,
                start_time = %config.start_time,
                "event start falls in a DST gap, falling back to now"
            );
            now.clone()
        }
    }
}

/// A slot with its derived absolute window.
///
/// Windows are half-open `[start, end)`; a zero-duration slot collapses to a
/// point and contains no instant at all.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSlot<Tz: TimeZone> {
    /// The input slot, unchanged.
    pub slot: Slot,
    /// Absolute instant the slot begins.
    pub start: DateTime<Tz>,
    /// Absolute instant the slot ends. `end - start` is the coerced duration.
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> DerivedSlot<Tz> {
    /// Window length in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.end.clone() - self.start.clone()).num_milliseconds()
    }

    /// Whether `instant` falls inside the half-open window `[start, end)`.
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

/// Derives absolute windows for every slot by sequential accumulation.
///
/// Slot 0 starts at `event_start`; each subsequent slot starts exactly where
/// the previous one ends. Output is 1:1 with the input in the same order.
/// Pure, cheap, safe to call on every tick.
pub fn build_schedule<Tz: TimeZone>(
    timetable: &Timetable,
    event_start: &DateTime<Tz>,
) -> Vec<DerivedSlot<Tz>> {
    let mut cursor = event_start.clone();
    timetable
        .iter()
        .map(|slot| {
            let start = cursor.clone();
            let end = start.clone() + TimeDelta::milliseconds(slot_duration_ms(slot.duration_minutes));
            cursor = end.clone();
            DerivedSlot {
                slot: slot.clone(),
                start,
                end,
            }
        })
        .collect()
}
