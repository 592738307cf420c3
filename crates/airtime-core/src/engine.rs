//! Full schedule computation, recomputed from scratch on every tick.

use chrono::{DateTime, TimeZone};

use crate::schedule::{DerivedSlot, build_schedule, resolve_event_start};
use crate::slot::{EventConfig, Timetable};
use crate::status::{EventStatus, LiveState, classify};

/// Everything a renderer needs for one frame of the live display.
///
/// Holds no state beyond the snapshot it was computed from; hosts discard it
/// and call [`compute_schedule`] again on the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSchedule<Tz: TimeZone> {
    /// The instant this schedule was computed for.
    pub now: DateTime<Tz>,

    /// Resolved start of slot 0.
    pub event_start: DateTime<Tz>,

    /// End of the last slot; equals `event_start` for an empty timetable.
    pub event_end: DateTime<Tz>,

    /// Derived windows, 1:1 with the input slots in performance order.
    pub slots: Vec<DerivedSlot<Tz>>,

    pub status: EventStatus,

    /// Index of the slot containing `now`, when on air.
    pub current_index: Option<usize>,

    /// Whole seconds left in the current slot (floor), for the on-air
    /// countdown. `Some` exactly when `current_index` is.
    pub remaining_in_current_secs: Option<i64>,

    /// Whole seconds until the event starts (ceiling), for the pre-show
    /// countdown. `Some` during standby and upcoming.
    pub time_to_start_secs: Option<i64>,

    /// Seconds since the event started, clamped to 0 before start.
    pub event_elapsed_secs: i64,

    /// Seconds until the event ends, clamped to 0 after the end.
    pub event_remaining_secs: i64,
}

impl<Tz: TimeZone> DerivedSchedule<Tz> {
    /// The slot currently playing, if any.
    pub fn current_slot(&self) -> Option<&DerivedSlot<Tz>> {
        self.current_index.and_then(|index| self.slots.get(index))
    }

    /// The next slot to play.
    ///
    /// While on air this is the slot after the current one; before the event,
    /// or in a gap between slots, it is the first slot starting after `now`.
    pub fn next_slot(&self) -> Option<&DerivedSlot<Tz>> {
        match self.current_index {
            Some(index) => self.slots.get(index + 1),
            None => self.slots.iter().find(|slot| slot.start > self.now),
        }
    }
}

/// Derives the complete live view for one tick.
///
/// Resolves the event start (permissive fallback to `now`), accumulates slot
/// windows, classifies the lifecycle state, and precomputes the countdown
/// fields renderers need. Deterministic for a given `now`, linear in slot
/// count, no memoization — correctness depends on the recency of `now`.
///
/// Countdown rounding: on-air remaining time floors to whole seconds,
/// time-to-start ceils. Each context sticks to its rule so a 1 Hz display
/// never visually skips a second.
pub fn compute_schedule<Tz: TimeZone>(
    timetable: &Timetable,
    config: &EventConfig,
    now: &DateTime<Tz>,
) -> DerivedSchedule<Tz> {
    let event_start = resolve_event_start(config, now);
    let slots = build_schedule(timetable, &event_start);
    let event_end = slots
        .last()
        .map_or_else(|| event_start.clone(), |slot| slot.end.clone());

    let LiveState {
        status,
        current_index,
    } = classify(now, &event_start, &event_end, &slots);

    let remaining_in_current_secs = current_index
        .map(|index| (slots[index].end.clone() - now.clone()).num_seconds());
    let time_to_start_secs = matches!(status, EventStatus::Standby | EventStatus::Upcoming)
        .then(|| {
            let ms = (event_start.clone() - now.clone()).num_milliseconds();
            // Ceiling division; ms is strictly positive before start
            (ms + 999).div_euclid(1000)
        });
    let event_elapsed_secs = (now.clone() - event_start.clone()).num_seconds().max(0);
    let event_remaining_secs = (event_end.clone() - now.clone()).num_seconds().max(0);

    DerivedSchedule {
        now: now.clone(),
        event_start,
        event_end,
        slots,
        status,
        current_index,
        remaining_in_current_secs,
        time_to_start_secs,
        event_elapsed_secs,
        event_remaining_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::slot::Slot;
    use crate::types::SlotId;

    fn slot(id: &str, minutes: f64) -> Slot {
        Slot {
            id: SlotId::new(id).unwrap(),
            name: format!("act {id}"),
            duration_minutes: minutes,
            color: crate::types::SlotColor::default(),
            is_buffer: false,
            image_url: None,
        }
    }

    fn config() -> EventConfig {
        EventConfig {
            title: "Test Night".to_string(),
            start_date: "2024-01-01".to_string(),
            start_time: "22:00".to_string(),
        }
    }

    fn timetable() -> Timetable {
        Timetable::new(vec![slot("a", 60.0), slot("b", 30.0)]).unwrap()
    }

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn on_air_ten_minutes_in() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T22:10:00Z"));

        assert_eq!(schedule.status, EventStatus::OnAirBlock);
        assert_eq!(schedule.current_index, Some(0));
        assert_eq!(schedule.slots[0].start, instant("2024-01-01T22:00:00Z"));
        assert_eq!(schedule.slots[0].end, instant("2024-01-01T23:00:00Z"));
        assert_eq!(schedule.slots[1].start, instant("2024-01-01T23:00:00Z"));
        assert_eq!(schedule.slots[1].end, instant("2024-01-01T23:30:00Z"));
        assert_eq!(schedule.remaining_in_current_secs, Some(3000));
        assert_eq!(schedule.event_elapsed_secs, 600);
        assert_eq!(schedule.event_remaining_secs, 4800);
    }

    #[test]
    fn standby_four_hours_before() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T18:00:00Z"));
        assert_eq!(schedule.status, EventStatus::Standby);
        assert_eq!(schedule.time_to_start_secs, Some(4 * 3600));
        assert_eq!(schedule.event_elapsed_secs, 0);
    }

    #[test]
    fn upcoming_ninety_minutes_before() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T20:30:00Z"));
        assert_eq!(schedule.status, EventStatus::Upcoming);
        assert_eq!(schedule.time_to_start_secs, Some(90 * 60));
        assert_eq!(schedule.next_slot().unwrap().slot.id.as_str(), "a");
    }

    #[test]
    fn finished_exactly_at_end() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T23:30:00Z"));
        assert_eq!(schedule.status, EventStatus::Finished);
        assert_eq!(schedule.current_index, None);
        assert_eq!(schedule.event_remaining_secs, 0);
        assert!(schedule.next_slot().is_none());
    }

    #[test]
    fn empty_timetable_two_hours_before() {
        let schedule = compute_schedule(
            &Timetable::default(),
            &config(),
            &instant("2024-01-01T20:00:00Z"),
        );
        assert_eq!(schedule.status, EventStatus::Upcoming);
        assert_eq!(schedule.current_index, None);
        assert_eq!(schedule.event_end, schedule.event_start);
    }

    #[test]
    fn malformed_duration_collapses_to_event_start() {
        let timetable = Timetable::new(vec![slot("a", -5.0)]).unwrap();
        let schedule = compute_schedule(&timetable, &config(), &instant("2024-01-01T12:00:00Z"));
        assert_eq!(schedule.slots[0].start, instant("2024-01-01T22:00:00Z"));
        assert_eq!(schedule.slots[0].end, instant("2024-01-01T22:00:00Z"));
        assert_eq!(schedule.event_end, schedule.event_start);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let now = instant("2024-01-01T22:10:00Z");
        let first = compute_schedule(&timetable(), &config(), &now);
        let second = compute_schedule(&timetable(), &config(), &now);
        assert_eq!(first, second);
    }

    #[test]
    fn ceiling_countdown_never_reads_zero_before_start() {
        // 500ms before start: a floor would display 0 while still upcoming
        let now = instant("2024-01-01T21:59:59.500Z");
        let schedule = compute_schedule(&timetable(), &config(), &now);
        assert_eq!(schedule.status, EventStatus::Upcoming);
        assert_eq!(schedule.time_to_start_secs, Some(1));
    }

    #[test]
    fn whole_second_countdown_has_no_off_by_one() {
        let now = instant("2024-01-01T21:59:00Z");
        let schedule = compute_schedule(&timetable(), &config(), &now);
        assert_eq!(schedule.time_to_start_secs, Some(60));
    }

    #[test]
    fn next_slot_during_current_is_following_slot() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T22:10:00Z"));
        assert_eq!(schedule.next_slot().unwrap().slot.id.as_str(), "b");

        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T23:10:00Z"));
        assert_eq!(schedule.current_index, Some(1));
        assert!(schedule.next_slot().is_none());
    }

    #[test]
    fn current_slot_accessor_matches_index() {
        let schedule = compute_schedule(&timetable(), &config(), &instant("2024-01-01T23:00:00Z"));
        assert_eq!(schedule.current_index, Some(1));
        assert_eq!(schedule.current_slot().unwrap().slot.id.as_str(), "b");
    }
}
