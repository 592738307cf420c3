//! Plain-text and JSON presentation of a derived schedule.
//!
//! Everything here is formatting only: instants and countdown seconds come
//! straight from the engine output, never recomputed locally.

use std::fmt::{self, Write};

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use airtime_core::{DerivedSchedule, DerivedSlot, EventStatus, Slot};

/// Formats an instant as wall-clock `HH:MM`.
pub fn format_clock<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    instant.format("%H:%M").to_string()
}

/// Formats a countdown as `H:MM:SS`. Negative values clamp to `0:00:00`.
#[must_use]
pub fn format_countdown(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Formats milliseconds as a coarse duration: `1h 30m`, or `45m` under an
/// hour. Negative durations are treated as 0m.
#[must_use]
pub fn format_duration_ms(ms: i64) -> String {
    if ms < 0 {
        return "0m".to_string();
    }
    let total_minutes = ms / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Formats a slot duration in minutes, keeping fractional values visible.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract().abs() < 1e-9 {
        format!("{minutes:.0} min")
    } else {
        format!("{minutes} min")
    }
}

fn display_name(slot: &Slot) -> String {
    let base = if slot.name.is_empty() {
        "(unnamed)"
    } else {
        &slot.name
    };
    if slot.is_buffer {
        format!("{base} [buffer]")
    } else {
        base.to_string()
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() { "Untitled event" } else { title }
}

/// Renders the full lineup table.
pub fn render_schedule<Tz: TimeZone>(title: &str, schedule: &DerivedSchedule<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    writeln!(out, "LINEUP: {}", display_title(title)).unwrap();
    writeln!(
        out,
        "Start: {}",
        schedule.event_start.format("%Y-%m-%d %H:%M")
    )
    .unwrap();
    writeln!(out, "Status: {}", schedule.status).unwrap();
    writeln!(out).unwrap();

    if schedule.slots.is_empty() {
        writeln!(out, "(no slots)").unwrap();
        return out;
    }

    for (index, derived) in schedule.slots.iter().enumerate() {
        let marker = if schedule.current_index == Some(index) {
            '▶'
        } else {
            ' '
        };
        writeln!(
            out,
            " {marker} {:>2}. {:<24} {}–{}  {}",
            index + 1,
            display_name(&derived.slot),
            format_clock(&derived.start),
            format_clock(&derived.end),
            format_minutes(derived.slot.duration_minutes),
        )
        .unwrap();
    }

    let total_ms = (schedule.event_end.clone() - schedule.event_start.clone()).num_milliseconds();
    writeln!(out).unwrap();
    writeln!(
        out,
        "Total: {} (ends {})",
        format_duration_ms(total_ms),
        format_clock(&schedule.event_end)
    )
    .unwrap();
    out
}

/// Renders the one-shot live state summary.
pub fn render_status<Tz: TimeZone>(title: &str, schedule: &DerivedSchedule<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    writeln!(out, "{}", display_title(title)).unwrap();
    writeln!(out, "Status: {}", schedule.status).unwrap();

    match schedule.status {
        EventStatus::Standby | EventStatus::Upcoming => {
            if let Some(secs) = schedule.time_to_start_secs {
                writeln!(
                    out,
                    "Doors in {} (starts {})",
                    format_countdown(secs),
                    format_clock(&schedule.event_start)
                )
                .unwrap();
            }
            if let Some(next) = schedule.next_slot() {
                writeln!(out, "First up: {}", display_name(&next.slot)).unwrap();
            }
        }
        EventStatus::OnAirBlock => {
            if let Some(current) = schedule.current_slot() {
                writeln!(out, "On air: {}", display_name(&current.slot)).unwrap();
                if let Some(secs) = schedule.remaining_in_current_secs {
                    writeln!(
                        out,
                        "Ends {} ({} remaining)",
                        format_clock(&current.end),
                        format_countdown(secs)
                    )
                    .unwrap();
                }
            } else {
                // Legal gap between slots; point at whatever comes next
                writeln!(out, "Between slots").unwrap();
            }
            if let Some(next) = schedule.next_slot() {
                writeln!(
                    out,
                    "Up next: {} ({})",
                    display_name(&next.slot),
                    format_clock(&next.start)
                )
                .unwrap();
            }
        }
        EventStatus::Finished => {
            writeln!(out, "Finished at {}", format_clock(&schedule.event_end)).unwrap();
        }
    }
    out
}

/// Per-slot entry for JSON output.
#[derive(Debug, Serialize)]
pub struct SlotReport {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: f64,
    pub color: String,
    pub is_buffer: bool,
}

impl SlotReport {
    fn new<Tz: TimeZone>(derived: &DerivedSlot<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            id: derived.slot.id.to_string(),
            name: derived.slot.name.clone(),
            start: derived.start.to_rfc3339(),
            end: derived.end.to_rfc3339(),
            duration_minutes: derived.slot.duration_minutes,
            color: derived.slot.color.to_string(),
            is_buffer: derived.slot.is_buffer,
        }
    }
}

/// JSON shape for `show --json` and `slots list --json`.
#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub title: String,
    pub status: EventStatus,
    pub event_start: String,
    pub event_end: String,
    pub current_index: Option<usize>,
    pub slots: Vec<SlotReport>,
}

impl ScheduleReport {
    pub fn new<Tz: TimeZone>(title: &str, schedule: &DerivedSchedule<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            title: title.to_string(),
            status: schedule.status,
            event_start: schedule.event_start.to_rfc3339(),
            event_end: schedule.event_end.to_rfc3339(),
            current_index: schedule.current_index,
            slots: schedule.slots.iter().map(SlotReport::new).collect(),
        }
    }
}

/// JSON shape for `status --json`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub title: String,
    pub status: EventStatus,
    pub event_start: String,
    pub event_end: String,
    pub current_index: Option<usize>,
    pub current_slot: Option<String>,
    pub next_slot: Option<String>,
    pub remaining_in_current_secs: Option<i64>,
    pub time_to_start_secs: Option<i64>,
    pub event_elapsed_secs: i64,
    pub event_remaining_secs: i64,
}

impl StatusReport {
    pub fn new<Tz: TimeZone>(title: &str, schedule: &DerivedSchedule<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            title: title.to_string(),
            status: schedule.status,
            event_start: schedule.event_start.to_rfc3339(),
            event_end: schedule.event_end.to_rfc3339(),
            current_index: schedule.current_index,
            current_slot: schedule.current_slot().map(|s| s.slot.name.clone()),
            next_slot: schedule.next_slot().map(|s| s.slot.name.clone()),
            remaining_in_current_secs: schedule.remaining_in_current_secs,
            time_to_start_secs: schedule.time_to_start_secs,
            event_elapsed_secs: schedule.event_elapsed_secs,
            event_remaining_secs: schedule.event_remaining_secs,
        }
    }
}
