//! Watch command: the front-of-house live display loop.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::TimeZone;

use airtime_core::{DerivedSchedule, compute_schedule};

use crate::render;
use crate::store;
use crate::{Clock, Config};

/// Runs the live display until interrupted.
///
/// Each tick re-reads the timetable snapshot (edits from another terminal
/// show up on the next tick), recomputes the schedule from scratch, and
/// redraws only when the rendered frame changed. All diffing happens here in
/// the host; the engine is stateless.
pub fn run(config: &Config, clock: &Clock) -> Result<()> {
    let mut doc = store::load(&config.timetable_path)?;
    let mut stdout = std::io::stdout();
    let mut last_frame = String::new();

    loop {
        match store::load(&config.timetable_path) {
            Ok(fresh) => doc = fresh,
            // A torn save never happens (temp file + rename), but the file
            // can be mid-edit or briefly missing; keep the last snapshot.
            Err(error) => tracing::warn!(%error, "reload failed, keeping last snapshot"),
        }

        let schedule = compute_schedule(&doc.slots, &doc.event, &clock.now());
        let frame = render_frame(&doc.event.title, &schedule);
        if frame != last_frame {
            // Clear screen, cursor home
            write!(stdout, "\x1b[2J\x1b[H{frame}")?;
            stdout.flush()?;
            last_frame = frame;
        }

        std::thread::sleep(Duration::from_millis(config.tick_ms));
    }
}

/// One full frame: live state summary above the lineup table.
fn render_frame<Tz: TimeZone>(title: &str, schedule: &DerivedSchedule<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}\n{}",
        render::render_status(title, schedule),
        render::render_schedule(title, schedule)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    use airtime_core::{EventConfig, Timetable};

    fn schedule_at(now: &str) -> DerivedSchedule<Utc> {
        let slots: Timetable = serde_json::from_str(
            r#"[{"id": "a", "name": "Nova", "duration_minutes": 60}]"#,
        )
        .unwrap();
        let config = EventConfig {
            title: "Signal Night".to_string(),
            start_date: "2024-01-01".to_string(),
            start_time: "22:00".to_string(),
        };
        compute_schedule(&slots, &config, &now.parse::<DateTime<Utc>>().unwrap())
    }

    #[test]
    fn frame_combines_status_and_lineup() {
        let frame = render_frame("Signal Night", &schedule_at("2024-01-01T22:30:00Z"));
        assert!(frame.contains("Status: ON_AIR_BLOCK"));
        assert!(frame.contains("On air: Nova"));
        assert!(frame.contains("LINEUP: Signal Night"));
    }

    #[test]
    fn consecutive_ticks_at_same_instant_render_identical_frames() {
        let first = render_frame("Signal Night", &schedule_at("2024-01-01T22:30:00Z"));
        let second = render_frame("Signal Night", &schedule_at("2024-01-01T22:30:00Z"));
        assert_eq!(first, second);
    }

    #[test]
    fn frames_differ_across_seconds() {
        let first = render_frame("Signal Night", &schedule_at("2024-01-01T22:30:00Z"));
        let second = render_frame("Signal Night", &schedule_at("2024-01-01T22:30:01Z"));
        assert_ne!(first, second);
    }
}
