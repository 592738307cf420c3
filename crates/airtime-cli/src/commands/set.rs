//! Event config edits: start instant and title.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::Config;
use crate::store;

/// Sets the event start date and time.
///
/// Values are stored as given; resolution stays permissive (a bad value falls
/// back to "now" at display time), but an unparseable input almost certainly
/// means a typo, so warn here where the operator can still fix it.
pub fn set_start<W: Write>(writer: &mut W, config: &Config, date: &str, time: &str) -> Result<()> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        tracing::warn!(date, "start date is not YYYY-MM-DD; live view will fall back to now");
    }
    if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        tracing::warn!(time, "start time is not HH:MM; live view will fall back to now");
    }

    let mut doc = store::load(&config.timetable_path)?;
    doc.event.start_date = date.to_string();
    doc.event.start_time = time.to_string();
    store::save(&config.timetable_path, &doc)?;

    writeln!(writer, "Event starts {date} {time}")?;
    Ok(())
}

/// Sets the event title.
pub fn set_title<W: Write>(writer: &mut W, config: &Config, title: &str) -> Result<()> {
    let mut doc = store::load(&config.timetable_path)?;
    doc.event.title = title.to_string();
    store::save(&config.timetable_path, &doc)?;

    writeln!(writer, "Event title set to \"{title}\"")?;
    Ok(())
}
