//! Init command: create a starter timetable file.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::Local;

use airtime_core::{EventConfig, Timetable};

use crate::Config;
use crate::store::{self, TimetableDoc};

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    title: Option<&str>,
    date: Option<&str>,
    time: &str,
    force: bool,
) -> Result<()> {
    if config.timetable_path.exists() && !force {
        bail!(
            "timetable already exists at {} (use --force to overwrite)",
            config.timetable_path.display()
        );
    }

    let doc = TimetableDoc {
        event: EventConfig {
            title: title.unwrap_or("Untitled event").to_string(),
            start_date: date.map_or_else(
                || Local::now().format("%Y-%m-%d").to_string(),
                str::to_string,
            ),
            start_time: time.to_string(),
        },
        slots: Timetable::default(),
    };
    store::save(&config.timetable_path, &doc)?;

    writeln!(writer, "Created {}", config.timetable_path.display())?;
    writeln!(
        writer,
        "Event \"{}\" starts {} {}",
        doc.event.title, doc.event.start_date, doc.event.start_time
    )?;
    Ok(())
}
