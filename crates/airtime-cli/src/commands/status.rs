//! Status command: print the live state once.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use airtime_core::compute_schedule;

use crate::render::{self, StatusReport};
use crate::store::TimetableDoc;

pub fn run<W: Write>(
    writer: &mut W,
    doc: &TimetableDoc,
    now: &DateTime<Local>,
    json: bool,
) -> Result<()> {
    let schedule = compute_schedule(&doc.slots, &doc.event, now);

    if json {
        let report = StatusReport::new(&doc.event.title, &schedule);
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
    } else {
        write!(
            writer,
            "{}",
            render::render_status(&doc.event.title, &schedule)
        )?;
    }
    Ok(())
}
