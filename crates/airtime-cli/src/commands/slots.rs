//! Slots command: lineup editing operations.
//!
//! Every operation is load → one core edit → save full snapshot. Derived
//! windows are never stored; `show`/`status` recompute them from durations.

use std::io::Write;

use anyhow::{Context, Result};

use airtime_core::{Slot, SlotColor, SlotPatch, compute_schedule};

use crate::cli::SlotsAction;
use crate::render::{self, ScheduleReport};
use crate::store;
use crate::{Clock, Config};

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &Clock,
    action: &SlotsAction,
) -> Result<()> {
    let mut doc = store::load(&config.timetable_path)?;

    match action {
        SlotsAction::List { json } => {
            let schedule = compute_schedule(&doc.slots, &doc.event, &clock.now());
            if *json {
                let report = ScheduleReport::new(&doc.event.title, &schedule);
                serde_json::to_writer_pretty(&mut *writer, &report)?;
                writeln!(writer)?;
            } else if schedule.slots.is_empty() {
                writeln!(writer, "(no slots)")?;
            } else {
                for (index, derived) in schedule.slots.iter().enumerate() {
                    writeln!(
                        writer,
                        "{index:>3}  {:<24} {:>12}  {:<8} {}",
                        slot_label(&derived.slot),
                        render::format_minutes(derived.slot.duration_minutes),
                        derived.slot.color,
                        derived.slot.id,
                    )?;
                }
            }
            return Ok(()); // read-only, nothing to save
        }

        SlotsAction::Add {
            name,
            minutes,
            color,
            buffer,
            image_url,
            at,
        } => {
            let mut slot = Slot::new(name.clone(), *minutes);
            if let Some(color) = color {
                slot.color = SlotColor::from(color.as_str());
            }
            slot.is_buffer = *buffer;
            slot.image_url = image_url.clone();

            let index = at.unwrap_or(doc.slots.len());
            let label = slot_label(&slot);
            doc.slots
                .insert_slot(index, slot)
                .context("failed to add slot")?;
            writeln!(writer, "Added {label} at index {index}")?;
        }

        SlotsAction::Remove { index } => {
            let removed = doc
                .slots
                .remove_slot(*index)
                .context("failed to remove slot")?;
            writeln!(writer, "Removed {}", slot_label(&removed))?;
        }

        SlotsAction::Duplicate { index } => {
            let new_id = doc
                .slots
                .duplicate_slot(*index)
                .context("failed to duplicate slot")?;
            writeln!(writer, "Duplicated slot {index} as {new_id}")?;
        }

        SlotsAction::Move { from, to } => {
            doc.slots
                .move_slot(*from, *to)
                .context("failed to move slot")?;
            writeln!(writer, "Moved slot {from} to {to}")?;
        }

        SlotsAction::Set {
            index,
            name,
            minutes,
            color,
            buffer,
            image_url,
            clear_image,
        } => {
            let patch = SlotPatch {
                name: name.clone(),
                duration_minutes: *minutes,
                color: color.as_deref().map(SlotColor::from),
                is_buffer: *buffer,
                image_url: if *clear_image {
                    Some(None)
                } else {
                    image_url.clone().map(Some)
                },
            };
            doc.slots
                .update_slot(*index, patch)
                .context("failed to update slot")?;
            writeln!(writer, "Updated slot {index}")?;
        }
    }

    store::save(&config.timetable_path, &doc)
}

fn slot_label(slot: &Slot) -> String {
    if slot.name.is_empty() {
        if slot.is_buffer {
            "[buffer]".to_string()
        } else {
            "(unnamed)".to_string()
        }
    } else if slot.is_buffer {
        format!("{} [buffer]", slot.name)
    } else {
        slot.name.clone()
    }
}
