//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Live event timetable manager.
///
/// Builds an ordered lineup of performance slots and drives a front-of-house
/// live display with on-air state and countdowns.
#[derive(Debug, Parser)]
#[command(name = "airtime", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Additive clock offset in milliseconds, for rehearsing the live view
    /// at a shifted wall time. Overrides the configured offset.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset_ms: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a starter timetable file.
    Init {
        /// Event title.
        #[arg(long)]
        title: Option<String>,

        /// Event start date, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Event start time, HH:MM 24h.
        #[arg(long, default_value = "22:00")]
        time: String,

        /// Overwrite an existing timetable file.
        #[arg(long)]
        force: bool,
    },

    /// Print the full derived schedule.
    Show {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the current live state once.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the live display: recompute and re-render once per tick.
    Watch,

    /// Edit the slot lineup.
    Slots {
        #[command(subcommand)]
        action: SlotsAction,
    },

    /// Set the event start date and time.
    SetStart {
        /// Event start date, YYYY-MM-DD.
        #[arg(long)]
        date: String,

        /// Event start time, HH:MM 24h.
        #[arg(long)]
        time: String,
    },

    /// Set the event title.
    SetTitle {
        /// New event title.
        title: String,
    },
}

/// Lineup editing operations.
#[derive(Debug, Subcommand)]
pub enum SlotsAction {
    /// List slots with their derived windows.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Add a slot, appended unless --at is given.
    Add {
        /// Display name. May be empty for buffer slots.
        #[arg(long, default_value = "")]
        name: String,

        /// Duration in minutes. Fractional values allowed.
        #[arg(long)]
        minutes: f64,

        /// Display color: a palette name or any custom value.
        #[arg(long)]
        color: Option<String>,

        /// Mark as a buffer (changeover) slot.
        #[arg(long)]
        buffer: bool,

        /// Display image reference.
        #[arg(long)]
        image_url: Option<String>,

        /// Insert position (0-based). Defaults to the end.
        #[arg(long)]
        at: Option<usize>,
    },

    /// Remove the slot at an index.
    Remove {
        /// 0-based slot index.
        index: usize,
    },

    /// Duplicate the slot at an index, inserting the copy after it.
    Duplicate {
        /// 0-based slot index.
        index: usize,
    },

    /// Move a slot to a new position.
    Move {
        /// 0-based index of the slot to move.
        from: usize,

        /// 0-based destination index.
        to: usize,
    },

    /// Update fields of the slot at an index.
    Set {
        /// 0-based slot index.
        index: usize,

        /// New display name.
        #[arg(long)]
        name: Option<String>,

        /// New duration in minutes.
        #[arg(long, allow_hyphen_values = true)]
        minutes: Option<f64>,

        /// New display color.
        #[arg(long)]
        color: Option<String>,

        /// Set or clear the buffer flag.
        #[arg(long)]
        buffer: Option<bool>,

        /// New display image reference.
        #[arg(long, conflicts_with = "clear_image")]
        image_url: Option<String>,

        /// Remove the display image.
        #[arg(long)]
        clear_image: bool,
    },
}
