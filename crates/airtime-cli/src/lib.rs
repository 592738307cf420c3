//! Live event timetable manager CLI.
//!
//! The host shell around `airtime-core`: a JSON timetable file stands in for
//! the persistence collaborator, a wall clock with an additive rehearsal
//! offset supplies `now`, and plain-text rendering consumes the derived
//! schedule.

mod cli;
mod clock;
pub mod commands;
mod config;
pub mod render;
pub mod store;

pub use cli::{Cli, Commands, SlotsAction};
pub use clock::Clock;
pub use config::Config;
