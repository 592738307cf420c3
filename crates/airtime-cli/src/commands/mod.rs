//! CLI command implementations.

pub mod init;
pub mod set;
pub mod show;
pub mod slots;
pub mod status;
pub mod watch;
