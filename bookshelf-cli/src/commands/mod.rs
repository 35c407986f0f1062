//! Subcommand implementations

pub mod ping;
pub mod serve;
