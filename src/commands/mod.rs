//! CLI commands

pub mod list;
pub mod show;
