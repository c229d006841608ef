//! bat7-cli library root.
//!
//! Re-exports the config and command modules so integration tests can
//! exercise them without going through argument parsing.

pub mod commands;
pub mod config;
