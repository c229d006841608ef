//! bat7-core
//!
//! Pure domain types and on-disk path conventions for BAT-7 results.
//! No I/O here: this is the shared vocabulary of the bat7 workspace.

pub mod error;
pub mod models;
pub mod paths;
