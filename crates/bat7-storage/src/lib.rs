//! bat7-storage
//!
//! Data access for result records: a file-backed repository and a
//! short-TTL cache in front of any repository. Aggregation never caches;
//! this is the only layer that does.

pub mod cache;
pub mod error;
pub mod files;
pub mod repository;
