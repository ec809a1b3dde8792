// ABOUTME: Application-level library for voxpop: startup configuration and re-exports.
// ABOUTME: The binary wires Settings into the history store; consumers get one import surface.

pub mod config;

pub use config::Settings;
pub use voxpop_core::{HistoryRecord, JobStatus};
pub use voxpop_store::{HistoryStore, SortField, StoreError};
