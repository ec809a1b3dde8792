// ABOUTME: Core library for voxpop, defining the history record domain types.
// ABOUTME: Shared by the store and the application shell; carries no I/O of its own.

pub mod record;

pub use record::{HistoryRecord, JobStatus, now_iso};
