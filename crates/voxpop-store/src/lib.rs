// ABOUTME: Persistence layer for voxpop, storing one JSON file per history record.
// ABOUTME: Provides the HistoryStore with save, get, list-with-sort, delete, and clear.

pub mod history;

pub use history::{HistoryStore, SortField, StoreError};
