// ABOUTME: File-per-record JSON store for analysis job history.
// ABOUTME: Saves with atomic rename, lists with a stable sort, and swallows failures into bool/None.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use voxpop_core::HistoryRecord;

/// Errors that can occur during history store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The record field used to order `get_all` results. Every orderable field
/// compares as a string; ISO-8601 timestamps make lexicographic order equal
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Query,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    fn key<'a>(self, record: &'a HistoryRecord) -> &'a str {
        match self {
            SortField::Id => &record.id,
            SortField::Query => &record.query,
            SortField::Status => record.status.as_str(),
            SortField::CreatedAt => &record.created_at,
            SortField::UpdatedAt => &record.updated_at,
        }
    }
}

/// A directory-backed store holding one JSON file per history record, named
/// `<id>.json`. The file's existence is the sole source of truth for whether
/// a record exists; saving an existing id fully replaces its file.
///
/// The default operations swallow failures into `false`, `None`, or an empty
/// list after logging the cause, so callers never see a propagated fault.
/// The `try_*` variants expose the underlying `StoreError` for call sites
/// that need the distinction.
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    /// Open a store rooted at the given directory, creating it if absent.
    /// Idempotent: an existing directory and its records are left untouched.
    pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The storage directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Serialize a record to pretty-printed JSON and write it to `<id>.json`,
    /// fully replacing any prior file of that name. Writes go to a `.json.tmp`
    /// sibling first, are fsynced, then renamed into place, so a failure at
    /// any step leaves the prior file unchanged.
    ///
    /// The record's id names the file, so ids are expected to be
    /// filesystem-safe.
    pub fn try_save(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        let tmp_path = self.dir.join(format!("{}.json.tmp", record.id));
        let final_path = self.record_path(&record.id);

        let json = serde_json::to_string_pretty(record)?;

        let mut file = File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &final_path)?;

        Ok(())
    }

    /// Save a record, reporting success as a bool. Failures are logged and
    /// the prior on-disk state stays whatever it was before the attempt.
    pub fn save(&self, record: &HistoryRecord) -> bool {
        match self.try_save(record) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("failed to save history record {}: {}", record.id, e);
                false
            }
        }
    }

    /// Read a single record by id. `Ok(None)` when no file exists for the id;
    /// an unreadable or unparseable file is an error here.
    pub fn try_get(&self, id: &str) -> Result<Option<HistoryRecord>, StoreError> {
        let contents = match fs::read_to_string(self.record_path(id)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_str(&contents)?;
        Ok(Some(record))
    }

    /// Get a record by id. Returns `None` both when the record was never
    /// saved and when its file exists but cannot be read or parsed; the
    /// unreadable case is logged so the distinction is not lost entirely.
    pub fn get(&self, id: &str) -> Option<HistoryRecord> {
        match self.try_get(id) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("failed to read history record {}: {}", id, e);
                None
            }
        }
    }

    /// Scan the storage directory and collect every record that deserializes,
    /// sorted by the given field. Files that fail to read or parse are
    /// skipped with a warning; entries without a `.json` extension (including
    /// in-flight `.json.tmp` files) are ignored outright.
    pub fn try_get_all(
        &self,
        sort_by: SortField,
        descending: bool,
    ) -> Result<Vec<HistoryRecord>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let parsed = fs::read_to_string(&path)
                .map_err(StoreError::from)
                .and_then(|contents| {
                    serde_json::from_str::<HistoryRecord>(&contents).map_err(StoreError::from)
                });
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("skipping unreadable history file {}: {}", path.display(), e);
                }
            }
        }

        // Stable sort: ties keep their encounter order from the scan.
        records.sort_by(|a, b| {
            let order = sort_by.key(a).cmp(sort_by.key(b));
            if descending { order.reverse() } else { order }
        });

        Ok(records)
    }

    /// List every readable record sorted by the given field. Returns an empty
    /// vector when the directory is empty, missing, or unreadable.
    pub fn get_all(&self, sort_by: SortField, descending: bool) -> Vec<HistoryRecord> {
        match self.try_get_all(sort_by, descending) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    "failed to list history records in {}: {}",
                    self.dir.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Remove the record file for the id. A file that was never there counts
    /// as success; only a failed removal is an error.
    pub fn try_delete(&self, id: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.record_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a record by id. Idempotent: deleting an absent record reports
    /// `true`; only an I/O failure during removal reports `false`.
    pub fn delete(&self, id: &str) -> bool {
        match self.try_delete(id) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("failed to delete history record {}: {}", id, e);
                false
            }
        }
    }

    /// Remove every record file in the storage directory, leaving the
    /// directory itself and any non-record files in place. Stops at the
    /// first failed removal; files already removed stay removed.
    pub fn try_clear(&self) -> Result<(), StoreError> {
        if !self.dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            fs::remove_file(&path)?;
        }

        Ok(())
    }

    /// Clear all records, reporting success as a bool. No rollback: a `false`
    /// result may leave some records deleted and others not.
    pub fn clear(&self) -> bool {
        match self.try_clear() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    "failed to clear history records in {}: {}",
                    self.dir.display(),
                    e
                );
                false
            }
        }
    }
}
