// ABOUTME: Defines the HistoryRecord struct representing one analysis job's lifecycle.
// ABOUTME: Records carry the submitted query, a typed status, timestamps, and report output.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle state of an analysis job. Stored on disk as plain lowercase
/// text; unrecognized text read from disk maps to `Unknown` instead of
/// failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Running,
    Completed,
    Failed,
    Unknown,
}

impl JobStatus {
    /// The on-disk text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }

    /// Parse the on-disk text back into a status. Exact lowercase match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "running" => Some(JobStatus::Running),
            "completed" => Some(JobStatus::Completed),
            "failed" => Some(JobStatus::Failed),
            "unknown" => Some(JobStatus::Unknown),
            _ => None,
        }
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match JobStatus::parse(&value) {
            Some(status) => status,
            None => {
                tracing::warn!("unrecognized job status {:?}, treating as unknown", value);
                JobStatus::Unknown
            }
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted analysis job: the submitted query, its lifecycle status,
/// and the report output once produced. Field declaration order here is the
/// on-disk key order.
///
/// Timestamps are kept as ISO-8601 strings: the store's sort contract is
/// lexicographic over the raw field text, and `now_iso` produces fixed-width
/// UTC stamps so lexicographic order equals chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub query: String,
    pub status: JobStatus,
    pub created_at: String,
    pub updated_at: String,
    pub report_file_path: Option<String>,
    pub report_html: Option<String>,
    pub error_message: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl HistoryRecord {
    /// Create a record for a freshly submitted job: status starts at
    /// `Running`, both timestamps are stamped now, and the report fields
    /// stay empty until the job produces output.
    pub fn new(id: String, query: String) -> Self {
        let now = now_iso();
        Self {
            id,
            query,
            status: JobStatus::Running,
            created_at: now.clone(),
            updated_at: now,
            report_file_path: None,
            report_html: None,
            error_message: None,
            metadata: None,
        }
    }

    /// Refresh `updated_at` to the current time. Call before re-saving a
    /// record that has progressed.
    pub fn touch(&mut self) {
        self.updated_at = now_iso();
    }
}

/// Current UTC time as a fixed-width ISO-8601 string (microsecond precision,
/// `Z` suffix).
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
