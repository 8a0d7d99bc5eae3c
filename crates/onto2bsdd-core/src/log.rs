use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{OntoError, Result};
use crate::jsonl::{LineError, read_records};
use crate::models::ConversionLogEntry;

pub const STATUS_OK: &str = "ok";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_WARNING: &str = "warning";

/// Newest entries first, plus what had to be skipped while reading the file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecentEntries {
    pub entries: Vec<ConversionLogEntry>,
    pub skipped_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_error: Option<LineError>,
}

/// Append-only JSONL log of conversion runs.
#[derive(Debug, Clone)]
pub struct ConversionLog {
    path: PathBuf,
}

impl ConversionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &ConversionLogEntry) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Logging never fails the operation being logged.
    pub fn try_append(&self, entry: &ConversionLogEntry) {
        let _ = self.append(entry);
    }

    pub fn log_status(
        &self,
        operation: &str,
        status: &str,
        started: Instant,
        source: Option<String>,
        details: Option<serde_json::Value>,
    ) {
        self.try_append(&ConversionLogEntry {
            request_id: Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            source,
            error_code: None,
            error_message: None,
            details,
        });
    }

    /// Records a failed run. The entry reuses the error payload, so its
    /// request id is the payload's trace id.
    pub fn log_error(
        &self,
        operation: &str,
        started: Instant,
        source: Option<String>,
        err: &OntoError,
    ) {
        let payload = err.to_payload(operation, source);
        self.try_append(&ConversionLogEntry {
            request_id: payload.trace_id,
            operation: payload.operation,
            status: STATUS_ERROR.to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            source: payload.source,
            error_code: Some(payload.code),
            error_message: Some(payload.message),
            details: payload.details,
        });
    }

    /// At most `limit` entries, newest first. Malformed lines are skipped and
    /// counted rather than failing the read.
    pub fn recent(&self, limit: usize) -> Result<RecentEntries> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecentEntries::default());
            }
            Err(err) => return Err(err.into()),
        };
        let read = read_records::<ConversionLogEntry>(&raw);
        let mut entries = read.records;
        entries.reverse();
        entries.truncate(limit);
        Ok(RecentEntries {
            entries,
            skipped_lines: read.skipped_lines,
            first_error: read.first_error,
        })
    }
}
