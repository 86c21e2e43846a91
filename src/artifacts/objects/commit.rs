//! Commit object
//!
//! Commits record a snapshot of the staging index at a point in time.
//! They contain:
//! - The commit timestamp (UTC, ISO-8601)
//! - The commit message
//! - The staged file list, in the order the files were added
//! - The parent commit ID (absent for the first commit)
//!
//! ## Format
//!
//! On disk:
//! ```text
//! {"timestamp":"2024-01-01T12:34:56.789Z","message":"...","files":[{"path":"f.txt","hash":"..."}],"parent":null}
//! ```
//!
//! The digest covers the whole record, timestamp included, so two commits with
//! the same files and message still get distinct IDs.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{LitError, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the commit timestamp (RFC 3339)
pub const COMMIT_DATE_ENV: &str = "LIT_COMMIT_DATE";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, new)]
pub struct Commit {
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<IndexEntry>,
    parent: Option<ObjectId>,
}

impl Commit {
    /// Resolve the timestamp for a new commit
    ///
    /// Reads `LIT_COMMIT_DATE` when set to a valid RFC 3339 date, otherwise
    /// falls back to the current time.
    pub fn timestamp_from_env() -> DateTime<Utc> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| match DateTime::parse_from_rfc3339(&date_str) {
                Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
                Err(err) => {
                    tracing::warn!(%date_str, %err, "ignoring invalid {}", COMMIT_DATE_ENV);
                    None
                }
            })
            .unwrap_or_else(Utc::now)
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format timestamp as "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn files(&self) -> &[IndexEntry] {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    /// First entry staged under the given path
    ///
    /// The file list may hold several entries for one path when it was added
    /// more than once before committing; the earliest one wins.
    pub fn find_file(&self, path: &Path) -> Option<&IndexEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        Ok(serde_json::to_vec(self)?.into())
    }
}

impl Unpackable for Commit {
    fn deserialize(object_id: &ObjectId, content: Bytes) -> Result<Self> {
        serde_json::from_slice(&content).map_err(|err| LitError::Corrupt {
            oid: object_id.clone(),
            reason: format!("not a commit: {err}"),
        })
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("timestamp {}", self.timestamp.to_rfc3339()));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        for entry in &self.files {
            lines.push(format!("file {} {}", entry.oid, entry.path.display()));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
