//! Staging index
//!
//! The index is the ordered list of files queued for the next commit. Every
//! `add` appends a new entry, even when the path is already staged, so the
//! list is a sequence in call order rather than a map keyed by path.
//!
//! ## Persistence
//!
//! The whole list is persisted as one JSON document. Updates are a
//! read-modify-write of the entire document: [`Index::load`] the current
//! state, change it in memory, then [`Index::write_updates`]. The repository
//! keeps the index behind a mutex so only one writer runs at a time.

use crate::areas::lockfile;
use crate::artifacts::index::EMPTY_INDEX;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{LitError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.lit/index`)
    path: Box<Path>,
    /// Staged entries in `add` order
    entries: Vec<IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing the in-memory entries
    ///
    /// A missing or blank index file loads as an empty index.
    pub fn load(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        let Some(content) = lockfile::read_locked(&self.path)? else {
            return Ok(());
        };

        if content.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str(&content).map_err(|err| LitError::CorruptIndex {
            path: self.path.to_path_buf(),
            reason: err.to_string(),
        })?;
        tracing::debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    /// Append an entry, keeping any earlier entries for the same path
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
        self.changed = true;
    }

    /// Drop every staged entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Rewrite the whole index document from the in-memory entries
    ///
    /// Does nothing when the entries have not changed since the last load.
    pub fn write_updates(&mut self) -> Result<()> {
        if !self.changed {
            return Ok(());
        }

        let content = if self.entries.is_empty() {
            EMPTY_INDEX.to_string()
        } else {
            serde_json::to_string(&self.entries)?
        };

        lockfile::write_locked(&self.path, content.as_bytes())?;
        self.changed = false;
        tracing::debug!(entries = self.entries.len(), "wrote index");

        Ok(())
    }
}
