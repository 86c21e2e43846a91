//! Commit-to-parent comparison
//!
//! Each file staged in a commit is looked up in the parent commit by path.
//! Because the file list is an ordered sequence that may repeat a path, the
//! parent's copy is the first entry with a matching path. Lookups are linear,
//! so comparing a commit costs (files in commit) × (files in parent).
//!
//! Failures are kept per file: a missing blob for one file is recorded on that
//! file and the remaining files are still classified.

use crate::areas::database::Database;
use crate::artifacts::diff::line_diff::{Segment, line_diff};
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;

/// How a file in a commit relates to its parent commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The commit has no parent
    FirstCommit { content: String },
    /// The parent has no file at this path
    NewFile { content: String },
    /// The parent has a file at this path; segments run from the parent's copy to this one
    Modified { segments: Vec<Segment> },
}

#[derive(Debug)]
pub struct FileDiff {
    pub entry: IndexEntry,
    pub change: Result<FileChange>,
}

#[derive(Debug)]
pub struct CommitDiff {
    pub oid: ObjectId,
    pub commit: Commit,
    pub files: Vec<FileDiff>,
}

impl CommitDiff {
    /// Load a commit and its parent and classify every file of the commit
    ///
    /// Fails when the commit itself or its parent cannot be loaded. Files are
    /// classified in the order they appear in the commit.
    pub fn load(database: &Database, oid: &ObjectId) -> Result<Self> {
        let commit = database.parse_object_as_commit(oid)?;
        let parent = commit
            .parent()
            .map(|parent_oid| database.parse_object_as_commit(parent_oid))
            .transpose()?;

        let files = commit
            .files()
            .iter()
            .map(|entry| {
                let change = classify_file(database, entry, parent.as_ref());
                if let Err(err) = &change {
                    tracing::warn!(path = %entry.path.display(), %err, "skipping file in diff");
                }

                FileDiff {
                    entry: entry.clone(),
                    change,
                }
            })
            .collect();

        Ok(CommitDiff {
            oid: oid.clone(),
            commit,
            files,
        })
    }
}

/// Classify one file of a commit against the commit's parent
pub fn classify_file(
    database: &Database,
    entry: &IndexEntry,
    parent: Option<&Commit>,
) -> Result<FileChange> {
    let content = database.parse_object_as_blob(&entry.oid)?.text();

    let Some(parent) = parent else {
        return Ok(FileChange::FirstCommit { content });
    };

    match parent.find_file(&entry.path) {
        None => Ok(FileChange::NewFile { content }),
        Some(parent_entry) => {
            let parent_content = database.parse_object_as_blob(&parent_entry.oid)?.text();

            Ok(FileChange::Modified {
                segments: line_diff(&parent_content, &content),
            })
        }
    }
}
