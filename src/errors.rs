//! Error kinds surfaced by the repository areas
//!
//! Areas return [`LitError`] so that callers walking history or diffing a
//! commit can tell a missing object apart from an I/O failure. Commands wrap
//! these into `anyhow::Error` with extra context.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LitError {
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object {oid} is corrupt: {reason}")]
    Corrupt { oid: ObjectId, reason: String },

    #[error("index {} is corrupt: {reason}", path.display())]
    CorruptIndex { path: PathBuf, reason: String },

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{} is outside the repository", .0.display())]
    OutsideRepository(PathBuf),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("aborting commit due to empty commit message")]
    EmptyMessage,
}

impl LitError {
    /// Wrap an I/O error, mapping `NotFound` to [`LitError::FileNotFound`]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => LitError::FileNotFound(path.to_path_buf()),
            _ => LitError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LitError::ObjectNotFound(_) | LitError::FileNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LitError>;
