//! HEAD reference
//!
//! `HEAD` is a plain text file holding the digest of the latest commit, or
//! nothing at all before the first commit. It is the only mutable pointer in
//! the repository.

use crate::areas::lockfile;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.lit`)
    path: Box<Path>,
}

impl Refs {
    /// Read the commit HEAD points to, `None` when there is no history yet
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        let content = lockfile::read_locked(&self.head_path())?.unwrap_or_default();
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Point HEAD at a new commit
    pub fn update_head(&self, oid: &ObjectId) -> Result<()> {
        lockfile::write_locked(&self.head_path(), oid.as_ref().as_bytes())?;
        tracing::debug!(head = %oid, "moved HEAD");

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }
}
