//! Content-addressed object database
//!
//! Objects live flat under `.lit/objects/<digest>`. The database is
//! append-only: an object is written once, under the digest of its bytes, and
//! never rewritten or removed. Storing content that is already present is a
//! no-op.

use crate::artifacts::diff::commit_diff::CommitDiff;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{LitError, Result};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Digest of the given content, without storing it
    pub fn hash(content: &[u8]) -> ObjectId {
        ObjectId::from_content(content)
    }

    /// Whether an object is stored under the given digest
    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Store raw content under its digest and return the digest
    pub fn put(&self, content: &[u8]) -> Result<ObjectId> {
        let object_id = Self::hash(content);

        // identical content always lands under the same digest
        if self.contains(&object_id) {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.write_object(&self.object_path(&object_id), content)?;
        tracing::debug!(oid = %object_id, bytes = content.len(), "stored object");

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        self.put(&object.serialize()?)
    }

    /// Load the raw bytes of an object
    pub fn get(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(LitError::ObjectNotFound(object_id.clone()))
            }
            Err(err) => Err(LitError::io(&object_path, err)),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        Blob::deserialize(object_id, self.get(object_id)?)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        Commit::deserialize(object_id, self.get(object_id)?)
    }

    /// Load an object for display
    ///
    /// The store does not tag objects with their kind, so anything that parses
    /// as a commit record is shown as a commit and everything else as a blob.
    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let content = self.get(object_id)?;

        match Commit::deserialize(object_id, content.clone()) {
            Ok(commit) => Ok(ObjectBox::Commit(Box::new(commit))),
            Err(_) => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(
                object_id, content,
            )?))),
        }
    }

    /// Walk the commit chain starting at the given commit
    pub fn rev_list(&self, start: Option<ObjectId>) -> RevList<'_> {
        RevList::new(self, start)
    }

    /// Classify every file of a commit against its parent
    pub fn commit_diff(&self, object_id: &ObjectId) -> Result<CommitDiff> {
        CommitDiff::load(self, object_id)
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let result = Self::write_and_rename(&temp_object_path, object_path, content);
        if result.is_err() {
            // a failed write must not leave a stray file among the objects
            if let Err(err) = std::fs::remove_file(&temp_object_path)
                && err.kind() != std::io::ErrorKind::NotFound
            {
                tracing::warn!(path = %temp_object_path.display(), %err, "unable to remove temp object");
            }
        }

        result
    }

    fn write_and_rename(temp_object_path: &Path, object_path: &Path, content: &[u8]) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)
            .map_err(|err| LitError::io(temp_object_path, err))?;

        file.write_all(content)
            .map_err(|err| LitError::io(temp_object_path, err))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(temp_object_path, object_path)
            .map_err(|err| LitError::io(object_path, err))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
