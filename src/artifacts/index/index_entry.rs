//! Index entry representation
//!
//! Each entry pairs a file path, relative to the repository root, with the
//! digest of the blob holding its content at the time it was added.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub path: PathBuf,
    /// SHA-1 digest of file content
    #[serde(rename = "hash")]
    pub oid: ObjectId,
}
