//! Blob object
//!
//! Blobs store file content. They carry no metadata: the path lives in the
//! index entry that references the blob.
//!
//! ## Format
//!
//! On disk the blob is the raw content, so its digest equals the SHA-1 of the
//! file itself.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    /// Content decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(_object_id: &ObjectId, content: Bytes) -> Result<Self> {
        Ok(Blob::new(content))
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        self.text()
    }
}
