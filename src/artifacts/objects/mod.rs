//! Object types stored in the object database
//!
//! Every stored object is addressed by the SHA-1 digest of its serialized bytes.
//! There are two kinds:
//!
//! - **Blob**: raw file content, stored byte for byte
//! - **Commit**: a JSON record of a snapshot (timestamp, message, staged files, parent)

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated digest used for display
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
