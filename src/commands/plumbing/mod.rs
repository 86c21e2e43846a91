//! Plumbing commands (low-level operations)
//!
//! Plumbing commands give direct access to the object store and are mainly
//! useful for scripting and inspection.
//!
//! ## Commands
//!
//! - `cat-file`: Print a stored object
//! - `hash-object`: Compute object ID and optionally store in database

pub mod cat_file;
pub mod hash_object;
