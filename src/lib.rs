//! lit: a minimal local version-history engine
//!
//! Files are stored as content-addressed blobs, commits form a single linear
//! chain tracked by `HEAD`, and any commit can be diffed line by line against
//! its parent.
//!
//! - `areas`: on-disk repository state (object store, staging index, HEAD)
//! - `artifacts`: object types, history traversal and diff algorithms
//! - `commands`: user-facing operations and the interactive shell
//! - `errors`: error kinds reported by the repository areas

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
