//! Data structures and algorithms
//!
//! - `diff`: line diffs and commit-to-parent classification
//! - `index`: staging index entries
//! - `log`: commit history traversal
//! - `objects`: stored object types (blob, commit) and their identifiers

pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
