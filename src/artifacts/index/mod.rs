//! Staging index file format
//!
//! The index stores the files queued for the next commit as a JSON array,
//! one object per `add`, in call order:
//!
//! ```text
//! [{"path":"f.txt","hash":"f572d396fae9206628714fb2ce00f72e94f2258f"}]
//! ```
//!
//! An empty index is written as `[]`.

pub mod index_entry;

/// Content of a freshly initialized or freshly cleared index
pub const EMPTY_INDEX: &str = "[]";
