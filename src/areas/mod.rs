//! Core repository components
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging area queuing files for the next commit
//! - `refs`: the HEAD pointer
//! - `repository`: the handle tying the areas together
//! - `workspace`: working directory file access
//! - `lockfile`: locked whole-document reads and writes shared by index and HEAD

pub mod database;
pub mod index;
pub(crate) mod lockfile;
pub mod refs;
pub mod repository;
pub mod workspace;
