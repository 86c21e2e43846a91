//! Command implementations
//!
//! - `plumbing`: low-level commands for direct object manipulation (cat-file, hash-object)
//! - `porcelain`: user-facing commands (init, add, commit, log, diff)
//! - `shell`: line-oriented interactive front end dispatching to the commands above

pub mod plumbing;
pub mod porcelain;
pub mod shell;
