//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the repository areas into the everyday
//! workflow and render their results.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `diff`: Show how a commit changed each of its files

pub mod add;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
