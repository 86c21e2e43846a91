//! Diff algorithms and commit comparison
//!
//! - `diff_algorithm`: Myers' diff over arbitrary sequences
//! - `line_diff`: line-granularity text diff coalesced into segments
//! - `commit_diff`: classification of a commit's files against its parent
//!
//! A commit is compared file by file: each staged file is classified as part
//! of the first commit, as new relative to the parent, or as modified, in
//! which case its content is diffed line by line against the parent's copy.

pub mod commit_diff;
pub mod diff_algorithm;
pub mod line_diff;
