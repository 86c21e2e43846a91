//! Commit history traversal
//!
//! - `rev_list`: lazy walk of the commit chain from a starting commit back to
//!   the first commit, following parent links
pub mod rev_list;
