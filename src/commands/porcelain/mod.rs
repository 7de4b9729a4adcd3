//! Porcelain commands
//!
//! - `init`: create the repository layout
//! - `add`: stage files or directories
//! - `commit`: record the staging area as a new commit
//! - `status`: compare HEAD, the staging area and the working tree
//! - `checkout`: switch the working tree to a commit or branch
//! - `branch`: create or list branches
//! - `merge`: merge a branch into HEAD
//! - `graph`: print the history edges

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod graph;
pub mod init;
pub mod merge;
pub mod status;
