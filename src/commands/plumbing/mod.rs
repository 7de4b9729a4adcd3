//! Plumbing commands
//!
//! - `write-commit`: snapshot the staging area and advance the references
//! - `show-ref`: list every reference as `name=id`
//! - `cat-commit`: print a commit's metadata file

pub mod cat_commit;
pub mod show_ref;
mod write_commit;
