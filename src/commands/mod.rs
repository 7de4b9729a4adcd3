//! Command implementations
//!
//! Every command is an `impl Repository` block, split in two groups:
//!
//! - `plumbing`: low-level building blocks (recording a commit, dumping
//!   references or commit metadata)
//! - `porcelain`: the user-facing workflow (init, add, commit, status,
//!   checkout, branch, merge, graph)
//!
//! Mutating commands hold the repository lock for their whole duration.

pub mod plumbing;
pub mod porcelain;
