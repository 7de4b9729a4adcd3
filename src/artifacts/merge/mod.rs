//! Merge engine
//!
//! - `ancestor_finder`: common ancestor search over the commit graph
//! - `merge_plan`: reconciliation of two snapshots against that ancestor
//!
//! Reconciliation is whole-entry and conflict-free: when both sides changed
//! the same path, HEAD's version is kept. Overlapping paths are reported so
//! the caller can log them.

pub mod ancestor_finder;
pub mod merge_plan;
