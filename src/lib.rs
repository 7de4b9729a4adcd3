//! A minimal, single-user local version-control core.
//!
//! `wit` records full-copy snapshots of a working tree, links them into a
//! commit graph, tracks branches in a flat reference file and merges two
//! histories through their closest common ancestor.
//!
//! Invocations against the same repository must be serialized by the caller;
//! mutating commands additionally take an advisory repository lock.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
