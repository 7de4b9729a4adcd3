//! Core repository components
//!
//! This module contains the state a repository is made of:
//!
//! - `lock`: Advisory repository lock held by mutating commands
//! - `refs`: Reference store (branches, HEAD, active-branch marker)
//! - `repository`: High-level repository operations and coordination
//! - `snapshots`: Snapshot store (one directory copy per commit)
//! - `staging`: Staging area (mirror of the files selected for the next commit)
//! - `workspace`: Working directory file system operations

pub mod lock;
pub mod refs;
pub mod repository;
pub mod snapshots;
pub mod staging;
pub mod workspace;
