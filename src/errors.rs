//! Failure conditions surfaced by repository operations
//!
//! Commands return `anyhow::Result`; the variants below are the conditions a
//! caller may want to tell apart, recoverable with
//! `error.downcast_ref::<WitError>()`.

use crate::artifacts::status::status_info::StatusReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WitError {
    #[error("not a wit repository (or any of the parent directories): {0}")]
    NotARepository(PathBuf),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("the working tree has uncommitted changes")]
    DirtyWorkingTree(Box<StatusReport>),

    #[error("branch name is too long ({length} > {max} characters): {name}")]
    NameTooLong {
        name: String,
        length: usize,
        max: usize,
    },

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("no history yet: create a commit first")]
    NoHistory,

    #[error("branch {0} not found")]
    BranchNotFound(String),

    #[error("no common ancestor between {0} and {1}")]
    NoCommonAncestor(String, String),

    #[error("could not allocate a fresh commit id after {0} attempts")]
    ExhaustedIdSpace(usize),

    #[error("malformed commit metadata at {path}: {reason}")]
    MalformedMetadata { path: PathBuf, reason: String },

    #[error("path is outside the repository: {0}")]
    PathOutsideRepository(PathBuf),
}
