//! Commit identifiers and commit metadata
//!
//! A commit is a snapshot directory under `.wit/images/<id>/` plus a sibling
//! `<id>.metadata` file. Identifiers are drawn at random, not derived from
//! content, so two identical trees committed twice get two distinct ids.

pub mod commit;
pub mod commit_id;

/// Length of a commit id in hexadecimal characters
pub const COMMIT_ID_LENGTH: usize = 40;

/// Length of the abbreviated id used in history pairs and messages
pub const SHORT_ID_LENGTH: usize = 6;
