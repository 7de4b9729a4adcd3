//! Commit metadata
//!
//! Every snapshot directory has a sibling `<id>.metadata` text file:
//!
//! ```text
//! parent=<id>[,<id>...]|none
//! date=<RFC 3339 timestamp>
//! message=<free text, may span lines>
//! ```
//!
//! The first parent is the commit `HEAD` pointed at when the commit was
//! created; any further parents are the branches merged in.

use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::WitError;
use chrono::{DateTime, FixedOffset};
use std::path::Path;

const NO_PARENT: &str = "none";
const PARENT_KEY: &str = "parent=";
const DATE_KEY: &str = "date=";
const MESSAGE_KEY: &str = "message=";

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "WIT_COMMIT_DATE";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parents: Vec<CommitId>,
    timestamp: DateTime<FixedOffset>,
    message: String,
}

impl Commit {
    pub fn new(parents: Vec<CommitId>, timestamp: DateTime<FixedOffset>, message: String) -> Self {
        Commit {
            parents,
            timestamp,
            message,
        }
    }

    /// Read the commit timestamp from `WIT_COMMIT_DATE`, falling back to now
    ///
    /// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn parents(&self) -> &[CommitId] {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn serialize(&self) -> String {
        let parents = if self.parents.is_empty() {
            NO_PARENT.to_string()
        } else {
            self.parents
                .iter()
                .map(|parent| parent.as_ref())
                .collect::<Vec<_>>()
                .join(",")
        };

        format!(
            "{PARENT_KEY}{}\n{DATE_KEY}{}\n{MESSAGE_KEY}{}\n",
            parents,
            self.timestamp.to_rfc3339(),
            self.message
        )
    }

    /// Parse the metadata file contents; `path` is only used in error reports
    pub fn deserialize(content: &str, path: &Path) -> anyhow::Result<Self> {
        let malformed = |reason: &str| WitError::MalformedMetadata {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        // the message is last and may contain newlines or '='
        let (header, message) = content
            .split_once(MESSAGE_KEY)
            .ok_or_else(|| malformed("missing message"))?;
        let message = message.strip_suffix('\n').unwrap_or(message).to_string();

        let mut parents = None;
        let mut timestamp = None;

        for line in header.lines().map(str::trim) {
            if let Some(value) = line.strip_prefix(PARENT_KEY) {
                parents = Some(Self::parse_parents(value.trim())?);
            } else if let Some(value) = line.strip_prefix(DATE_KEY) {
                timestamp = Some(
                    DateTime::parse_from_rfc3339(value.trim())
                        .map_err(|_| malformed("invalid date"))?,
                );
            }
        }

        Ok(Commit {
            parents: parents.ok_or_else(|| malformed("missing parent line"))?,
            timestamp: timestamp.ok_or_else(|| malformed("missing date line"))?,
            message,
        })
    }

    fn parse_parents(value: &str) -> anyhow::Result<Vec<CommitId>> {
        if value.is_empty() || value == NO_PARENT {
            return Ok(Vec::new());
        }

        value
            .split(',')
            .map(|parent| CommitId::try_parse(parent.trim().to_string()))
            .collect()
    }
}
