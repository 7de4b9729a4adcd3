//! Commit identifier
//!
//! Ids are 40 lowercase hexadecimal characters drawn from a random source.
//! Collisions are improbable but not impossible; the snapshot store redraws
//! when the directory for a fresh id already exists.

use crate::artifacts::objects::{COMMIT_ID_LENGTH, SHORT_ID_LENGTH};
use fake::rand;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if !Self::is_literal(&id) {
            anyhow::bail!("invalid commit id: {}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Whether `candidate` has the shape of a literal commit id
    ///
    /// Branch names are capped below this length, so a 40-character hex
    /// argument is never mistaken for a branch.
    pub fn is_literal(candidate: &str) -> bool {
        candidate.len() == COMMIT_ID_LENGTH && candidate.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Draw a fresh random id
    pub fn generate() -> Self {
        let bytes: [u8; COMMIT_ID_LENGTH / 2] = rand::random();

        Self(bytes.iter().map(|byte| format!("{:02x}", byte)).collect())
    }

    pub fn to_short_id(&self) -> String {
        self.0[..SHORT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
