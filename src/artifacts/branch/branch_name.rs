use crate::areas::refs::HEAD_REF_NAME;
use crate::artifacts::branch::{INVALID_BRANCH_NAME_REGEX, MAX_BRANCH_NAME_LENGTH};
use crate::errors::WitError;
use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let length = name.chars().count();
        if length > MAX_BRANCH_NAME_LENGTH {
            return Err(WitError::NameTooLong {
                name,
                length,
                max: MAX_BRANCH_NAME_LENGTH,
            }
            .into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) || name == HEAD_REF_NAME {
            Err(WitError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
