use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::WitError;

/// A checkout or merge target as typed by the user.
///
/// A 40-character hexadecimal argument is a literal commit id; anything else
/// names a reference. Branch names are capped at 39 characters, so the two
/// forms never overlap.
///
/// ```ignore
/// let rev = Revision::try_parse("feature")?; // Revision::Ref("feature")
/// let rev = Revision::try_parse("@")?;       // Revision::Ref("HEAD")
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Commit(CommitId),
    Ref(String),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Self> {
        let revision = revision.trim();

        if revision.is_empty() {
            anyhow::bail!("revision cannot be empty");
        }

        if let Some(alias) = REF_ALIASES.get(revision) {
            return Ok(Revision::Ref(alias.to_string()));
        }

        if CommitId::is_literal(revision) {
            Ok(Revision::Commit(CommitId::try_parse(revision.to_string())?))
        } else {
            Ok(Revision::Ref(revision.to_string()))
        }
    }

    /// Resolve to a commit id; literal ids are returned as-is and validated by the caller
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<CommitId> {
        match self {
            Revision::Commit(commit_id) => Ok(commit_id.clone()),
            Revision::Ref(name) => repository
                .refs()
                .read_ref(name)?
                .ok_or_else(|| WitError::BranchNotFound(name.clone()).into()),
        }
    }

    /// The branch this revision activates on checkout, if it names one
    pub fn branch_label(&self) -> Option<&str> {
        match self {
            Revision::Ref(name) if name != HEAD_REF_NAME => Some(name),
            _ => None,
        }
    }

    pub fn is_head(&self) -> bool {
        matches!(self, Revision::Ref(name) if name == HEAD_REF_NAME)
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Commit(commit_id) => write!(f, "{}", commit_id),
            Revision::Ref(name) => write!(f, "{}", name),
        }
    }
}
