use crate::artifacts::status::status_info::StatusReport;
use crate::errors::WitError;

const DIRTY_HEADER: &str =
    "Your local changes to the following files would be overwritten by checkout:";
const DIRTY_FOOTER: &str = "Please commit your changes before you switch branches.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Clean,
    Dirty(StatusReport),
}

impl CheckoutState {
    pub fn from_status(report: StatusReport) -> Self {
        if report.is_clean() {
            CheckoutState::Clean
        } else {
            CheckoutState::Dirty(report)
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, CheckoutState::Clean)
    }

    /// Refuse to leave a dirty state, carrying the pending differences
    pub fn ensure_clean(self) -> anyhow::Result<()> {
        match self {
            CheckoutState::Clean => Ok(()),
            CheckoutState::Dirty(report) => {
                Err(WitError::DirtyWorkingTree(Box::new(report)).into())
            }
        }
    }

    /// Message shown to the user when the state blocks a checkout
    pub fn refusal_message(&self) -> Option<String> {
        match self {
            CheckoutState::Clean => None,
            CheckoutState::Dirty(report) => {
                Some(format!("{}\n{}{}", DIRTY_HEADER, report, DIRTY_FOOTER))
            }
        }
    }
}
