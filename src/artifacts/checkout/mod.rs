//! Checkout state machine
//!
//! A checkout may only start from a clean state: the staging area must match
//! HEAD's snapshot and the working tree must match the staging area. Untracked
//! files do not block a checkout. A dirty state is terminal for the
//! invocation; the pending differences are reported and nothing is touched.

pub mod state;
