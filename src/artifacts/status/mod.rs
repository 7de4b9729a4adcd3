//! Working tree status inspection
//!
//! Status compares three trees: the snapshot of `HEAD`, the staging area and
//! the working tree. It never modifies any of them.
//!
//! ## Components
//!
//! - `file_change`: Labels for the reported entries
//! - `tree_compare`: Whole-file directory comparison
//! - `status_info`: Status collection and display

pub mod file_change;
pub mod status_info;
pub mod tree_compare;
