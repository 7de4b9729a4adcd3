//! Domain data structures and algorithms
//!
//! - `branch`: branch names and revision parsing
//! - `checkout`: the clean/dirty checkout state machine
//! - `core`: tree copying shared by the commands
//! - `graph`: history edges handed to a renderer
//! - `merge`: common ancestor search and snapshot reconciliation
//! - `objects`: commit ids and commit metadata
//! - `status`: three-tree comparison

pub mod branch;
pub mod checkout;
pub mod core;
pub mod graph;
pub mod merge;
pub mod objects;
pub mod status;
