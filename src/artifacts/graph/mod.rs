//! History edges for visualization
//!
//! The graph is handed to a renderer as `(child, parent)` label pairs:
//! every reference name points at its commit's short id, then every commit
//! reachable from a reference points at each of its parents. Rendering is
//! not done here.

pub mod history;
