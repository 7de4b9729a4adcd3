//! Common ancestor search
//!
//! Two breadth-first walks, one from each side, record the depth at which
//! every ancestor is first reached. The candidates are the commits reached
//! from both sides; the winner is the candidate with the smallest combined
//! depth, ties going to the candidate met first by the walk rooted at HEAD.
//! Both histories are walked completely.
//!
//! Enable the `debug_merge` feature (or `WIT_LOG=wit::artifacts::merge=debug`)
//! to trace the walk.

use crate::artifacts::objects::commit_id::CommitId;
use bitflags::bitflags;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tracing::debug;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_HEAD = 0b01;
        const VISITED_FROM_OTHER = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_HEAD.bits() | Self::VISITED_FROM_OTHER.bits();
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_HEAD) {
            flags.push("HEAD");
        }
        if self.contains(VisitState::VISITED_FROM_OTHER) {
            flags.push("OTHER");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Per-commit record of a walk: visit flags plus first-reached depths
#[derive(Debug, Default)]
struct Visit {
    state: VisitState,
    head_depth: usize,
    other_depth: usize,
}

impl Default for VisitState {
    fn default() -> Self {
        VisitState::NONE
    }
}

/// Finds the nearest commit reachable from two commits
///
/// The parents loader maps a commit id to its parent ids (empty for a root),
/// so the search runs equally over the snapshot store or an in-memory graph.
pub struct AncestorFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&CommitId) -> anyhow::Result<Vec<CommitId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> AncestorFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&CommitId) -> anyhow::Result<Vec<CommitId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// The common ancestor of `head` and `other`, or `None` for disjoint histories
    ///
    /// A commit counts as its own ancestor, so a commit and its descendant
    /// resolve to the commit itself.
    pub fn find_common_ancestor(
        &self,
        head: &CommitId,
        other: &CommitId,
    ) -> anyhow::Result<Option<CommitId>> {
        if head == other {
            return Ok(Some(head.clone()));
        }

        let mut visits = HashMap::<CommitId, Visit>::new();

        let head_order = self.walk(head, &mut visits, VisitState::VISITED_FROM_HEAD)?;
        self.walk(other, &mut visits, VisitState::VISITED_FROM_OTHER)?;

        let best = head_order
            .iter()
            .enumerate()
            .filter_map(|(order, commit_id)| {
                let visit = visits.get(commit_id)?;
                visit
                    .state
                    .contains(VisitState::VISITED_FROM_BOTH)
                    .then(|| (visit.head_depth + visit.other_depth, order, commit_id))
            })
            .inspect(|(combined_depth, order, commit_id)| {
                debug!(
                    candidate = %commit_id,
                    combined_depth,
                    order,
                    "common ancestor candidate"
                );
            })
            .min_by_key(|(combined_depth, order, _)| (*combined_depth, *order))
            .map(|(_, _, commit_id)| commit_id.clone());

        match &best {
            Some(ancestor) => debug!(%head, %other, %ancestor, "common ancestor found"),
            None => debug!(%head, %other, "histories share no commit"),
        }

        Ok(best)
    }

    /// Breadth-first walk from `start`, tagging every reached commit with `side`
    ///
    /// Returns the commits in the order they were first reached.
    fn walk(
        &self,
        start: &CommitId,
        visits: &mut HashMap<CommitId, Visit>,
        side: VisitState,
    ) -> anyhow::Result<Vec<CommitId>> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([(start.clone(), 0usize)]);
        Self::mark(visits, start, side, 0);

        while let Some((commit_id, depth)) = queue.pop_front() {
            debug!(commit = %commit_id, depth, side = ?side, "visiting");
            order.push(commit_id.clone());

            for parent_id in (self.parents_loader)(&commit_id)? {
                let already_seen = visits
                    .get(&parent_id)
                    .is_some_and(|visit| visit.state.contains(side));

                if !already_seen {
                    Self::mark(visits, &parent_id, side, depth + 1);
                    queue.push_back((parent_id, depth + 1));
                }
            }
        }

        Ok(order)
    }

    fn mark(
        visits: &mut HashMap<CommitId, Visit>,
        commit_id: &CommitId,
        side: VisitState,
        depth: usize,
    ) {
        let visit = visits.entry(commit_id.clone()).or_default();
        visit.state |= side;

        if side == VisitState::VISITED_FROM_HEAD {
            visit.head_depth = depth;
        } else {
            visit.other_depth = depth;
        }
    }
}
