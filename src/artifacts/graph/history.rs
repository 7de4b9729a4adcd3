use crate::areas::repository::Repository;
use crate::areas::snapshots::CommitCache;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct GraphEdge {
    pub child: String,
    pub parent: String,
}

impl std::fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.child, self.parent)
    }
}

#[derive(new)]
pub struct HistoryGraph<'r> {
    repository: &'r Repository,
}

impl<'r> HistoryGraph<'r> {
    /// Reference edges first, then commit edges in breadth-first order
    pub fn edges(&self) -> anyhow::Result<Vec<GraphEdge>> {
        let refs = self.repository.refs().list_all_refs()?;
        let cache = CommitCache::new();

        let mut edges = Vec::new();
        let mut seen_edges = HashSet::new();
        let mut visited = HashSet::<CommitId>::new();
        let mut queue = VecDeque::new();

        for (name, commit_id) in &refs {
            Self::push_edge(
                &mut edges,
                &mut seen_edges,
                GraphEdge::new(name.clone(), commit_id.to_short_id()),
            );

            if visited.insert(commit_id.clone()) {
                queue.push_back(commit_id.clone());
            }
        }

        while let Some(commit_id) = queue.pop_front() {
            let parents = cache.get_or_load_parents(self.repository.snapshots(), &commit_id)?;

            for parent_id in parents {
                Self::push_edge(
                    &mut edges,
                    &mut seen_edges,
                    GraphEdge::new(commit_id.to_short_id(), parent_id.to_short_id()),
                );

                if visited.insert(parent_id.clone()) {
                    queue.push_back(parent_id);
                }
            }
        }

        Ok(edges)
    }

    fn push_edge(edges: &mut Vec<GraphEdge>, seen: &mut HashSet<GraphEdge>, edge: GraphEdge) {
        if seen.insert(edge.clone()) {
            edges.push(edge);
        }
    }
}
