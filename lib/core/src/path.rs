// Route reconstruction from predecessor links
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::GraphStore;
use crate::node::{NodeId, NodeIndex, NodeState};

/// Result of a successful query: total cost and the ids visited from source
/// to target, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub cost: u128,
    pub path: Vec<NodeId>,
}

impl ShortestPath {
    /// Number of edges traversed.
    #[inline]
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Option<&NodeId> {
        self.path.first()
    }

    #[inline]
    pub fn end(&self) -> Option<&NodeId> {
        self.path.last()
    }
}

/// Renders the route as `a -> b -> c`.
impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Indices from the search source up to, but excluding, `target`.
pub fn predecessor_chain(states: &[NodeState], target: NodeIndex) -> Vec<NodeIndex> {
    let mut chain = Vec::new();
    let mut current = states[target].predecessor;
    while let Some(idx) = current {
        chain.push(idx);
        current = states[idx].predecessor;
    }
    chain.reverse();
    chain
}

/// Build the route for a settled `target`. Returns `None` when the target was
/// never settled, i.e. it is unreachable from the source.
pub fn reconstruct(graph: &GraphStore, states: &[NodeState], target: NodeIndex) -> Option<ShortestPath> {
    let state = &states[target];
    if !state.settled {
        return None;
    }
    let cost = state.cost.value()?;

    let mut path: Vec<NodeId> = predecessor_chain(states, target)
        .into_iter()
        .map(|idx| graph.node(idx).id.clone())
        .collect();
    path.push(graph.node(target).id.clone());

    Some(ShortestPath { cost, path })
}
