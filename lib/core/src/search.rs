// Dijkstra label-setting search
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

use crate::graph::GraphStore;
use crate::node::{Cost, NodeId, NodeIndex, NodeState};
use crate::path::{self, ShortestPath};
use crate::{Error, Result};

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop as soon as the target is settled instead of draining the frontier.
    pub stop_at_target: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { stop_at_target: true }
    }
}

/// Frontier entry. `seq` is the node's first-push position, so equal costs pop
/// in the order nodes became candidates.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    idx: NodeIndex,
    cost: u128,
    seq: u64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller cost, then earlier push, = higher priority
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable shortest-path searcher over one graph.
///
/// Search state lives here, one [`NodeState`] per node, never on the graph, so
/// any number of finders can share a store across threads. A finder's own
/// table is reset before each query; [`PathFinder::reset`] does it eagerly.
pub struct PathFinder<'g> {
    graph: &'g GraphStore,
    states: Vec<NodeState>,
    config: SearchConfig,
    dirty: bool,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'g GraphStore, config: SearchConfig) -> Self {
        Self {
            graph,
            states: vec![NodeState::default(); graph.node_count()],
            config,
            dirty: false,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Restore every node to cost infinity with an empty chain. O(nodes).
    pub fn reset(&mut self) {
        self.states.iter_mut().for_each(NodeState::reset);
        self.dirty = false;
    }

    /// State recorded for `id` by the last query.
    pub fn state(&self, id: &NodeId) -> Option<&NodeState> {
        self.graph.index_of(id).map(|idx| &self.states[idx])
    }

    /// Ids from the last query's source up to, but excluding, `id`.
    pub fn predecessor_chain(&self, id: &NodeId) -> Option<Vec<NodeId>> {
        let idx = self.graph.index_of(id)?;
        Some(
            path::predecessor_chain(&self.states, idx)
                .into_iter()
                .map(|i| self.graph.node(i).id.clone())
                .collect(),
        )
    }

    #[inline]
    pub fn settled_count(&self) -> usize {
        self.states.iter().filter(|s| s.settled).count()
    }

    /// Cheapest route from `start` to `end`.
    pub fn find(&mut self, start: &NodeId, end: &NodeId) -> Result<ShortestPath> {
        let source = self
            .graph
            .index_of(start)
            .ok_or_else(|| Error::NodeNotFound(start.clone()))?;
        let target = self
            .graph
            .index_of(end)
            .ok_or_else(|| Error::NodeNotFound(end.clone()))?;

        if self.dirty {
            self.reset();
        }
        self.dirty = true;

        let settled = self.run(source, target);
        debug!(%start, %end, settled, "search finished");

        path::reconstruct(self.graph, &self.states, target).ok_or_else(|| Error::NoPathExists {
            start: start.clone(),
            end: end.clone(),
        })
    }

    /// Run Dijkstra from `source`, returning how many nodes were settled.
    fn run(&mut self, source: NodeIndex, target: NodeIndex) -> usize {
        let graph = self.graph;
        let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut next_seq = 0u64;
        let mut settled = 0usize;

        self.states[source].cost = Cost::ZERO;
        self.states[source].order = Some(next_seq);
        frontier.push(Candidate { idx: source, cost: 0, seq: next_seq });

        while let Some(Candidate { idx, cost, .. }) = frontier.pop() {
            let state = &mut self.states[idx];
            // Stale entry: settled already, or superseded by a cheaper push
            if state.settled || Cost::Finite(cost) > state.cost {
                continue;
            }
            state.settled = true;
            settled += 1;

            if self.config.stop_at_target && idx == target {
                break;
            }

            for edge in graph.edges(idx) {
                let next = &mut self.states[edge.target];
                if next.settled {
                    continue;
                }
                let Cost::Finite(candidate) = Cost::Finite(cost).extend(edge.weight) else {
                    continue;
                };
                if Cost::Finite(candidate) < next.cost {
                    trace!(from = idx, to = edge.target, cost = candidate, "relaxed");
                    next.cost = Cost::Finite(candidate);
                    next.predecessor = Some(idx);
                    let seq = *next.order.get_or_insert_with(|| {
                        next_seq += 1;
                        next_seq
                    });
                    frontier.push(Candidate {
                        idx: edge.target,
                        cost: candidate,
                        seq,
                    });
                }
            }
        }

        settled
    }
}

/// One-shot query with fresh, invocation-scoped state.
pub fn find_shortest_path(graph: &GraphStore, start: &NodeId, end: &NodeId) -> Result<ShortestPath> {
    PathFinder::new(graph).find(start, end)
}

/// Answer independent queries in parallel over one shared store.
///
/// Each query still runs single-threaded with its own state; results come back
/// in the order of `queries`.
pub fn find_many(
    graph: &GraphStore,
    queries: &[(NodeId, NodeId)],
    config: SearchConfig,
) -> Vec<Result<ShortestPath>> {
    queries
        .par_iter()
        .map_init(
            || PathFinder::with_config(graph, config),
            |finder, (start, end)| finder.find(start, end),
        )
        .collect()
}
