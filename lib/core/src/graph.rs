// Adjacency-list graph store keyed by node id
use ahash::AHashMap;
use std::fmt;

use crate::node::{Node, NodeId, NodeIndex};
use crate::{Error, Result};

/// A directed, weighted arc. The target is an index into the owning store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: u64,
}

/// One input declaration.
///
/// Edge weights are signed here so that a negative value can be reported as
/// such instead of failing as an unparseable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Node(NodeId),
    Edge { from: NodeId, to: NodeId, weight: i64 },
}

/// Graph built once from records and read-only afterwards.
///
/// Nodes live in a dense arena; `index` maps an id to its slot so lookups are
/// expected O(1). `adjacency[i]` holds the outgoing edges of `nodes[i]` in
/// insertion order, parallel edges and self-loops included.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    index: AHashMap<NodeId, NodeIndex>,
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl GraphStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.apply(record)?;
        }
        Ok(graph)
    }

    /// Apply a single record. A negative edge weight leaves the store untouched.
    pub fn apply(&mut self, record: Record) -> Result<()> {
        match record {
            Record::Node(id) => {
                self.add_node(id);
            }
            Record::Edge { from, to, weight } => {
                let weight = match u64::try_from(weight) {
                    Ok(w) => w,
                    Err(_) => return Err(Error::NegativeWeight { from, to, weight }),
                };
                self.add_edge(from, to, weight);
            }
        }
        Ok(())
    }

    /// Declare a node, returning its index. Declaring an existing id is a no-op.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id));
        self.adjacency.push(Vec::new());
        idx
    }

    /// Append `from -> to` with `weight`, creating either endpoint if needed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: u64) -> (NodeIndex, NodeIndex) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        self.adjacency[from_idx].push(Edge { target: to_idx, weight });
        self.edge_count += 1;
        (from_idx, to_idx)
    }

    #[inline]
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    #[inline]
    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    #[inline]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Node at `idx`. Panics on an index not produced by this store.
    #[inline]
    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub fn edges(&self, idx: NodeIndex) -> &[Edge] {
        &self.adjacency[idx]
    }

    pub fn edges_of(&self, id: &NodeId) -> Option<&[Edge]> {
        self.index_of(id).map(|idx| self.edges(idx))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Adjacency listing, one node per block in declaration order.
impl fmt::Display for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in self.nodes.iter().zip(&self.adjacency) {
            writeln!(f, "N: {}", node.id)?;
            if edges.is_empty() {
                writeln!(f, "  (no neighbours)")?;
                continue;
            }
            let listing = edges
                .iter()
                .map(|e| format!("[{}] w({})", self.nodes[e.target].id, e.weight))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "  -> {}", listing)?;
        }
        Ok(())
    }
}
