// Graph vertices: arbitrary-precision identifiers plus per-search state
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dense position of a node inside a [`GraphStore`](crate::GraphStore).
///
/// Edges and search state refer to nodes through this index, never by
/// owning the node itself.
pub type NodeIndex = usize;

/// External node identifier.
///
/// OSM ids routinely exceed 32 bits and nothing bounds them at 64, so the id is
/// kept as an unsigned big integer. Equality and hashing use the numeric value:
/// `007` and `7` name the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(BigUint);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNodeIdError {
    #[error("empty node id")]
    Empty,
    #[error("node id {0:?} is not a non-negative decimal integer")]
    InvalidDigit(String),
}

impl NodeId {
    #[inline]
    #[must_use]
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNodeIdError::Empty);
        }
        // BigUint alone would also accept a leading '+' and '_' separators
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNodeIdError::InvalidDigit(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| ParseNodeIdError::InvalidDigit(s.to_string()))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for NodeId {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

// Ids travel as decimal strings so JSON consumers never truncate them.
impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A vertex owned by the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }
}

/// Accumulated path cost. `Infinite` orders after every finite cost.
///
/// Finite costs are `u128`: a simple path has fewer than 2^64 edges of weight
/// below 2^64, so its total always fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Cost {
    Finite(u128),
    #[default]
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<u128> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Infinite => None,
        }
    }

    /// Extend this cost by an edge weight.
    #[inline]
    #[must_use]
    pub fn extend(self, weight: u64) -> Cost {
        match self {
            Cost::Finite(v) => Cost::Finite(v.saturating_add(u128::from(weight))),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{}", v),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// Transient per-node search state.
///
/// The predecessor chain is stored as a single back-link; the full chain from
/// the source is recovered by following links (see [`crate::path`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeState {
    pub cost: Cost,
    pub predecessor: Option<NodeIndex>,
    /// Position of the node's first entry into the frontier. Later pushes
    /// after a cost decrease keep it, so equal-cost ties favour the node that
    /// became a candidate first.
    pub order: Option<u64>,
    pub settled: bool,
}

impl NodeState {
    #[inline]
    pub fn reset(&mut self) {
        *self = NodeState::default();
    }
}
