use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("No path exists from {start} to {end}")]
    NoPathExists { start: NodeId, end: NodeId },

    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: i64 },

    #[error("Parse error on line {line} ({content:?}): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the "target unreachable" outcome, which callers usually
    /// report as a normal answer rather than a failure.
    #[inline]
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPathExists { .. })
    }
}
