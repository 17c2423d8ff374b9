//! # PathX Core
//!
//! Core library for PathX shortest-path routing.
//!
//! This crate provides the graph structures and the search:
//!
//! - [`NodeId`] - Arbitrary-precision node identifier
//! - [`GraphStore`] - Adjacency-list graph with O(1) id lookup
//! - [`PathFinder`] - Dijkstra search with per-query state
//! - [`ShortestPath`] - Reconstructed route and its cost
//!
//! ## Example
//!
//! ```rust
//! use pathx_core::{find_shortest_path, GraphStore, NodeId, Record};
//!
//! let records = vec![
//!     Record::Edge { from: NodeId::from(1), to: NodeId::from(2), weight: 5 },
//!     Record::Edge { from: NodeId::from(2), to: NodeId::from(3), weight: 5 },
//!     Record::Edge { from: NodeId::from(1), to: NodeId::from(3), weight: 20 },
//! ];
//! let graph = GraphStore::from_records(records).unwrap();
//!
//! let route = find_shortest_path(&graph, &NodeId::from(1), &NodeId::from(3)).unwrap();
//! assert_eq!(route.cost, 10);
//! assert_eq!(route.to_string(), "1 -> 2 -> 3");
//! ```

pub mod error;
pub mod node;
pub mod graph;
pub mod path;
pub mod search;

pub use error::{Error, Result};
pub use node::{Cost, Node, NodeId, NodeIndex, NodeState, ParseNodeIdError};
pub use graph::{Edge, GraphStore, Record};
pub use path::ShortestPath;
pub use search::{find_many, find_shortest_path, PathFinder, SearchConfig};
