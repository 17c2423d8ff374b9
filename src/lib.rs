//! # PathX
//!
//! Shortest weighted paths over directed edge-list graphs.
//!
//! PathX loads a whitespace-separated edge list (originally OSM road data) into
//! an in-memory adjacency store and answers point-to-point queries with
//! Dijkstra's algorithm. Node ids are arbitrary-precision integers.
//!
//! ## Input Format
//!
//! ```text
//! 316319897                  # declare an isolated node
//! 314180912 314180913 12     # directed edge with weight 12
//! ```
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! pathx data/osm-graph.dat 314180912 317370213
//! pathx data/osm-graph.dat 314180912 317370213 --format json
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use pathx::prelude::*;
//!
//! let graph = load_graph("data/osm-graph.dat").unwrap();
//! let start: NodeId = "314180912".parse().unwrap();
//! let end: NodeId = "317370213".parse().unwrap();
//!
//! match find_shortest_path(&graph, &start, &end) {
//!     Ok(route) => println!("{}\n{}", route.cost, route),
//!     Err(e) if e.is_no_path() => println!("No Path"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`pathx-core`](https://docs.rs/pathx-core) - Graph store, Dijkstra search, path reconstruction
//! - [`pathx-storage`](https://docs.rs/pathx-storage) - Edge-list file reader

// Re-export core types
pub use pathx_core::{
    find_many, find_shortest_path,
    Cost, Edge, GraphStore, Node, NodeId, NodeState, Record,
    PathFinder, SearchConfig, ShortestPath,
    Error, Result,
};

// Re-export storage
pub use pathx_storage::{load_graph, load_graph_with, read_graph, LoadOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        find_many, find_shortest_path,
        GraphStore, NodeId, Record,
        PathFinder, SearchConfig, ShortestPath,
        Error, Result,
        load_graph, load_graph_with, read_graph, LoadOptions,
    };
}
