use pathx_core::{Error, GraphStore, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::reader::{parse_line, LoadOptions};

/// Load a graph file with default options.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphStore> {
    load_graph_with(path, &LoadOptions::default())
}

pub fn load_graph_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<GraphStore> {
    let path = path.as_ref();
    debug!("Opening graph file {:?}", path);
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file), options)?;
    info!(
        "Loaded {:?}: {} nodes, {} edges",
        path,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Build a graph from any line source. The whole input is consumed; the first
/// malformed line aborts construction.
pub fn read_graph<R: BufRead>(reader: R, options: &LoadOptions) -> Result<GraphStore> {
    let mut graph = GraphStore::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let content = line?;
        let Some(record) = parse_line(line_no, &content, options)? else {
            continue;
        };
        graph.apply(record).map_err(|e| match e {
            Error::NegativeWeight { .. } => Error::Parse {
                line: line_no,
                content: content.clone(),
                reason: e.to_string(),
            },
            other => other,
        })?;
    }

    Ok(graph)
}
