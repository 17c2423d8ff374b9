pub mod reader;
pub mod loader;

pub use reader::{parse_line, LoadOptions};
pub use loader::{load_graph, load_graph_with, read_graph};
