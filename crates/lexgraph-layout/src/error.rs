//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur while laying out a graph
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The underlying solver rejected the graph or options
    #[error("Layout solver error: {0}")]
    Solver(#[from] lexgraph_layered::LayeredError),
}
