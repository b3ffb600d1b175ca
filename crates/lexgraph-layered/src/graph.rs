//! Solver input: a directed multigraph with rectangular node footprints

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use tracing::debug;

pub(crate) struct NodeSlot {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

pub(crate) struct EdgeSlot {
    #[allow(dead_code)]
    pub id: String,
}

/// A directed multigraph under construction.
///
/// Nodes are keyed by caller-chosen string ids; edges carry their own ids
/// and parallel edges between the same endpoints stay distinct. Edges whose
/// endpoints were never registered are recorded and skipped rather than
/// rejected, since upstream data may legitimately contain dangling
/// references.
///
/// Nodes are never removed, so the underlying indices stay dense; the
/// solver depends on that.
pub struct LayeredGraph {
    graph: StableDiGraph<NodeSlot, EdgeSlot>,
    index_of: HashMap<String, NodeIndex>,
    skipped_edges: Vec<String>,
}

impl LayeredGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            index_of: HashMap::new(),
            skipped_edges: Vec::new(),
        }
    }

    /// Register a node with its footprint. Registering the same id again
    /// updates the footprint in place.
    pub fn add_node(&mut self, id: &str, width: f64, height: f64) {
        match self.index_of.get(id) {
            Some(&index) => {
                let slot = &mut self.graph[index];
                slot.width = width;
                slot.height = height;
            }
            None => {
                let index = self.graph.add_node(NodeSlot {
                    id: id.to_string(),
                    width,
                    height,
                });
                self.index_of.insert(id.to_string(), index);
            }
        }
    }

    /// Register a directed edge under its own id. Returns `false` (and
    /// records the edge as skipped) when either endpoint is unknown.
    pub fn add_edge(&mut self, edge_id: &str, source: &str, target: &str) -> bool {
        match (self.index_of.get(source), self.index_of.get(target)) {
            (Some(&from), Some(&to)) => {
                self.graph.add_edge(
                    from,
                    to,
                    EdgeSlot {
                        id: edge_id.to_string(),
                    },
                );
                true
            }
            _ => {
                debug!(
                    "Skipping edge '{}': unknown endpoint ({} -> {})",
                    edge_id, source, target
                );
                self.skipped_edges.push(edge_id.to_string());
                false
            }
        }
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of registered edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a node id has been registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index_of.contains_key(id)
    }

    /// Ids of edges that were skipped because an endpoint was unknown.
    pub fn skipped_edges(&self) -> &[String] {
        &self.skipped_edges
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<NodeSlot, EdgeSlot> {
        &self.graph
    }
}

impl Default for LayeredGraph {
    fn default() -> Self {
        Self::new()
    }
}
