//! Engine module - solver invocation and coordinate remapping

use tracing::debug;

use lexgraph_builder::{CaseGraph, Direction, Position};
use lexgraph_layered::{solve, LayeredGraph, LayoutOptions, RankAlign, RankDir};

use crate::error::LayoutError;
use crate::footprint::footprint;

/// Spacing profile per direction.
///
/// The asymmetry is intentional: entities stacked within a rank need less
/// lateral room top-to-bottom (70) than the label-bearing horizontal
/// stacking does left-to-right would suggest, while left-to-right rank gaps
/// (220) must absorb the full card width where top-to-bottom gaps (130)
/// only absorb its height.
fn options_for(direction: Direction) -> LayoutOptions {
    let (rank_dir, node_sep, rank_sep) = match direction {
        Direction::TopToBottom => (RankDir::TopBottom, 70.0, 130.0),
        Direction::LeftToRight => (RankDir::LeftRight, 50.0, 220.0),
    };
    LayoutOptions {
        rank_dir,
        node_sep,
        rank_sep,
        edge_sep: 40.0,
        margin_x: 60.0,
        margin_y: 60.0,
        align: RankAlign::UpperLeft,
        ..Default::default()
    }
}

/// Assign a concrete position to every node of the graph.
///
/// Nodes register with the solver under their kind's footprint, edges under
/// their own ids so parallel edges survive, and the solver runs once for
/// the whole graph. The solver reports box centers; they are remapped to
/// top-left corners using the same footprint table before being written
/// back. Edges come back untouched.
///
/// An empty graph is returned as-is without touching the solver. A node
/// the solver did not place keeps its placeholder position; an edge whose
/// endpoint matches no node is skipped by the solver and survives in the
/// output unchanged.
pub fn layout_graph(mut graph: CaseGraph, direction: Direction) -> Result<CaseGraph, LayoutError> {
    if graph.nodes.is_empty() {
        return Ok(graph);
    }

    let mut solver_graph = LayeredGraph::new();
    for node in &graph.nodes {
        let (width, height) = footprint(node.kind());
        solver_graph.add_node(&node.id, width, height);
    }
    for edge in &graph.edges {
        solver_graph.add_edge(&edge.id, &edge.source, &edge.target);
    }
    if !solver_graph.skipped_edges().is_empty() {
        debug!(
            "{} edges reference missing nodes and were not laid out",
            solver_graph.skipped_edges().len()
        );
    }

    let layout = solve(&solver_graph, &options_for(direction))?;
    debug!(
        "Laid out {} nodes in a {:.0}x{:.0} drawing",
        layout.len(),
        layout.width,
        layout.height
    );

    for node in &mut graph.nodes {
        if let Some(placed) = layout.position(&node.id) {
            let (width, height) = footprint(node.kind());
            node.position = Position {
                x: placed.x - width / 2.0,
                y: placed.y - height / 2.0,
            };
        }
    }

    Ok(graph)
}
