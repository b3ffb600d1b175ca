//! Solver orchestration: working graph, phase pipeline, output assembly

use std::collections::HashMap;

use tracing::debug;

use crate::error::LayeredError;
use crate::graph::LayeredGraph;
use crate::options::LayoutOptions;
use crate::{order, position, rank};

/// Final placement of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNode {
    /// Center x of the node's footprint.
    pub x: f64,

    /// Center y of the node's footprint.
    pub y: f64,

    /// Rank the node was assigned to.
    pub rank: usize,

    /// Position of the node within its rank.
    pub order: usize,
}

/// Result of a solve: center positions keyed by node id, plus the extent of
/// the whole drawing including margins.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredLayout {
    positions: HashMap<String, PlacedNode>,
    /// Total drawing width, margins included.
    pub width: f64,
    /// Total drawing height, margins included.
    pub height: f64,
}

impl LayeredLayout {
    /// Placement of a node, if it was part of the solved graph.
    pub fn position(&self, id: &str) -> Option<&PlacedNode> {
        self.positions.get(id)
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over all placements in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlacedNode)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), p))
    }
}

/// Dense working form of the input graph. Indices `0..real` are the
/// caller's nodes in insertion order; indices from `real` up are the
/// virtual nodes added by normalization (zero footprint, one per rank an
/// edge passes through).
pub(crate) struct WorkGraph {
    pub real: usize,
    pub adj: Vec<Vec<usize>>,
    pub rev: Vec<Vec<usize>>,
    pub ids: Vec<String>,
    pub widths: Vec<f64>,
    pub heights: Vec<f64>,
}

impl WorkGraph {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_virtual(&self, v: usize) -> bool {
        v >= self.real
    }
}

fn build_work_graph(input: &LayeredGraph) -> Result<WorkGraph, LayeredError> {
    let inner = input.inner();
    let n = inner.node_count();

    let mut ids = Vec::with_capacity(n);
    let mut widths = Vec::with_capacity(n);
    let mut heights = Vec::with_capacity(n);
    for index in inner.node_indices() {
        let slot = &inner[index];
        if !slot.width.is_finite()
            || !slot.height.is_finite()
            || slot.width < 0.0
            || slot.height < 0.0
        {
            return Err(LayeredError::InvalidFootprint(
                slot.id.clone(),
                slot.width,
                slot.height,
            ));
        }
        ids.push(slot.id.clone());
        widths.push(slot.width);
        heights.push(slot.height);
    }

    let mut adj = vec![Vec::new(); n];
    let mut rev = vec![Vec::new(); n];
    for edge in inner.edge_indices() {
        if let Some((from, to)) = inner.edge_endpoints(edge) {
            let (u, v) = (from.index(), to.index());
            if u == v {
                debug!("Ignoring self edge on '{}'", ids[u]);
                continue;
            }
            adj[u].push(v);
            rev[v].push(u);
        }
    }

    // Sort neighbor lists by node id so every later tie-break sees the
    // same order. Parallel edges stay as repeated entries.
    for list in adj.iter_mut().chain(rev.iter_mut()) {
        list.sort_by(|a, b| ids[*a].cmp(&ids[*b]));
    }

    Ok(WorkGraph {
        real: n,
        adj,
        rev,
        ids,
        widths,
        heights,
    })
}

/// Solve a layout: rank, normalize, minimize crossings, place.
///
/// An empty graph yields an empty layout with zero extent. The only
/// failures are nonsensical inputs (non-finite footprints or options).
pub fn solve(input: &LayeredGraph, options: &LayoutOptions) -> Result<LayeredLayout, LayeredError> {
    options.validate()?;

    if input.node_count() == 0 {
        return Ok(LayeredLayout {
            positions: HashMap::new(),
            width: 0.0,
            height: 0.0,
        });
    }

    let work = build_work_graph(input)?;
    let ranks = rank::assign_ranks(&work);
    let (work, mut buckets) = order::normalize(work, ranks);
    let crossings = order::minimize_crossings(&mut buckets, &work, options.max_sweeps);
    debug!(
        "Ordered {} nodes over {} ranks with {} crossings",
        work.len(),
        buckets.len(),
        crossings
    );

    let placed = position::assign(&work, &buckets, options);

    let mut positions = HashMap::with_capacity(work.real);
    for v in 0..work.real {
        positions.insert(
            work.ids[v].clone(),
            PlacedNode {
                x: placed.centers[v].0,
                y: placed.centers[v].1,
                rank: placed.ranks[v],
                order: placed.orders[v],
            },
        );
    }

    Ok(LayeredLayout {
        positions,
        width: placed.width,
        height: placed.height,
    })
}
