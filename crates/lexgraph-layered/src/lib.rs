//! LexGraph Layered Layout
//!
//! A small, deterministic layered ("Sugiyama-style") layout library for
//! directed multigraphs with rectangular nodes. It has no knowledge of the
//! legal domain; callers register nodes with footprints and edges under
//! unique ids, pick the options, and read back center-point positions.
//!
//! The pipeline:
//!   1. Rank assignment (Kahn order + longest path; cycles tolerated)
//!   2. Edge normalization (virtual nodes for edges spanning several ranks)
//!   3. Crossing minimization (iterated barycenter sweeps, best order kept)
//!   4. Coordinate assignment (cursor placement, rank alignment, margins)
//!
//! Identical input always produces identical output; every tie is broken by
//! node id or insertion order.
//!
//! ```
//! use lexgraph_layered::{solve, LayeredGraph, LayoutOptions};
//!
//! let mut graph = LayeredGraph::new();
//! graph.add_node("a", 100.0, 40.0);
//! graph.add_node("b", 100.0, 40.0);
//! graph.add_edge("a->b", "a", "b");
//!
//! let layout = solve(&graph, &LayoutOptions::default()).unwrap();
//! let a = layout.position("a").unwrap();
//! let b = layout.position("b").unwrap();
//! assert!(a.y < b.y);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod graph;
pub mod options;
mod order;
mod position;
mod rank;
mod solve;

pub use error::LayeredError;
pub use graph::LayeredGraph;
pub use options::{LayoutOptions, RankAlign, RankDir};
pub use solve::{solve, LayeredLayout, PlacedNode};
