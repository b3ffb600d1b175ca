//! LexGraph Builder
//!
//! Derives the renderable graph from an analysis result: one node per
//! event, one node per sufficiently frequent entity, and sequential /
//! contradiction / participation edges between them, all under the active
//! display filters.
//!
//! [`build_graph`] is a pure function of its inputs. The same events,
//! contradictions, and filters always produce the same node and edge lists,
//! in the same order, with the same ids; nothing here does I/O or keeps
//! state between calls. Positions on the returned nodes are placeholders at
//! the origin until the layout crate assigns real ones.
//!
//! Contradictions referencing event indices that do not exist are tolerated:
//! their edges are still emitted and simply point at a node id no node
//! carries. Downstream layout skips such edges instead of failing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod entity;
pub mod types;

pub use builder::build_graph;
pub use entity::{classify_entity, entity_node_id, EntityKind};
pub use types::{
    CaseGraph, Direction, DisplayFilters, EdgeKind, GraphEdge, GraphNode, NodePayload, Position,
};
