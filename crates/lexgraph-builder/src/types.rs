//! Types module - the graph document handed to layout and rendering

use serde::{Deserialize, Serialize};

use lexgraph_domain::{CaseEvent, Contradiction, Severity};

use crate::entity::EntityKind;

/// Direction in which the layout stacks ranks.
///
/// Threaded onto every node so a renderer knows which side its connection
/// handles face; the direction never changes which nodes or edges exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Ranks flow downward; chronology reads top to bottom.
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,

    /// Ranks flow rightward; chronology reads left to right.
    #[serde(rename = "LR")]
    LeftToRight,
}

/// The display toggles a viewer exposes, modeled as plain parameters so the
/// builder stays testable outside any UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFilters {
    /// Layout direction, threaded through to the nodes.
    pub direction: Direction,

    /// Whether entity nodes and participation edges are produced.
    pub show_entities: bool,

    /// Whether consecutive events are chained with sequential edges.
    pub show_sequential_edges: bool,

    /// Entities appearing in fewer distinct events than this are dropped
    /// entirely (node and edges). Values below 1 behave as 1.
    pub min_entity_appearances: usize,
}

impl Default for DisplayFilters {
    fn default() -> Self {
        Self {
            direction: Direction::TopToBottom,
            show_entities: true,
            show_sequential_edges: true,
            min_entity_appearances: 1,
        }
    }
}

/// A 2D position in display units, top-left corner of the node's box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// The placeholder position every node carries before layout.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };
}

/// One node of the case graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Identity, unique across the graph and stable across rebuilds:
    /// `event-{index}` for events, a name-derived id for entities.
    pub id: String,

    /// Top-left position in display units; the origin until layout runs.
    pub position: Position,

    /// Handle orientation hint for the renderer.
    pub direction: Direction,

    /// The domain payload behind the node.
    #[serde(flatten)]
    pub payload: NodePayload,
}

impl GraphNode {
    /// The node kind tag used for footprint lookup and styling.
    pub fn kind(&self) -> &'static str {
        match self.payload {
            NodePayload::Event { .. } => "event",
            NodePayload::Entity { .. } => "entity",
        }
    }
}

/// What a node wraps: an event or an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodePayload {
    /// One chronological event plus everything a renderer shows on its card.
    #[serde(rename_all = "camelCase")]
    Event {
        /// 0-based position in the event list; the event's identity.
        index: usize,

        /// The event itself.
        event: CaseEvent,

        /// Contradictions referencing this event. Empty when none do.
        contradictions: Vec<Contradiction>,
    },

    /// One unique participant name aggregated over the whole timeline.
    #[serde(rename_all = "camelCase")]
    Entity {
        /// The entity name exactly as extracted.
        name: String,

        /// Heuristic classification; display styling only.
        entity_kind: EntityKind,

        /// Every event index where the name appears, duplicates preserved
        /// when an event lists the name more than once.
        event_indices: Vec<usize>,
    },
}

/// One edge of the case graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Identity, unique across the graph including parallel edges.
    pub id: String,

    /// Source node id.
    pub source: String,

    /// Target node id.
    pub target: String,

    /// What the edge means, plus its styling payload.
    #[serde(flatten)]
    pub kind: EdgeKind,

    /// Short display label, present on contradiction edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Rendering hint: draw the edge animated/emphasized. Set on HIGH
    /// severity contradiction edges.
    pub animated: bool,
}

/// Edge kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EdgeKind {
    /// `event[i] → event[i+1]`, chaining the chronology.
    Sequential,

    /// Two events involved in the same contradiction.
    #[serde(rename_all = "camelCase")]
    Contradiction {
        /// Severity of the parent contradiction; drives edge color and
        /// emphasis in the renderer.
        severity: Severity,
    },

    /// `entity → event`: the entity appears in that event.
    Participation,
}

/// The complete graph document: what the builder emits and the layout
/// engine positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CaseGraph {
    /// Nodes: events first in index order, then entities in
    /// first-appearance order.
    pub nodes: Vec<GraphNode>,

    /// Edges: sequential, then contradiction, then participation.
    pub edges: Vec<GraphEdge>,
}
