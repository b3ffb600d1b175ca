//! Builder module - derive nodes and edges from an analysis result

use std::collections::HashMap;

use tracing::debug;

use lexgraph_domain::{CaseEvent, Contradiction, Severity};

use crate::entity::{classify_entity, entity_node_id};
use crate::types::{CaseGraph, DisplayFilters, EdgeKind, GraphEdge, GraphNode, NodePayload, Position};

/// Longest contradiction title shown on an edge label, in characters.
const EDGE_LABEL_MAX_CHARS: usize = 30;

/// Derive the complete node and edge lists for one analysis under the
/// active display filters.
///
/// Output order is fixed: event nodes in index order, then entity nodes in
/// first-appearance order; sequential edges, then contradiction edges, then
/// participation edges. Every position is the placeholder origin; layout
/// assigns real ones.
///
/// Out-of-range event ids inside a contradiction are not rejected: the
/// resulting edges reference node ids no node carries and the layout stage
/// skips them. Zero events produce an empty graph.
pub fn build_graph(
    events: &[CaseEvent],
    contradictions: &[Contradiction],
    filters: &DisplayFilters,
) -> CaseGraph {
    // Reverse index: event index → contradictions referencing it. Indices
    // beyond the event list accumulate here too; they simply never match a
    // node below.
    let mut contradictions_by_event: HashMap<usize, Vec<usize>> = HashMap::new();
    for (c_index, contradiction) in contradictions.iter().enumerate() {
        for &event_id in &contradiction.involved_event_ids {
            contradictions_by_event
                .entry(event_id)
                .or_default()
                .push(c_index);
        }
    }

    let mut nodes: Vec<GraphNode> = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        let involved: Vec<Contradiction> = contradictions_by_event
            .get(&index)
            .map(|ids| ids.iter().map(|&i| contradictions[i].clone()).collect())
            .unwrap_or_default();
        nodes.push(GraphNode {
            id: format!("event-{}", index),
            position: Position::ORIGIN,
            direction: filters.direction,
            payload: NodePayload::Event {
                index,
                event: event.clone(),
                contradictions: involved,
            },
        });
    }

    let mut edges: Vec<GraphEdge> = Vec::new();

    if filters.show_sequential_edges {
        for i in 0..events.len().saturating_sub(1) {
            edges.push(GraphEdge {
                id: format!("sequential-{}-{}", i, i + 1),
                source: format!("event-{}", i),
                target: format!("event-{}", i + 1),
                kind: EdgeKind::Sequential,
                label: None,
                animated: false,
            });
        }
    }

    for (c_index, contradiction) in contradictions.iter().enumerate() {
        let label = truncate_label(&contradiction.title);
        let ids = &contradiction.involved_event_ids;
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                edges.push(GraphEdge {
                    id: format!("contradiction-{}-{}-{}", c_index, ids[i], ids[j]),
                    source: format!("event-{}", ids[i]),
                    target: format!("event-{}", ids[j]),
                    kind: EdgeKind::Contradiction {
                        severity: contradiction.severity,
                    },
                    label: Some(label.clone()),
                    animated: contradiction.severity == Severity::High,
                });
            }
        }
    }

    if filters.show_entities {
        let threshold = filters.min_entity_appearances.max(1);

        // Name → every event index it appears in, duplicates preserved;
        // a separate list keeps first-appearance order.
        let mut appearance_order: Vec<&str> = Vec::new();
        let mut appearances: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, event) in events.iter().enumerate() {
            for name in &event.entities {
                appearances
                    .entry(name.as_str())
                    .or_insert_with(|| {
                        appearance_order.push(name.as_str());
                        Vec::new()
                    })
                    .push(index);
            }
        }

        for name in appearance_order {
            let indices = &appearances[name];
            let mut distinct = indices.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < threshold {
                continue;
            }

            let node_id = entity_node_id(name);
            nodes.push(GraphNode {
                id: node_id.clone(),
                position: Position::ORIGIN,
                direction: filters.direction,
                payload: NodePayload::Entity {
                    name: name.to_string(),
                    entity_kind: classify_entity(name),
                    event_indices: indices.clone(),
                },
            });
            for event_index in distinct {
                edges.push(GraphEdge {
                    id: format!("participation-{}-{}", node_id, event_index),
                    source: node_id.clone(),
                    target: format!("event-{}", event_index),
                    kind: EdgeKind::Participation,
                    label: None,
                    animated: false,
                });
            }
        }
    }

    debug!(
        "Built graph: {} nodes, {} edges ({} events, {} contradictions)",
        nodes.len(),
        edges.len(),
        events.len(),
        contradictions.len()
    );

    CaseGraph { nodes, edges }
}

/// Cap a contradiction title for use as an edge label. Character-based so
/// multi-byte Turkish text never splits mid-codepoint.
fn truncate_label(title: &str) -> String {
    if title.chars().count() <= EDGE_LABEL_MAX_CHARS {
        return title.to_string();
    }
    let mut label: String = title.chars().take(EDGE_LABEL_MAX_CHARS).collect();
    label.push('…');
    label
}
