//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lexgraph_assist::Citation;
use lexgraph_builder::{CaseGraph, EdgeKind};
use lexgraph_domain::{CaseEvent, Contradiction};
use lexgraph_layout::footprint;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a positioned case graph.
    pub fn format_graph(&self, graph: &CaseGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
            OutputFormat::Table => self.format_graph_table(graph),
            OutputFormat::Quiet => Ok(graph
                .nodes
                .iter()
                .map(|n| n.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_graph_table(&self, graph: &CaseGraph) -> Result<String> {
        if graph.nodes.is_empty() {
            return Ok(self.colorize("No nodes in graph.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "X", "Y", "Width", "Height"]);
        for node in &graph.nodes {
            let (width, height) = footprint(node.kind());
            builder.push_record([
                node.id.as_str(),
                node.kind(),
                &format!("{:.0}", node.position.x),
                &format!("{:.0}", node.position.y),
                &format!("{:.0}", width),
                &format!("{:.0}", height),
            ]);
        }
        let mut nodes_table = builder.build();
        nodes_table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Source", "Target", "Label"]);
        for edge in &graph.edges {
            let kind = match edge.kind {
                EdgeKind::Sequential => "sequential".to_string(),
                EdgeKind::Contradiction { severity } => {
                    format!("contradiction ({})", severity.as_str())
                }
                EdgeKind::Participation => "participation".to_string(),
            };
            builder.push_record([
                edge.id.as_str(),
                &kind,
                edge.source.as_str(),
                edge.target.as_str(),
                edge.label.as_deref().unwrap_or("-"),
            ]);
        }
        let mut edges_table = builder.build();
        edges_table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(format!(
            "{}\n{}\n\n{}\n{}",
            self.colorize("Nodes", "cyan"),
            nodes_table,
            self.colorize("Edges", "cyan"),
            edges_table
        ))
    }

    /// Format the event timeline.
    pub fn format_events(&self, events: &[CaseEvent]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            OutputFormat::Table => self.format_events_table(events),
            OutputFormat::Quiet => Ok((0..events.len())
                .map(|i| format!("event-{}", i))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_events_table(&self, events: &[CaseEvent]) -> Result<String> {
        if events.is_empty() {
            return Ok(self.colorize("No events found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Date", "Category", "Page", "Entities", "Description"]);
        for (index, event) in events.iter().enumerate() {
            let index = index.to_string();
            builder.push_record([
                index.as_str(),
                event.date.as_str(),
                event.category.as_str(),
                &event.source_page.to_string(),
                &event.entities.len().to_string(),
                &clip(&event.description, 60),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        Ok(table.to_string())
    }

    /// Format the contradiction list.
    pub fn format_contradictions(&self, contradictions: &[Contradiction]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(contradictions)?),
            OutputFormat::Table => self.format_contradictions_table(contradictions),
            OutputFormat::Quiet => Ok(contradictions
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_contradictions_table(&self, contradictions: &[Contradiction]) -> Result<String> {
        if contradictions.is_empty() {
            return Ok(self.colorize("No contradictions found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Severity", "Type", "Confidence", "Events", "Title"]);
        for contradiction in contradictions {
            let events = contradiction
                .involved_event_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_record([
                contradiction.severity.as_str(),
                contradiction.kind.as_str(),
                &format!("{:.2}", contradiction.confidence_score),
                &events,
                &clip(&contradiction.title, 50),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        Ok(table.to_string())
    }

    /// Format resolved citations from an answer.
    pub fn format_citations(&self, citations: &[Citation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = citations
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "number": c.number,
                            "event_index": c.event_index,
                            "span": { "start": c.span.0, "end": c.span.1 },
                            "dangling": c.is_dangling(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => self.format_citations_table(citations),
            OutputFormat::Quiet => Ok(citations
                .iter()
                .filter_map(|c| c.event_index)
                .map(|i| format!("event-{}", i))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_citations_table(&self, citations: &[Citation]) -> Result<String> {
        if citations.is_empty() {
            return Ok(self.colorize("No citations found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Marker", "Event", "Span", "Status"]);
        for citation in citations {
            let event = citation
                .event_index
                .map(|i| format!("event-{}", i))
                .unwrap_or_else(|| "-".to_string());
            let status = if citation.is_dangling() { "dangling" } else { "ok" };
            let marker = format!("[Olay #{}]", citation.number);
            builder.push_record([
                marker.as_str(),
                &event,
                &format!("{}..{}", citation.span.0, citation.span.1),
                status,
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Clip long free text for a table cell.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars).collect();
    clipped.push('…');
    clipped
}
