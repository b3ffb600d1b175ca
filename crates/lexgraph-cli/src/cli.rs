//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

use lexgraph_builder::{Direction, DisplayFilters};
use lexgraph_domain::Severity;

/// LexGraph CLI - Inspect and lay out legal-case analysis graphs.
#[derive(Debug, Parser)]
#[command(name = "lexgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build and lay out the case graph
    Graph(GraphArgs),

    /// Show the event timeline
    Timeline(TimelineArgs),

    /// Show detected contradictions
    Contradictions(ContradictionsArgs),

    /// Show the chat-assistant grounding context
    Context(ContextArgs),
}

/// Layout direction argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DirectionArg {
    /// Top to bottom
    Tb,
    /// Left to right
    Lr,
}

/// Arguments for the graph command.
#[derive(Debug, Parser)]
pub struct GraphArgs {
    /// Analysis result JSON file
    pub file: String,

    /// Layout direction
    #[arg(short, long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Include entity nodes and participation edges
    #[arg(long, overrides_with = "no_entities")]
    pub entities: bool,

    /// Exclude entity nodes and participation edges
    #[arg(long, overrides_with = "entities")]
    pub no_entities: bool,

    /// Include sequential edges between consecutive events
    #[arg(long, overrides_with = "no_sequential")]
    pub sequential: bool,

    /// Exclude sequential edges
    #[arg(long, overrides_with = "sequential")]
    pub no_sequential: bool,

    /// Minimum distinct events an entity must appear in
    #[arg(short, long)]
    pub min_appearances: Option<usize>,

    /// Use the analysis data exactly as loaded, without repairing
    /// out-of-range references or stale totals
    #[arg(long)]
    pub skip_sanitize: bool,
}

impl GraphArgs {
    /// Resolve the effective display filters: explicit flags win, the
    /// config-supplied defaults fill the gaps.
    pub fn filters(&self, defaults: &DisplayFilters) -> DisplayFilters {
        DisplayFilters {
            direction: self.direction.map(Into::into).unwrap_or(defaults.direction),
            show_entities: resolve_toggle(self.entities, self.no_entities, defaults.show_entities),
            show_sequential_edges: resolve_toggle(
                self.sequential,
                self.no_sequential,
                defaults.show_sequential_edges,
            ),
            min_entity_appearances: self
                .min_appearances
                .unwrap_or(defaults.min_entity_appearances),
        }
    }
}

fn resolve_toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

/// Arguments for the timeline command.
#[derive(Debug, Parser)]
pub struct TimelineArgs {
    /// Analysis result JSON file
    pub file: String,
}

/// Arguments for the contradictions command.
#[derive(Debug, Parser)]
pub struct ContradictionsArgs {
    /// Analysis result JSON file
    pub file: String,

    /// Only show contradictions at or above this severity
    #[arg(short, long)]
    pub min_severity: Option<Severity>,
}

/// Arguments for the context command.
#[derive(Debug, Parser)]
pub struct ContextArgs {
    /// Analysis result JSON file
    pub file: String,

    /// Resolve [Olay #N] citations in this saved answer file instead of
    /// printing the context block
    #[arg(long)]
    pub cite: Option<String>,
}

impl From<DirectionArg> for Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Tb => Direction::TopToBottom,
            DirectionArg::Lr => Direction::LeftToRight,
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_graph_command_parsing() {
        let cli = Cli::parse_from([
            "lexgraph",
            "graph",
            "analysis.json",
            "--direction",
            "lr",
            "--no-entities",
            "--min-appearances",
            "3",
        ]);
        match cli.command {
            Command::Graph(args) => {
                assert_eq!(args.file, "analysis.json");
                assert!(matches!(args.direction, Some(DirectionArg::Lr)));
                assert!(args.no_entities);
                assert_eq!(args.min_appearances, Some(3));
            }
            _ => panic!("Expected Graph command"),
        }
    }

    #[test]
    fn test_filters_flags_override_defaults() {
        let cli = Cli::parse_from(["lexgraph", "graph", "a.json", "--no-entities"]);
        let args = match cli.command {
            Command::Graph(args) => args,
            _ => panic!("Expected Graph command"),
        };
        let filters = args.filters(&DisplayFilters::default());
        assert!(!filters.show_entities);
        assert!(filters.show_sequential_edges);
        assert_eq!(filters.direction, Direction::TopToBottom);
    }

    #[test]
    fn test_filters_fall_back_to_defaults() {
        let cli = Cli::parse_from(["lexgraph", "graph", "a.json"]);
        let args = match cli.command {
            Command::Graph(args) => args,
            _ => panic!("Expected Graph command"),
        };
        let defaults = DisplayFilters {
            direction: Direction::LeftToRight,
            show_entities: false,
            show_sequential_edges: true,
            min_entity_appearances: 4,
        };
        assert_eq!(args.filters(&defaults), defaults);
    }

    #[test]
    fn test_min_severity_parsing() {
        let cli = Cli::parse_from([
            "lexgraph",
            "contradictions",
            "a.json",
            "--min-severity",
            "high",
        ]);
        match cli.command {
            Command::Contradictions(args) => {
                assert_eq!(args.min_severity, Some(Severity::High));
            }
            _ => panic!("Expected Contradictions command"),
        }
    }

    #[test]
    fn test_direction_conversion() {
        let direction: Direction = DirectionArg::Lr.into();
        assert_eq!(direction, Direction::LeftToRight);
    }
}
