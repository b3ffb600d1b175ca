//! Graph command implementation.

use crate::cli::GraphArgs;
use crate::commands::load_analysis;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

use lexgraph_builder::build_graph;
use lexgraph_layout::layout_graph;

/// Execute the graph command: load, optionally sanitize, build, lay out,
/// print.
pub fn execute_graph(args: GraphArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analysis = load_analysis(&args.file)?;
    if !args.skip_sanitize {
        analysis.sanitize();
    }

    let filters = args.filters(&config.display.filters());
    let graph = build_graph(&analysis.events, &analysis.contradictions, &filters);
    let graph = layout_graph(graph, filters.direction)?;

    println!("{}", formatter.format_graph(&graph)?);
    Ok(())
}
