//! Timeline command implementation.

use crate::cli::TimelineArgs;
use crate::commands::load_analysis;
use crate::error::Result;
use crate::output::Formatter;

use lexgraph_domain::date::chronology_violations;

/// Execute the timeline command: print the event list in extraction order
/// and flag events whose parsed dates disagree with it.
pub fn execute_timeline(args: TimelineArgs, formatter: &Formatter) -> Result<()> {
    let analysis = load_analysis(&args.file)?;

    println!("{}", formatter.format_events(&analysis.events)?);

    let violations = chronology_violations(&analysis.events);
    if !violations.is_empty() {
        let indices = violations
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Events out of chronological order at indices: {}",
                indices
            ))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_file;
    use crate::config::OutputFormat;

    #[test]
    fn test_timeline_command_runs() {
        let file = sample_file();
        let args = TimelineArgs {
            file: file.path().to_str().unwrap().to_string(),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_timeline(args, &formatter).is_ok());
    }
}
