//! Contradictions command implementation.

use crate::cli::ContradictionsArgs;
use crate::commands::load_analysis;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the contradictions command: sort by severity then confidence,
/// apply the severity floor, print.
pub fn execute_contradictions(args: ContradictionsArgs, formatter: &Formatter) -> Result<()> {
    let mut analysis = load_analysis(&args.file)?;
    analysis.sort_contradictions();

    let contradictions: Vec<_> = match args.min_severity {
        Some(floor) => analysis
            .contradictions
            .into_iter()
            .filter(|c| c.severity >= floor)
            .collect(),
        None => analysis.contradictions,
    };

    println!("{}", formatter.format_contradictions(&contradictions)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_file;
    use crate::config::OutputFormat;
    use lexgraph_domain::Severity;

    #[test]
    fn test_contradictions_command_runs() {
        let file = sample_file();
        let args = ContradictionsArgs {
            file: file.path().to_str().unwrap().to_string(),
            min_severity: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_contradictions(args, &formatter).is_ok());
    }

    #[test]
    fn test_severity_floor() {
        let file = sample_file();
        let args = ContradictionsArgs {
            file: file.path().to_str().unwrap().to_string(),
            min_severity: Some(Severity::High),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_contradictions(args, &formatter).is_ok());
    }
}
