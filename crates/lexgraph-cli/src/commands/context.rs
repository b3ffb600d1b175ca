//! Context command implementation.

use std::fs;

use crate::cli::ContextArgs;
use crate::commands::load_analysis;
use crate::error::Result;
use crate::output::Formatter;

use lexgraph_assist::{extract_citations, render_case_context};

/// Execute the context command: print the assistant grounding block, or
/// resolve citations in a saved answer against the analysis.
pub fn execute_context(args: ContextArgs, formatter: &Formatter) -> Result<()> {
    let analysis = load_analysis(&args.file)?;

    match args.cite {
        Some(answer_path) => {
            let answer = fs::read_to_string(&answer_path)?;
            let citations = extract_citations(&answer, analysis.events.len());
            println!("{}", formatter.format_citations(&citations)?);
        }
        None => {
            println!("{}", render_case_context(&analysis));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::sample_file;
    use crate::config::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_context_command_runs() {
        let file = sample_file();
        let args = ContextArgs {
            file: file.path().to_str().unwrap().to_string(),
            cite: None,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(execute_context(args, &formatter).is_ok());
    }

    #[test]
    fn test_cite_resolves_against_analysis() {
        let file = sample_file();
        let mut answer = tempfile::NamedTempFile::new().unwrap();
        answer
            .write_all("Gerekçe [Olay #1] ve [Olay #3] üzerindedir.".as_bytes())
            .unwrap();
        let args = ContextArgs {
            file: file.path().to_str().unwrap().to_string(),
            cite: Some(answer.path().to_str().unwrap().to_string()),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_context(args, &formatter).is_ok());
    }
}
