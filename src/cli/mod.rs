//! CLI handling
//!
//! Turns parsed arguments into a [`RunConfig`], wires up the file source and
//! sink and runs the pipeline.

pub mod args;

pub use args::Cli;

use crate::app::AppConfig;
use crate::config::{delimiter_for_path, ConfigFile, OutputFormat, Overrides, RunConfig};
use crate::io::{CsvRowSink, CsvRowSource, JsonRowSink, RowSink};
use crate::pipeline::{self, PipelineOptions, RunSummary};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions recognised as an input file in positional arguments
const TABULAR_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Input and total as given positionally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positionals {
    pub input: Option<PathBuf>,
    pub total: Option<String>,
}

/// Sort out `[INPUT] [TOTAL]`
///
/// A single argument is the input when it has a tabular extension and the
/// total otherwise. With two, the first is the input if it looks like one
/// and the second is always the total.
pub fn resolve_positionals(args: &[String]) -> Positionals {
    match args {
        [] => Positionals::default(),
        [only] if is_tabular_path(only) => Positionals {
            input: Some(PathBuf::from(only)),
            total: None,
        },
        [only] => Positionals {
            input: None,
            total: Some(only.clone()),
        },
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                warn!(ignored = ?rest, "ignoring extra arguments");
            }
            let input = if is_tabular_path(first) {
                Some(PathBuf::from(first))
            } else {
                warn!(argument = %first, "not an input file, ignoring");
                None
            };
            Positionals {
                input,
                total: Some(second.clone()),
            }
        }
    }
}

fn is_tabular_path(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            TABULAR_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

impl Cli {
    /// Command-line layer of the configuration; flags win over positionals
    pub fn overrides(&self) -> Overrides {
        let positionals = resolve_positionals(&self.positional);
        Overrides {
            input: self.input.clone().or(positionals.input),
            output: self.output.clone(),
            total: self.total.clone().or(positionals.total),
            format: self.format,
            delimiter: self.delimiter,
            has_headers: self.has_headers.then_some(true),
            validate_grouping: self.validate_grouping.then_some(true),
        }
    }
}

/// Resolve configuration from every layer
pub fn resolve_config(cli: &Cli, app: &AppConfig) -> Result<RunConfig> {
    let explicit = cli.config.as_deref().map(|path| app.resolve_path(path));
    let file = ConfigFile::discover(explicit.as_deref(), &app.working_dir)?;
    let env = |key: &str| std::env::var(key).ok();
    let config = RunConfig::resolve(file.as_ref(), env, &cli.overrides())?;
    debug!(?config, "Resolved run configuration");
    Ok(config)
}

/// Run the whole job for parsed arguments
pub fn execute(cli: &Cli, app: &AppConfig) -> Result<RunSummary> {
    let config = resolve_config(cli, app)?;

    let output = app.resolve_path(&config.output_path(chrono::Local::now()));
    let input = app.resolve_path(&config.input);

    let mut source = CsvRowSource::new(&input)
        .with_delimiter(config.input_delimiter())
        .with_headers(config.has_headers);
    let mut sink: Box<dyn RowSink> = match config.format {
        OutputFormat::Csv => {
            Box::new(CsvRowSink::new(&output).with_delimiter(delimiter_for_path(&output)))
        }
        OutputFormat::Json => Box::new(JsonRowSink::new(&output)),
    };

    let options = PipelineOptions {
        limit: config.limit,
        validate_grouping: config.validate_grouping,
    };
    let summary = pipeline::run(&mut source, &mut sink, options)
        .with_context(|| format!("Failed to rank pairs from {}", input.display()))?;

    println!(
        "Wrote {} of {} pairs to {}",
        summary.pairs_written(),
        summary.pairs_available,
        output.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_path_is_input() {
        assert_eq!(
            resolve_positionals(&strings(&["orders.csv"])),
            Positionals {
                input: Some(PathBuf::from("orders.csv")),
                total: None,
            }
        );
        assert_eq!(
            resolve_positionals(&strings(&["ORDERS.TSV"])).input,
            Some(PathBuf::from("ORDERS.TSV"))
        );
    }

    #[test]
    fn test_single_non_path_is_total() {
        assert_eq!(
            resolve_positionals(&strings(&["50"])),
            Positionals {
                input: None,
                total: Some("50".to_string()),
            }
        );
        assert_eq!(
            resolve_positionals(&strings(&["orders.xlsx"])).total,
            Some("orders.xlsx".to_string())
        );
    }

    #[test]
    fn test_two_arguments() {
        assert_eq!(
            resolve_positionals(&strings(&["orders.csv", "7"])),
            Positionals {
                input: Some(PathBuf::from("orders.csv")),
                total: Some("7".to_string()),
            }
        );
        assert_eq!(
            resolve_positionals(&strings(&["whatever", "7"])),
            Positionals {
                input: None,
                total: Some("7".to_string()),
            }
        );
    }

    #[test]
    fn test_flags_win_over_positionals() {
        let cli = Cli::parse_from(["skupair", "a.csv", "5", "--input", "b.csv", "-n", "9"]);
        let overrides = cli.overrides();

        assert_eq!(overrides.input, Some(PathBuf::from("b.csv")));
        assert_eq!(overrides.total, Some("9".to_string()));
    }

    #[test]
    fn test_boolean_flags_only_override_when_set() {
        let cli = Cli::parse_from(["skupair"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.has_headers, None);
        assert_eq!(overrides.validate_grouping, None);

        let cli = Cli::parse_from(["skupair", "--has-headers", "--validate-grouping"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.has_headers, Some(true));
        assert_eq!(overrides.validate_grouping, Some(true));
    }

    #[test]
    fn test_negative_total_is_accepted_positionally() {
        let cli = Cli::parse_from(["skupair", "-3"]);
        assert_eq!(cli.overrides().total, Some("-3".to_string()));
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["skupair", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_execute_in_working_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("basket.csv"), "A,O1\nB,O1\n").unwrap();
        let app = AppConfig::default().with_working_dir(dir.path().to_path_buf());
        let cli = Cli::parse_from(["skupair", "basket.csv", "1", "-o", "pairs.csv"]);

        let summary = execute(&cli, &app).unwrap();

        assert_eq!(summary.pairs_written(), 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("pairs.csv")).unwrap(),
            "A,B,2\n"
        );
    }
}
