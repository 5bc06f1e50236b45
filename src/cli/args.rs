//! CLI argument structures

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Rank the SKU pairs that are most often bought together
#[derive(Parser, Debug)]
#[command(name = "skupair")]
#[command(about = "skupair - Rank the SKU pairs that are most often bought together", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Input file and/or number of pairs, e.g. `orders.csv 50` or just `50`
    #[arg(value_name = "INPUT|TOTAL", num_args = 0..=2)]
    pub positional: Vec<String>,

    /// Order log to read (column 1: SKU, column 2: order id)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Number of top pairs to write (default: 100)
    #[arg(short = 'n', long, value_name = "N")]
    pub total: Option<String>,

    /// Output file (default: "Sku-<timestamp>.<format>" in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input field delimiter (default: tab for .tsv, comma otherwise)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Treat the first input row as a header
    #[arg(long)]
    pub has_headers: bool,

    /// Fail if an order's rows are not adjacent in the input
    #[arg(long)]
    pub validate_grouping: bool,

    /// Path to configuration file (default: ./skupair.toml when present)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
