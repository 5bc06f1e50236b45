//! Run configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults ([`RunConfig::default`])
//! 2. the TOML file ([`ConfigFile`])
//! 3. `SKUPAIR_*` environment variables
//! 4. command-line arguments ([`Overrides`])

pub mod file;
pub mod total;

pub use file::{ConfigFile, TotalSetting, DEFAULT_CONFIG_FILE};
pub use total::{default_limit, parse_total, DEFAULT_TOTAL};

use crate::cooccurrence::PairLimit;
use crate::error::{ErrorCode, Result, SkuPairError};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Input file used when none is configured
pub const DEFAULT_INPUT: &str = "order.csv";

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Command-line values; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub total: Option<String>,
    pub format: Option<OutputFormat>,
    pub delimiter: Option<char>,
    pub has_headers: Option<bool>,
    pub validate_grouping: Option<bool>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Destination; `None` means a timestamped name in the working directory
    pub output: Option<PathBuf>,
    pub limit: PairLimit,
    pub format: OutputFormat,
    /// Input delimiter; `None` picks from the input extension
    pub delimiter: Option<u8>,
    pub has_headers: bool,
    pub validate_grouping: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            limit: default_limit(),
            format: OutputFormat::Csv,
            delimiter: None,
            has_headers: false,
            validate_grouping: false,
        }
    }
}

impl RunConfig {
    /// Apply every layer on top of the defaults
    pub fn resolve<F>(file: Option<&ConfigFile>, env: F, overrides: &Overrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(file) = file {
            config.merge_file(file)?;
        }
        config.merge_env(env)?;
        config.merge_overrides(overrides)?;
        Ok(config)
    }

    pub fn merge_file(&mut self, file: &ConfigFile) -> Result<()> {
        if let Some(input) = &file.input {
            self.input = input.clone();
        }
        if let Some(output) = &file.output {
            self.output = Some(output.clone());
        }
        match &file.total {
            Some(TotalSetting::Number(n)) => self.limit = total::total_from_int(*n),
            Some(TotalSetting::Text(raw)) => self.limit = parse_total(raw),
            None => {}
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(delimiter) = file.delimiter {
            self.delimiter = Some(delimiter_byte(delimiter)?);
        }
        if let Some(has_headers) = file.has_headers {
            self.has_headers = has_headers;
        }
        if let Some(validate) = file.validate_grouping {
            self.validate_grouping = validate;
        }
        Ok(())
    }

    /// Merge `SKUPAIR_INPUT`, `SKUPAIR_OUTPUT`, `SKUPAIR_TOTAL` and
    /// `SKUPAIR_FORMAT` as reported by `lookup`
    pub fn merge_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("SKUPAIR_INPUT") {
            self.input = PathBuf::from(input);
        }
        if let Some(output) = lookup("SKUPAIR_OUTPUT") {
            self.output = Some(PathBuf::from(output));
        }
        if let Some(raw) = lookup("SKUPAIR_TOTAL") {
            self.limit = parse_total(&raw);
        }
        if let Some(raw) = lookup("SKUPAIR_FORMAT") {
            self.format = OutputFormat::parse(&raw).ok_or_else(|| {
                SkuPairError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("SKUPAIR_FORMAT must be csv or json, got '{}'", raw),
                )
            })?;
        }
        Ok(())
    }

    pub fn merge_overrides(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(input) = &overrides.input {
            self.input = input.clone();
        }
        if let Some(output) = &overrides.output {
            self.output = Some(output.clone());
        }
        if let Some(raw) = &overrides.total {
            self.limit = parse_total(raw);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(delimiter) = overrides.delimiter {
            self.delimiter = Some(delimiter_byte(delimiter)?);
        }
        if let Some(has_headers) = overrides.has_headers {
            self.has_headers = has_headers;
        }
        if let Some(validate) = overrides.validate_grouping {
            self.validate_grouping = validate;
        }
        Ok(())
    }

    /// Input delimiter, defaulting to tab for `.tsv` files and comma otherwise
    pub fn input_delimiter(&self) -> u8 {
        self.delimiter
            .unwrap_or_else(|| delimiter_for_path(&self.input))
    }

    /// Where output goes, naming it after `now` when no destination is set
    pub fn output_path(&self, now: chrono::DateTime<chrono::Local>) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(timestamped_output_name(now, self.format)),
        }
    }
}

/// `Sku-<YYYY-MM-DD HH-MM-SS>.<ext>`
pub fn timestamped_output_name(now: chrono::DateTime<chrono::Local>, format: OutputFormat) -> String {
    format!(
        "Sku-{}.{}",
        now.format("%Y-%m-%d %H-%M-%S"),
        format.extension()
    )
}

/// Tab for `.tsv`, comma for anything else
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(SkuPairError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Delimiter must be a single ASCII character, got '{}'", delimiter),
        ))
    }
}
