//! Optional TOML configuration file

use super::OutputFormat;
use crate::error::{ErrorCode, Result, SkuPairError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "skupair.toml";

/// `total` may be written as a number or a string; both go through the
/// lenient parse
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TotalSetting {
    Number(i64),
    Text(String),
}

/// Contents of `skupair.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub total: Option<TotalSetting>,
    pub format: Option<OutputFormat>,
    pub delimiter: Option<char>,
    pub has_headers: Option<bool>,
    pub validate_grouping: Option<bool>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_GENERIC
            };
            SkuPairError::config_with_code(
                code,
                format!("Could not read configuration file {}", path.display()),
            )
            .with_source(e)
        })?;

        let file = Self::parse(&content).map_err(|e| match e {
            SkuPairError::Config {
                code,
                message,
                source,
            } => SkuPairError::Config {
                code,
                message: format!("{} in {}", message, path.display()),
                source,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(file)
    }

    /// Load `explicit` if given, else `skupair.toml` under `working_dir` if it
    /// exists
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::load(path).map(Some),
            None => {
                let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}
