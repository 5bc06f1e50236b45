//! Process settings
//!
//! Verbosity and the directory that relative paths and `skupair.toml`
//! discovery are resolved against.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `-v` count
    pub verbose: u8,
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Settings for the current process directory
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self {
            verbose,
            working_dir,
        })
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// `EnvFilter` directive for the verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Anchor a relative path at the working directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.working_dir.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
        }
    }
}
