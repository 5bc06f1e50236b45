//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding order logs for one test
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Write `rows` as a delimited file and return its path
    pub fn write_orders(&self, name: &str, rows: &[(&str, &str)], delimiter: char) -> PathBuf {
        let content: String = rows
            .iter()
            .map(|(sku, order)| format!("{sku}{delimiter}{order}\n"))
            .collect();
        self.write_file(name, &content)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.join(name)).unwrap()
    }

    /// Files in the workspace whose name starts with `prefix`
    pub fn files_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    /// The binary, run inside the workspace with no `SKUPAIR_*` variables
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("skupair").unwrap();
        cmd.current_dir(self.path())
            .env_remove("SKUPAIR_INPUT")
            .env_remove("SKUPAIR_OUTPUT")
            .env_remove("SKUPAIR_TOTAL")
            .env_remove("SKUPAIR_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// One order with two SKUs plus a singleton order
pub const TWO_ORDERS: &[(&str, &str)] = &[("S1", "O1"), ("S2", "O1"), ("S1", "O2")];

/// One order holding three SKUs
pub const ONE_BASKET: &[(&str, &str)] = &[("A", "O1"), ("B", "O1"), ("C", "O1")];
