//! In-memory sources and sinks

use super::{Row, RowSink, RowSource};
use crate::cooccurrence::SkuPair;
use crate::error::Result;

/// Serves a fixed list of rows
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<Row>,
}

impl MemoryRowSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn from_rows<S: Into<String>>(rows: Vec<Vec<S>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Two-column rows of `(sku, order_id)`
    pub fn from_lines(lines: &[(&str, &str)]) -> Self {
        Self::new(
            lines
                .iter()
                .map(|(sku, order)| vec![sku.to_string(), order.to_string()])
                .collect(),
        )
    }
}

impl RowSource for MemoryRowSource {
    fn read_rows(&mut self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Collects written pairs
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSink {
    pairs: Option<Vec<SkuPair>>,
}

impl MemoryRowSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs from the last write, `None` if nothing was written
    pub fn pairs(&self) -> Option<&[SkuPair]> {
        self.pairs.as_deref()
    }

    /// Output rows as `[A, B, C]` cell text
    pub fn rows(&self) -> Vec<[String; 3]> {
        self.pairs
            .iter()
            .flatten()
            .map(|p| [p.sku1.clone(), p.sku2.clone(), p.count.to_string()])
            .collect()
    }
}

impl RowSink for MemoryRowSink {
    fn write_pairs(&mut self, pairs: &[SkuPair]) -> Result<()> {
        self.pairs = Some(pairs.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
