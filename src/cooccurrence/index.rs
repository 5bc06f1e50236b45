//! Dense SKU indexing

use super::OrderLine;
use std::collections::HashMap;

/// Bijection between distinct SKU ids and positions `0..len()`
///
/// Positions follow first-seen order in the input, so re-indexing the same
/// lines always yields the same positions and tie order in the ranking is
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct SkuIndex {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

impl SkuIndex {
    pub fn build(lines: &[OrderLine]) -> Self {
        let mut ids: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for line in lines {
            if !positions.contains_key(&line.sku) {
                positions.insert(line.sku.clone(), ids.len());
                ids.push(line.sku.clone());
            }
        }

        Self { ids, positions }
    }

    /// Number of distinct SKUs (`K`)
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, sku: &str) -> Option<usize> {
        self.positions.get(sku).copied()
    }

    pub fn sku(&self, position: usize) -> Option<&str> {
        self.ids.get(position).map(String::as_str)
    }

    /// SKU ids ordered by position
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
