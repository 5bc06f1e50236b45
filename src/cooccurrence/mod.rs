//! Co-occurrence counting between SKUs that share an order
//!
//! The computation is a straight pipeline over an in-memory list of order
//! lines:
//!
//! 1. [`SkuIndex::build`] assigns each distinct SKU a dense position in
//!    first-seen order.
//! 2. [`CooccurrenceMatrix::accumulate`] walks runs of lines sharing an order
//!    id and counts every ordered SKU pair in the run.
//! 3. [`rank_pairs`] reads the upper triangle, stable-sorts by count and keeps
//!    the requested number of pairs.
//!
//! Lines of one order must be adjacent in the input. [`validate_grouping`]
//! checks that precondition when the caller asks for it.

pub mod grouping;
pub mod index;
pub mod matrix;
pub mod ranker;

pub use grouping::validate_grouping;
pub use index::SkuIndex;
pub use matrix::{AccumulationStats, CooccurrenceMatrix};
pub use ranker::{generate_pairs, rank, rank_pairs, PairLimit, SkuPair};

/// One SKU line of an order: the first two cells of an input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub sku: String,
    pub order_id: String,
}

impl OrderLine {
    pub fn new(sku: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            order_id: order_id.into(),
        }
    }

    /// Build a line from raw cells, ignoring anything past the second column
    ///
    /// Returns `None` when the row has fewer than two cells.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
        match cells {
            [sku, order_id, ..] => Some(Self::new(sku.as_ref(), order_id.as_ref())),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn lines(pairs: &[(&str, &str)]) -> Vec<OrderLine> {
    pairs
        .iter()
        .map(|(sku, order)| OrderLine::new(*sku, *order))
        .collect()
}
