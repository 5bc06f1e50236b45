//! Tabular input and output
//!
//! The co-occurrence core never touches files. It reads order lines through
//! a [`RowSource`] and hands ranked pairs to a [`RowSink`]. File-backed
//! implementations live in [`delimited`] and [`json`]; [`memory`] holds in-memory
//! ones for library callers and tests.
//!
//! A source must yield the lines of one order next to each other. Nothing
//! here reorders rows.

pub mod atomic;
pub mod cell;
pub mod delimited;
pub mod json;
pub mod memory;

pub use cell::CellRef;
pub use delimited::{CsvRowSink, CsvRowSource};
pub use json::JsonRowSink;
pub use memory::{MemoryRowSink, MemoryRowSource};

use crate::cooccurrence::{OrderLine, SkuPair};
use crate::error::{ErrorCode, Result, SkuPairError};

/// A row of cells as text
pub type Row = Vec<String>;

/// Supplies input rows in their original order
pub trait RowSource {
    /// Read every row; column 0 is the SKU id, column 1 the order id
    fn read_rows(&mut self) -> Result<Vec<Row>>;

    /// Short human-readable name used in logs and error messages
    fn describe(&self) -> String;

    /// Read every row as an order line
    ///
    /// Fails on the first row with fewer than two cells, naming its 1-based
    /// position.
    fn read_lines(&mut self) -> Result<Vec<OrderLine>> {
        let rows = self.read_rows()?;
        rows.iter()
            .enumerate()
            .map(|(position, row)| {
                OrderLine::from_cells(row).ok_or_else(|| {
                    SkuPairError::read_with_code(
                        ErrorCode::READ_MALFORMED_ROW,
                        format!(
                            "Row {} of {} has {} cell(s), expected at least 2",
                            position + 1,
                            self.describe(),
                            row.len()
                        ),
                        None,
                    )
                })
            })
            .collect()
    }
}

/// Receives ranked pairs, one output row per pair
///
/// Row `n` (1-based) holds the pair ranked `n` with columns A, B, C set to
/// `sku1`, `sku2` and `count`. An implementation either writes every row or
/// leaves the destination untouched.
pub trait RowSink {
    fn write_pairs(&mut self, pairs: &[SkuPair]) -> Result<()>;

    fn describe(&self) -> String;
}

impl<T: RowSource + ?Sized> RowSource for Box<T> {
    fn read_rows(&mut self) -> Result<Vec<Row>> {
        (**self).read_rows()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: RowSink + ?Sized> RowSink for Box<T> {
    fn write_pairs(&mut self, pairs: &[SkuPair]) -> Result<()> {
        (**self).write_pairs(pairs)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
