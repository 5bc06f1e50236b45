//! Spreadsheet-style cell addressing

use std::fmt;

/// A cell position: zero-based column, 1-based row
///
/// Displays as "A1", "C100", "AA7" and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub column: usize,
    pub row: usize,
}

impl CellRef {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Column letters for a zero-based column index (0 → "A", 26 → "AA")
    pub fn column_name(column: usize) -> String {
        let mut letters = Vec::new();
        let mut n = column + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }

    /// "A{row}:C{row}" for the three output columns of a pair row
    pub fn pair_row_range(row: usize) -> String {
        format!("{}:{}", Self::new(0, row), Self::new(2, row))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_name(self.column), self.row)
    }
}
