//! Delimited text files (CSV, TSV)

use super::atomic::write_atomically;
use super::{CellRef, Row, RowSink, RowSource};
use crate::cooccurrence::SkuPair;
use crate::error::{helpers, ErrorCode, ErrorExt, Result, SkuPairError};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Reads rows from a delimited text file
///
/// Rows may have any number of cells; the pipeline needs the first two.
/// Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
    delimiter: u8,
    has_headers: bool,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            has_headers: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip the first row as a header
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvRowSource {
    fn read_rows(&mut self) -> Result<Vec<Row>> {
        let file = File::open(&self.path).map_err(|e| {
            let code = helpers::read_code_for(&e);
            SkuPairError::read_with_code(code, "Could not open input", Some(self.path.clone()))
                .with_source(e)
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| SkuPairError::from(e).with_path(self.path.clone()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "Read input rows");
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes ranked pairs to a delimited text file, one pair per row, no header
#[derive(Debug, Clone)]
pub struct CsvRowSink {
    path: PathBuf,
    delimiter: u8,
}

impl CsvRowSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for CsvRowSink {
    fn write_pairs(&mut self, pairs: &[SkuPair]) -> Result<()> {
        let path = self.path.clone();
        let delimiter = self.delimiter;

        write_atomically(&path, |out| {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .has_headers(false)
                .from_writer(out);

            for (rank, pair) in pairs.iter().enumerate() {
                let row = rank + 1;
                let count = pair.count.to_string();
                writer
                    .write_record([pair.sku1.as_str(), pair.sku2.as_str(), count.as_str()])
                    .map_err(|e| {
                        SkuPairError::write_with_code(
                            ErrorCode::WRITE_ROW_FAILED,
                            format!("Could not write cells {}", CellRef::pair_row_range(row)),
                            Some(path.clone()),
                        )
                        .with_source(e)
                    })?;
                trace!(cell = %CellRef::new(0, row), sku1 = %pair.sku1, sku2 = %pair.sku2, count = pair.count, "Wrote pair");
            }

            writer.flush().to_write_error(ErrorCode::WRITE_ROW_FAILED, &path)
        })?;

        debug!(path = %self.path.display(), rows = pairs.len(), "Wrote output rows");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
