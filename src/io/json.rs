//! JSON output

use super::atomic::write_atomically;
use super::RowSink;
use crate::cooccurrence::SkuPair;
use crate::error::{ErrorCode, Result, SkuPairError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes ranked pairs as a pretty-printed JSON array
///
/// Array element `n - 1` is output row `n`; each element has the fields
/// `sku1`, `sku2` and `count`.
#[derive(Debug, Clone)]
pub struct JsonRowSink {
    path: PathBuf,
}

impl JsonRowSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for JsonRowSink {
    fn write_pairs(&mut self, pairs: &[SkuPair]) -> Result<()> {
        write_atomically(&self.path, |out| {
            serde_json::to_writer_pretty(out, pairs).map_err(|e| {
                SkuPairError::write_with_code(
                    ErrorCode::WRITE_SERIALIZATION_ERROR,
                    "Could not serialize pairs",
                    Some(self.path.clone()),
                )
                .with_source(e)
            })
        })?;

        debug!(path = %self.path.display(), rows = pairs.len(), "Wrote JSON output");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
