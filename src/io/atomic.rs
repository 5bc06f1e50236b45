//! Write-then-rename file replacement

use crate::error::{ErrorCode, ErrorExt, Result};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `path` through a temporary file in the same directory
///
/// `fill` receives a buffered writer over the temporary file. The file is
/// renamed over `path` only when `fill` succeeds and the buffer flushes, so a
/// failure leaves whatever was at `path` before untouched.
pub fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        NamedTempFile::new_in(dir).to_write_error(ErrorCode::WRITE_CREATE_FAILED, path)?;

    {
        let mut writer = BufWriter::new(&mut temp);
        fill(&mut writer)?;
        writer
            .flush()
            .to_write_error(ErrorCode::WRITE_ROW_FAILED, path)?;
    }

    temp.persist(path)
        .map_err(|e| e.error)
        .to_write_error(ErrorCode::WRITE_PERSIST_FAILED, path)?;
    Ok(())
}
