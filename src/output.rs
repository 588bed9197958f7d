// src/output.rs
// =============================================================================
// Writes result lists to plain-text files, one entry per line.
//
// Files are always truncated: running the tool twice never appends to the
// previous results. No sorting, no deduplication.
// =============================================================================

use crate::error::OutputError;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes every item of `lines` followed by a newline.
///
/// The file is created if needed and truncated otherwise. The handle is
/// dropped (and closed) on every return path.
pub fn write_lines<T: Display>(path: &Path, lines: &[T]) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line).map_err(to_error)?;
    }

    // BufWriter swallows errors on drop, so flush explicitly
    writer.flush().map_err(to_error)?;
    Ok(())
}
