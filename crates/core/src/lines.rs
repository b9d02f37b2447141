//! Reading files and extracting inclusive, 1-based line ranges.

use std::fs;

use log::debug;

use crate::error::{Error, Result};

/// Reads the file at `path` and returns its lines without terminators.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
pub fn read_lines(path: &str) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).map_err(|e| Error::io_error("view", path, e))?;

    Ok(content.lines().map(ToString::to_string).collect())
}

/// Selects lines `start..=end` (1-based) from `lines`.
///
/// A zero `start` means "from the first line" and a zero `end` means "through
/// the last line", so `0, 0` selects everything. An `end` past the last line is
/// clamped.
///
/// # Errors
///
/// - [`Error::InvalidLineRange`] if both bounds are set and `start > end`
/// - [`Error::LineOutOfRange`] if `start` is past the last line
pub fn slice_lines(lines: Vec<String>, path: &str, start: usize, end: usize) -> Result<Vec<String>> {
    if start == 0 && end == 0 {
        return Ok(lines);
    }

    if start > 0 && end > 0 && start > end {
        return Err(Error::InvalidLineRange { start, end });
    }

    let line_count = lines.len();
    if start > line_count {
        return Err(Error::line_out_of_range(path, start, line_count));
    }

    let first = start.max(1);
    let last = if end == 0 { line_count } else { end.min(line_count) };

    if last < end {
        debug!("Clamped end line {end} of `{path}` to {last}");
    }

    Ok(lines
        .into_iter()
        .skip(first - 1)
        .take(last + 1 - first)
        .collect())
}

/// Reads `path` and returns the requested line range.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the range is invalid for
/// this file, see [`read_lines`] and [`slice_lines`].
pub fn read_line_range(path: &str, start: usize, end: usize) -> Result<Vec<String>> {
    let lines = read_lines(path)?;
    slice_lines(lines, path, start, end)
}
