use crate::{Error, LineBuffer, Result};

/// Half-open `[start, end)` interval of zero-based line indices marking the
/// region to replace. `start == end` denotes a pure insertion at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
	pub start: usize,
	pub end: usize,
}

impl LineRange {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Optional expected line text at the range boundaries, used to detect that the
/// file has drifted since the range was computed (e.g. stale line numbers).
///
/// `before_start` is checked against the line at index `start - 1`;
/// `at_end` against the line at index `end` (the first line after the range).
/// Comparison ignores the line terminator.
#[derive(Debug, Clone, Default)]
pub struct BoundaryMarkers {
	pub before_start: Option<String>,
	pub at_end: Option<String>,
}

impl BoundaryMarkers {
	pub fn with_before_start(marker: impl Into<String>) -> Self {
		Self {
			before_start: Some(marker.into()),
			at_end: None,
		}
	}

	pub fn with_at_end(marker: impl Into<String>) -> Self {
		Self {
			before_start: None,
			at_end: Some(marker.into()),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.before_start.is_none() && self.at_end.is_none()
	}
}

/// Validates `range` against `lines`, running all checks before any mutation
/// may proceed.
///
/// Fails with `RangeOutOfBounds` when `start > end` or `end > lines.len()`,
/// and with `StaleRange` when a supplied marker does not match the actual line
/// content at its boundary. A marker that names a line outside the file
/// (`before_start` with `start == 0`, `at_end` with `end == len`) cannot match
/// and is reported as `StaleRange` as well.
///
/// Stateless: calling it twice on an unchanged buffer yields the same result.
pub fn validate_range(lines: &LineBuffer, range: LineRange, markers: &BoundaryMarkers) -> Result<()> {
	let len = lines.len();

	if range.start > range.end || range.end > len {
		return Err(Error::range_out_of_bounds(range.start, range.end, len));
	}

	if let Some(expected) = &markers.before_start {
		if range.start == 0 {
			return Err(Error::stale_range(0, expected.as_str(), "<no line before start of file>"));
		}
		check_marker(lines, range.start - 1, expected)?;
	}

	if let Some(expected) = &markers.at_end {
		if range.end == len {
			return Err(Error::stale_range(len, expected.as_str(), "<no line at end of file>"));
		}
		check_marker(lines, range.end, expected)?;
	}

	Ok(())
}

// region:    --- Support

fn check_marker(lines: &LineBuffer, idx: usize, expected: &str) -> Result<()> {
	let actual = &lines.lines()[idx];
	if strip_terminator(actual) != strip_terminator(expected) {
		return Err(Error::stale_range(idx, expected, strip_terminator(actual)));
	}
	Ok(())
}

fn strip_terminator(line: &str) -> &str {
	line.strip_suffix('\n').map(|s| s.strip_suffix('\r').unwrap_or(s)).unwrap_or(line)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
