use crate::{
	BoundaryMarkers, LineBuffer, LineRange, PatchKind, PatchOutcome, ReplacementBlock, Result, persist,
	validate_range,
};
use simple_fs::SPath;
use tracing::debug;

/// Replaces `range` in `lines` with `replacement`, returning a fresh buffer
/// `lines[..start] + replacement + lines[end..]`.
///
/// Pure splice: the input buffer is never mutated, so a failure in a later
/// persist step cannot leave a partially applied state behind. Bounds must
/// already be confirmed via [`validate_range`].
///
/// Note: when the prefix's last line has no terminator (a final line before
/// EOF), the first replacement line is appended to the same physical line on
/// rejoin. Callers supply terminators as part of each line.
pub fn apply_to_lines(lines: &LineBuffer, range: LineRange, replacement: &ReplacementBlock) -> LineBuffer {
	let src = lines.lines();
	let mut out = Vec::with_capacity(src.len() - range.len() + replacement.len());

	out.extend_from_slice(&src[..range.start]);
	out.extend_from_slice(replacement.lines());
	out.extend_from_slice(&src[range.end..]);

	LineBuffer::from_lines(out)
}

/// Applies one line-range patch to the file at `path`:
/// load, validate, splice, then atomic write-back.
///
/// All validation completes before any mutation; any error leaves the file
/// byte-for-byte untouched. Each patch is single-use: once applied, line
/// numbers below the range have shifted, so a range computed against the old
/// content must be recomputed (and re-validated) before another application.
pub fn patch_file(
	path: &SPath,
	range: LineRange,
	replacement: &ReplacementBlock,
	markers: &BoundaryMarkers,
) -> Result<PatchOutcome> {
	let lines = LineBuffer::load(path)?;
	debug!(path = path.as_str(), lines = lines.len(), "loaded file");

	validate_range(&lines, range, markers)?;
	debug!(start = range.start, end = range.end, "range validated");

	let patched = apply_to_lines(&lines, range, replacement);

	let bytes_written = persist::write_atomic(path, &patched)?;
	debug!(path = path.as_str(), bytes_written, "patch persisted");

	Ok(PatchOutcome {
		kind: PatchKind::from((&range, replacement)),
		file_path: path.to_string(),
		lines_removed: range.len(),
		lines_added: replacement.len(),
		bytes_written,
	})
}

// region:    --- Tests


// endregion: --- Tests
