use crate::{LineRange, ReplacementBlock};

/// Report of one successfully persisted patch.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
	pub kind: PatchKind,
	pub file_path: String,
	pub lines_removed: usize,
	pub lines_added: usize,
	pub bytes_written: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
	/// Non-empty range replaced by non-empty content.
	Replace,
	/// Empty range (`start == end`) with non-empty content.
	Insert,
	/// Non-empty range with an empty replacement block.
	Delete,
	/// Empty range and empty block; the file content is unchanged.
	Noop,
}

impl PatchOutcome {
	pub fn kind(&self) -> &'static str {
		match self.kind {
			PatchKind::Replace => "Replace",
			PatchKind::Insert => "Insert",
			PatchKind::Delete => "Delete",
			PatchKind::Noop => "Noop",
		}
	}

	pub fn file_path(&self) -> &str {
		&self.file_path
	}

	/// Net change in line count, positive when the file grew.
	pub fn line_delta(&self) -> isize {
		self.lines_added as isize - self.lines_removed as isize
	}
}

// region:    --- Froms

impl From<(&LineRange, &ReplacementBlock)> for PatchKind {
	fn from((range, replacement): (&LineRange, &ReplacementBlock)) -> Self {
		match (range.is_empty(), replacement.is_empty()) {
			(false, false) => PatchKind::Replace,
			(true, false) => PatchKind::Insert,
			(false, true) => PatchKind::Delete,
			(true, true) => PatchKind::Noop,
		}
	}
}

// endregion: --- Froms
