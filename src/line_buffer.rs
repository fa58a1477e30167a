use crate::{Error, Result};
use simple_fs::SPath;
use std::fs;

/// An ordered sequence of text lines, each retaining its own terminator
/// (`\n` or `\r\n`), so that [`LineBuffer::join`] reconstructs the source
/// content byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
	lines: Vec<String>,
}

impl LineBuffer {
	/// Reads `path` and splits its content into terminator-preserving lines.
	pub fn load(path: &SPath) -> Result<Self> {
		if !path.exists() {
			return Err(Error::file_not_found(path.as_str()));
		}
		let bytes = fs::read(path.std_path())?;
		let content = String::from_utf8(bytes).map_err(|err| Error::decode(path.as_str(), err.utf8_error()))?;

		Ok(Self::from_content(&content))
	}

	pub fn from_content(content: &str) -> Self {
		Self {
			lines: split_keeping_terminators(content),
		}
	}

	pub fn from_lines(lines: Vec<String>) -> Self {
		Self { lines }
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Concatenates the lines back into the exact source content.
	pub fn join(&self) -> String {
		self.lines.concat()
	}
}

/// The lines that will occupy a range's position in the output.
/// Each line carries its own terminator; an empty block is a pure deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementBlock {
	lines: Vec<String>,
}

impl ReplacementBlock {
	pub fn new(lines: Vec<String>) -> Self {
		Self { lines }
	}

	/// Splits `content` into terminator-preserving lines, same rules as
	/// [`LineBuffer::from_content`].
	pub fn from_content(content: &str) -> Self {
		Self {
			lines: split_keeping_terminators(content),
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

// region:    --- Support

/// Splits after each `\n`, keeping the terminator attached to its line
/// (`\r\n` stays together). A trailing segment without a newline becomes
/// a final line of its own; empty content yields no lines.
fn split_keeping_terminators(content: &str) -> Vec<String> {
	content.split_inclusive('\n').map(String::from).collect()
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
