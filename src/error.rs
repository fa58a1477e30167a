use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Load
	#[display("File not found: {path}")]
	FileNotFound { path: String },

	#[display("File '{path}' is not valid UTF-8 ({cause})")]
	Decode { path: String, cause: String },

	// -- Range validation
	#[display("Range {start}..{end} is out of bounds for a file of {len} lines")]
	RangeOutOfBounds { start: usize, end: usize, len: usize },

	#[display("Stale range at line index {line}: expected {expected:?}, found {actual:?}")]
	StaleRange {
		line: usize,
		expected: String,
		actual: String,
	},

	// -- Persist
	#[display("Failed to write '{path}' ({cause})")]
	WriteFailure { path: String, cause: String },

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),
}

// region:    --- Constructors

impl Error {
	pub fn file_not_found(path: impl Into<String>) -> Self {
		Error::FileNotFound { path: path.into() }
	}

	pub fn decode(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
		Error::Decode {
			path: path.into(),
			cause: cause.to_string(),
		}
	}

	pub fn range_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
		Error::RangeOutOfBounds { start, end, len }
	}

	pub fn stale_range(line: usize, expected: impl Into<String>, actual: impl Into<String>) -> Self {
		Error::StaleRange {
			line,
			expected: expected.into(),
			actual: actual.into(),
		}
	}

	pub fn write_failure(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
		Error::WriteFailure {
			path: path.into(),
			cause: cause.to_string(),
		}
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
