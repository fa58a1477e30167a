use crate::{Error, LineBuffer, Result};
use simple_fs::SPath;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `lines` to `path` atomically: the joined content goes to a temp file
/// in the destination's directory, which is then renamed into place.
///
/// Either the complete new content becomes visible at `path`, or on any failure
/// the previous file is left byte-for-byte untouched. The target is never
/// truncated in place. Returns the number of bytes written.
pub fn write_atomic(path: &SPath, lines: &LineBuffer) -> Result<usize> {
	let content = lines.join();

	let parent = path
		.std_path()
		.parent()
		.ok_or_else(|| Error::write_failure(path.as_str(), "path has no parent directory"))?;
	let parent = if parent.as_os_str().is_empty() {
		std::path::Path::new(".")
	} else {
		parent
	};

	// The temp file must live on the same filesystem as the target for the
	// rename to be atomic.
	let mut tmp = NamedTempFile::new_in(parent).map_err(|err| Error::write_failure(path.as_str(), err))?;

	tmp.write_all(content.as_bytes())
		.map_err(|err| Error::write_failure(path.as_str(), err))?;
	tmp.flush().map_err(|err| Error::write_failure(path.as_str(), err))?;

	tmp.persist(path.std_path())
		.map_err(|err| Error::write_failure(path.as_str(), err.error))?;

	Ok(content.len())
}

// region:    --- Tests


// endregion: --- Tests
