use super::error::{BindPadError, BindPadResult};
use filetime::{FileTime, set_file_times};
use std::path::Path;

/// Copies `src` onto `dst`, keeping permissions and access/modification times.
///
/// Returns the number of bytes copied. Errors opening or reading `src` name
/// `src`; once the source is readable, copy failures name `dst` (a missing
/// destination directory maps to `FileNotFound(dst)`).
pub fn copy_with_metadata(src: &Path, dst: &Path) -> BindPadResult<u64> {
    let meta = std::fs::metadata(src).map_err(|e| BindPadError::io(src, e))?;
    std::fs::File::open(src).map_err(|e| BindPadError::io(src, e))?;

    // std::fs::copy carries permissions over
    let bytes = std::fs::copy(src, dst).map_err(|e| BindPadError::io(dst, e))?;

    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    set_file_times(dst, atime, mtime).map_err(|e| BindPadError::io(dst, e))?;

    Ok(bytes)
}
