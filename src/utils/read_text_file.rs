use std::fs;
use std::path::Path;

use crate::models::Error;

/// Reads the entire document at `path` as UTF-8 text.
///
/// # Arguments
/// * `path` - Filesystem path of the document to read.
///
/// # Returns
/// * The full file content, or `Error::NotFound` naming the path when the
///   file does not exist, or `Error::IoError` for any other read failure
///   (permissions, non-UTF-8 content).
pub fn read_text_file(path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;

    Ok(text)
}
