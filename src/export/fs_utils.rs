// src/export/fs_utils.rs

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Create the output directory when missing. Timestamped artifact names
/// make overwrite prompts unnecessary.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
