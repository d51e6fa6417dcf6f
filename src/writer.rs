//! File persistence for rendered output.
//! Creates missing ancestor directories, then creates or overwrites the
//! destination file. No locking and no atomic replace: on any failure the
//! whole project directory is disposable and removed by the caller.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Writes rendered content below the output root, creating ancestors.
pub fn write_file<P: AsRef<Path>>(output_root: &Path, rel_path: P, content: &str) -> Result<()> {
    let dest = output_root.join(rel_path.as_ref());
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)?;
    Ok(())
}

/// Creates a directory (and its ancestors) below the output root.
pub fn create_dir<P: AsRef<Path>>(output_root: &Path, rel_path: P) -> Result<()> {
    fs::create_dir_all(output_root.join(rel_path.as_ref()))?;
    Ok(())
}
