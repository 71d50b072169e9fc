//! Output directory preparation and download file lifecycle.
//!
//! Bodies are streamed into `<name>.part` and renamed into place only once the
//! response status is known to be 2xx.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.jar` → `a.jar.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates the output directory (recursively) if missing and checks it is a
/// writable directory.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::info!("output folder {} does not exist, creating", path.display());
        fs::create_dir_all(path)
            .with_context(|| format!("error creating output folder {}", path.display()))?;
    }

    let meta = fs::metadata(path)
        .with_context(|| format!("error checking output folder {}", path.display()))?;
    if !meta.is_dir() {
        anyhow::bail!("output path {} is not a directory", path.display());
    }
    if meta.permissions().readonly() {
        anyhow::bail!(
            "current user does not have permission to write to {}",
            path.display()
        );
    }
    tracing::debug!("output folder ready: {}", path.display());
    Ok(())
}
