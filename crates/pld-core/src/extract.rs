//! Nested manifest extraction from downloaded jars.
//!
//! Only the central directory and the single `dependencies.json` entry are
//! read; the rest of the archive is never loaded.

use crate::error::ExtractError;
use crate::manifest::Manifest;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::result::ZipError;

/// Well-known entry name of the embedded manifest.
pub const NESTED_MANIFEST: &str = "dependencies.json";

/// Returns the embedded manifest of `archive_path`, `Ok(None)` if the archive
/// has no such entry, or an error if the archive or entry cannot be decoded.
pub fn extract_nested_manifest(archive_path: &Path) -> Result<Option<Manifest>, ExtractError> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    let entry = match archive.by_name(NESTED_MANIFEST) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let manifest = Manifest::from_nested_reader(entry)?;
    Ok(Some(manifest))
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    /// Builds an in-memory jar with the given `(name, content)` entries.
    pub fn jar(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}
