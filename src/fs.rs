//! File helpers shared by the generators.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A rendered output: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Reads a template file into memory.
pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading template {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::filesystem(path, e))
}

/// Writes `content` to `dest_path`, replacing whatever was there.
///
/// Parent directories are created as needed. The content is written to a
/// temporary file next to the destination and then renamed over it, so an
/// interrupted run never leaves a half-written file behind.
pub fn write_file<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let parent = match dest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::filesystem(&parent, e))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| Error::filesystem(&parent, e))?;
    tmp.write_all(content.as_bytes()).map_err(|e| Error::filesystem(dest_path, e))?;
    if let Ok(metadata) = fs::metadata(dest_path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::filesystem(dest_path, e))?;
    }
    tmp.persist(dest_path).map_err(|e| Error::filesystem(dest_path, e.error))?;
    Ok(())
}

pub fn write_generated(file: &GeneratedFile) -> Result<()> {
    write_file(&file.path, &file.content)
}
