use crate::error::{ReleaseError, Result};
use crate::version::VersionObject;
use std::fs;
use std::path::Path;
use toml_edit::DocumentMut;

/// Reads the current version from a Cargo manifest
pub fn current_version(path: &Path) -> Result<VersionObject> {
    let doc = read_manifest(path)?;

    let version = doc
        .get("package")
        .and_then(|item| item.as_table())
        .and_then(|table| table.get("version"))
        .and_then(|item| item.as_str())
        .ok_or_else(|| {
            ReleaseError::manifest(format!("no package.version in {}", path.display()))
        })?;

    VersionObject::parse(version)
}

/// Writes a new version into a Cargo manifest, leaving the rest of the file
/// untouched (formatting and comments are preserved)
pub fn set_version(path: &Path, version: &str) -> Result<()> {
    let mut doc = read_manifest(path)?;

    let package = doc
        .get_mut("package")
        .and_then(|item| item.as_table_mut())
        .ok_or_else(|| {
            ReleaseError::manifest(format!("no [package] table in {}", path.display()))
        })?;

    package.insert("version", toml_edit::value(version));
    fs::write(path, doc.to_string())?;

    Ok(())
}

fn read_manifest(path: &Path) -> Result<DocumentMut> {
    let raw = fs::read_to_string(path)?;
    raw.parse::<DocumentMut>()
        .map_err(|e| ReleaseError::manifest(format!("{}: {}", path.display(), e)))
}
