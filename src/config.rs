use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::resolve::CommandTable;

/// The `[package.metadata.exec]` block of a Cargo.toml, e.g.:
///
/// ```toml
/// [package.metadata.exec.commands]
/// test-script = "printf"
///
/// [package.metadata.exec.config]
/// resolve = true
/// ```
///
/// Both sub-tables are optional; a missing block behaves like an empty
/// one. Loaded fresh on every invocation, read-only afterwards.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    pub commands: CommandTable,
    pub config: Options,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Rewrite nested `cargo exec <name>` calls into their literal
    /// definitions before spawning.
    pub resolve: bool,
}

// Only the metadata path we own; everything else in the manifest is ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Manifest {
    package: Package,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Package {
    metadata: Metadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Metadata {
    exec: ExecConfig,
}

/// Walks upward from `start` to the nearest directory containing a
/// Cargo.toml, the way cargo itself locates the manifest.
pub fn find_manifest(start: &Path) -> Result<PathBuf, Error> {
    for dir in start.ancestors() {
        let candidate = dir.join("Cargo.toml");
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(Error::ManifestNotFound(start.to_path_buf()))
}

pub fn load(manifest: &Path) -> Result<ExecConfig, Error> {
    let text = fs::read_to_string(manifest).map_err(|source| Error::ManifestRead {
        path: manifest.to_path_buf(),
        source,
    })?;
    let parsed: Manifest = toml::from_str(&text).map_err(|source| Error::ManifestParse {
        path: manifest.to_path_buf(),
        source,
    })?;
    Ok(parsed.package.metadata.exec)
}
