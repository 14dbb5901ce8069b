//! Metadata discovery and grouping.
//!
//! Walks the input directory tree, decodes every `.yaml`/`.yml` file it
//! finds (extension match is case-sensitive), and groups the resulting
//! artifacts by package name. Each file is a multi-document YAML stream, so
//! one file can describe any number of artifacts for any mix of packages.
//!
//! ## Grouping key
//!
//! Groups are keyed by the **raw** package name exactly as it appears in the
//! metadata — `Foo` and `foo` land in different groups here. Normalization
//! happens once, at directory-naming time in [`crate::generate`], which also
//! rejects the case where two distinct raw names collapse to the same
//! directory.
//!
//! ## Failure policy
//!
//! Fail-fast: the first unreadable file, malformed document, or invalid
//! record aborts the scan with the offending path. A partially-correct index
//! would poison installer resolution, so there is no skip-and-continue mode.

use crate::artifact::{self, Artifact};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input directory not found or not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed YAML in {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid record in {path}: {source}")]
    Validation {
        path: PathBuf,
        source: artifact::ValidationError,
    },
}

/// Artifacts grouped by raw package name, values in decode order.
pub type PackageGroups = BTreeMap<String, Vec<Artifact>>;

/// Scan `root` recursively and group every decoded artifact by package.
pub fn find_packages(root: &Path) -> Result<PackageGroups, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut packages = PackageGroups::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches!(
            entry.path().extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        ) {
            continue;
        }
        decode_file(entry.path(), &mut packages)?;
    }

    Ok(packages)
}

/// Decode every document in one metadata file into `packages`.
fn decode_file(path: &Path, packages: &mut PackageGroups) -> Result<(), ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    for document in serde_yaml::Deserializer::from_str(&text) {
        let value = Value::deserialize(document).map_err(|source| ScanError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file (or an explicit `---` with no content) parses as a
        // single null document. Nothing to index.
        if value.is_null() {
            continue;
        }
        let artifact = Artifact::decode(&value).map_err(|source| ScanError::Validation {
            path: path.to_path_buf(),
            source,
        })?;
        packages
            .entry(artifact.package().as_str().to_string())
            .or_default()
            .push(artifact);
    }

    Ok(())
}
