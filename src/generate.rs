//! Index tree generation.
//!
//! Orchestrates the full run: scan the metadata tree, then write one
//! directory per package plus the root listing.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! ├── index.html                 # Links to every package directory
//! ├── my-package/
//! │   └── index.html             # One anchor per artifact, sorted by href
//! └── other-package/
//!     └── index.html
//! ```
//!
//! Package directories use the normalized name ([`crate::naming`]); anchors
//! within a package are sorted by serialized href and the root listing is
//! sorted by directory path, so a run over the same metadata always produces
//! byte-identical output regardless of filesystem traversal order.
//!
//! ## Collisions
//!
//! Groups are keyed by raw name, directories by normalized name, so `Foo`
//! and `foo` would both claim `foo/`. Silently letting the second group
//! overwrite the first would drop artifacts from the index, so that case is
//! rejected with [`GenerateError::PackageCollision`].
//!
//! Failures leave whatever was already written in place — regeneration is
//! cheap and the output tree is fully derived, so there is no rollback.

use crate::artifact::Artifact;
use crate::naming::normalize_package_name;
use crate::render;
use crate::scan::{self, PackageGroups};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] scan::ScanError),
    #[error(
        "packages `{first}` and `{second}` both normalize to output directory `{dir}`; \
         rename one so the index is unambiguous"
    )]
    PackageCollision {
        dir: String,
        first: String,
        second: String,
    },
}

/// Scan `input_dir` and write the complete index tree under `output_dir`.
pub fn generate(input_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let packages = scan::find_packages(input_dir)?;

    fs::create_dir_all(output_dir)?;

    let mut package_dirs = Vec::with_capacity(packages.len());
    for (dir_name, artifacts) in assign_directories(&packages)? {
        package_dirs.push(write_package_index(output_dir, &dir_name, artifacts)?);
    }

    write_root_index(output_dir, &mut package_dirs)?;
    Ok(())
}

/// Map each group to its normalized directory name, rejecting collisions.
fn assign_directories(
    packages: &PackageGroups,
) -> Result<Vec<(String, &[Artifact])>, GenerateError> {
    let mut claimed: BTreeMap<String, &str> = BTreeMap::new();
    let mut assigned = Vec::with_capacity(packages.len());

    for (raw_name, artifacts) in packages {
        let dir_name = normalize_package_name(raw_name);
        if let Some(first) = claimed.insert(dir_name.clone(), raw_name) {
            return Err(GenerateError::PackageCollision {
                dir: dir_name,
                first: first.to_string(),
                second: raw_name.clone(),
            });
        }
        assigned.push((dir_name, artifacts.as_slice()));
    }

    Ok(assigned)
}

/// Write one package's `index.html`, artifacts sorted by serialized href.
fn write_package_index(
    output_dir: &Path,
    dir_name: &str,
    artifacts: &[Artifact],
) -> Result<PathBuf, GenerateError> {
    let pkg_dir = output_dir.join(dir_name);
    fs::create_dir_all(&pkg_dir)?;

    let mut sorted: Vec<_> = artifacts.iter().collect();
    sorted.sort_by(|a, b| a.href().as_str().cmp(b.href().as_str()));

    let anchors: Vec<String> = sorted
        .iter()
        .map(|a| render::render_artifact_anchor(a))
        .collect();

    fs::write(
        pkg_dir.join("index.html"),
        render::render_index_page(&anchors),
    )?;
    println!("Generated {dir_name}/index.html");

    Ok(pkg_dir)
}

/// Write the root `index.html` linking to every package directory.
fn write_root_index(output_dir: &Path, package_dirs: &mut [PathBuf]) -> Result<(), GenerateError> {
    package_dirs.sort();

    let anchors: Vec<String> = package_dirs
        .iter()
        .filter_map(|dir| dir.file_name())
        .map(|name| render::render_package_anchor(&name.to_string_lossy()))
        .collect();

    fs::write(
        output_dir.join("index.html"),
        render::render_index_page(&anchors),
    )?;
    println!("Generated index.html");

    Ok(())
}
