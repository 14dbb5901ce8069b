//! # Simple Index
//!
//! A minimal static PEP 503 "simple repository" generator. Your filesystem
//! is the data source: a directory tree of YAML documents describes package
//! artifacts, and the output is a plain-HTML index tree any file server can
//! host and any Python installer can consume.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      metadata/  →  package groups   (YAML documents → Artifacts)
//! 2. Generate  groups     →  public/          (root index + per-package pages)
//! ```
//!
//! Scanning is pure discovery and validation; generation owns every ordering
//! and naming decision, so the emitted tree is deterministic no matter how
//! the filesystem enumerates the input.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`artifact`] | Decodes one YAML document into a validated `Artifact`; owns the `PackageName` identifier rules |
//! | [`naming`] | PEP 503 package name normalization |
//! | [`scan`] | Walks the metadata tree and groups artifacts by package |
//! | [`render`] | Anchor composition (`#sha256=` fragments, `data-requires-python`) and the bare index-page template |
//! | [`generate`] | Writes the output tree: per-package directories plus the root listing |
//!
//! # Design Decisions
//!
//! ## Plain HTML, One Anchor Per Line
//!
//! PEP 503 consumers parse anchors and nothing else. The generated pages
//! carry no styling, no scripts, no head section — just a doctype and a body
//! of links. That keeps the output diffable and trivially auditable.
//!
//! ## Fail-Fast Validation
//!
//! A single malformed record aborts the run before anything is written. An
//! index silently missing a package is worse than no index: installers would
//! resolve against incomplete data without any signal that something broke.
//!
//! ## Raw-Name Grouping, Normalized Directories
//!
//! Grouping keys on the package name exactly as written; normalization is
//! applied once when directories are named. Two raw spellings that collapse
//! to the same directory are an error, never a silent overwrite.

pub mod artifact;
pub mod generate;
pub mod naming;
pub mod render;
pub mod scan;
