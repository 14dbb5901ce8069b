//! Artifact metadata decoding and validation.
//!
//! Each YAML document in the input tree describes one downloadable artifact:
//!
//! ```yaml
//! package: my-package
//! href: https://example.com/dist/my-package-1.0.tar.gz
//! sha256: 0b2e...
//! requires_python: ">=3.8"
//! ```
//!
//! Field keys are accepted in two spellings: the canonical snake_case key,
//! or its camelCase alias derived mechanically from it (`requires_python` /
//! `requiresPython`). The lookup is an explicit two-pass check per field
//! rather than a serde alias, so the alias rule lives in one visible place.
//!
//! ## Validation
//!
//! - `package` must match the PEP 503 identifier shape: alphanumeric at both
//!   ends, only `[A-Za-z0-9._-]` in between
//! - `href` must be an absolute http(s) URL
//! - `sha256` and `requires_python` are optional and stored verbatim
//!
//! A document that fails any of these aborts the whole run — a broken
//! metadata record means the index would be wrong, not merely incomplete.

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("record is not a mapping")]
    NotAMapping,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
    #[error(
        "invalid package name `{0}` (expected alphanumeric characters \
         separated by `-`, `_` or `.`)"
    )]
    InvalidPackageName(String),
    #[error("invalid href `{href}`: {source}")]
    InvalidHref {
        href: String,
        source: url::ParseError,
    },
    #[error("href `{0}` must use an http or https scheme")]
    UnsupportedScheme(String),
}

/// A validated PEP 503 package identifier.
///
/// Construction goes through [`PackageName::new`], which enforces the shape
/// `^([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9._-]*[A-Za-z0-9])$`. The stored value
/// is the raw name as written, not the normalized form — normalization is
/// [`crate::naming::normalize_package_name`]'s job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidPackageName(raw.to_string());

        let mut chars = raw.chars();
        let first = chars.next().ok_or_else(invalid)?;
        if !first.is_ascii_alphanumeric() {
            return Err(invalid());
        }
        if let Some(last) = raw.chars().next_back()
            && raw.len() > 1
            && !last.is_ascii_alphanumeric()
        {
            return Err(invalid());
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(invalid());
        }

        Ok(PackageName(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One downloadable package file. Immutable once decoded: fields are only
/// reachable through accessors and construction goes through
/// [`Artifact::decode`]. Duplicate records are kept as-is — no deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    package: PackageName,
    href: Url,
    sha256: Option<String>,
    requires_python: Option<String>,
}

impl Artifact {
    /// Decode one YAML document into an Artifact.
    pub fn decode(value: &Value) -> Result<Self, ValidationError> {
        let mapping = value.as_mapping().ok_or(ValidationError::NotAMapping)?;

        let package = PackageName::new(required_str(mapping, "package")?)?;

        let raw_href = required_str(mapping, "href")?;
        let href = Url::parse(raw_href).map_err(|source| ValidationError::InvalidHref {
            href: raw_href.to_string(),
            source,
        })?;
        if !matches!(href.scheme(), "http" | "https") {
            return Err(ValidationError::UnsupportedScheme(raw_href.to_string()));
        }

        Ok(Artifact {
            package,
            href,
            sha256: optional_str(mapping, "sha256")?.map(str::to_string),
            requires_python: optional_str(mapping, "requires_python")?.map(str::to_string),
        })
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    pub fn href(&self) -> &Url {
        &self.href
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }

    pub fn requires_python(&self) -> Option<&str> {
        self.requires_python.as_deref()
    }
}

/// Look up a field by its snake_case key, falling back to the camelCase
/// alias. For single-word keys both spellings coincide and the second pass
/// is a no-op.
fn lookup<'a>(mapping: &'a Mapping, snake_key: &str) -> Option<&'a Value> {
    mapping
        .get(snake_key)
        .or_else(|| mapping.get(snake_to_camel(snake_key).as_str()))
}

fn required_str<'a>(mapping: &'a Mapping, key: &'static str) -> Result<&'a str, ValidationError> {
    let value = lookup(mapping, key).ok_or(ValidationError::MissingField(key))?;
    value.as_str().ok_or(ValidationError::NotAString(key))
}

fn optional_str<'a>(
    mapping: &'a Mapping,
    key: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match lookup(mapping, key) {
        None => Ok(None),
        Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or(ValidationError::NotAString(key)),
    }
}

/// `requires_python` → `requiresPython`: first segment unchanged, each later
/// segment gets its first letter capitalized.
fn snake_to_camel(key: &str) -> String {
    let mut segments = key.split('_');
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
    }
    out
}
