//! Package name normalization per the PEP 503 equivalence rule.
//!
//! Installers treat `My.Package__Name` and `my-package-name` as the same
//! project, so the output directory for a package must use the canonical
//! form. The rule is fixed: collapse every run of `-`, `_`, `.` into a
//! single `-`, then lowercase.
//!
//! Normalization is applied at render time only — grouping in [`crate::scan`]
//! keys on the raw name as it appeared in the metadata (see
//! [`crate::generate`] for how same-normalization collisions are handled).

/// Normalize a package name to its canonical PEP 503 form.
///
/// - `"My.Package__Name"` → `"my-package-name"`
/// - `"flask"` → `"flask"`
/// - `"Foo_Bar.Baz"` → `"foo-bar-baz"`
///
/// Idempotent: normalizing an already-normalized name is a no-op.
pub fn normalize_package_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator_run = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator_run {
                out.push('-');
                in_separator_run = true;
            }
        } else {
            out.extend(c.to_lowercase());
            in_separator_run = false;
        }
    }

    out
}
