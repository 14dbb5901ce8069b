//! Anchor and index page rendering.
//!
//! The PEP 503 page format is deliberately minimal: a bare HTML document
//! whose body is one anchor per line. What an installer actually reads is
//! encoded on the anchors themselves:
//!
//! - the checksum rides the URL as a `#sha256=<digest>` fragment
//! - the interpreter constraint rides a `data-requires-python` attribute
//!
//! Anchors are built with [maud](https://maud.lambda.xyz/), the same
//! auto-escaping HTML layer used for the rest of the output: attribute and
//! text interpolation is escaped by default, so a `requires_python` value
//! like `>=3.8,<4` comes out as `&gt;=3.8,&lt;4` without any hand-rolled
//! escaping. The href is emitted pre-escaped — it is already a serialized
//! URL, and re-escaping it would corrupt query strings.

use crate::artifact::Artifact;
use maud::{PreEscaped, html};

/// Render the anchor for one artifact.
///
/// The display text is the last path segment of the href (the filename an
/// installer would save), falling back to the whole URL for hrefs with an
/// empty path. A `sha256` digest replaces any fragment already on the href.
pub fn render_artifact_anchor(artifact: &Artifact) -> String {
    let text = match artifact.href().path_segments().and_then(|mut s| s.next_back()) {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => artifact.href().to_string(),
    };

    let mut href = artifact.href().clone();
    if let Some(digest) = artifact.sha256() {
        href.set_fragment(Some(&format!("sha256={digest}")));
    }

    html! {
        a href=(PreEscaped(href.as_str()))
            data-requires-python=[artifact.requires_python()] {
            (text)
        }
    }
    .into_string()
}

/// Render the root-index anchor for one package directory.
///
/// `name` is the normalized directory name; the href is relative with a
/// trailing slash so the link resolves to the directory's own index.
pub fn render_package_anchor(name: &str) -> String {
    html! {
        a href={ (name) "/" } { (name) }
    }
    .into_string()
}

/// Assemble a complete index page from pre-rendered anchors, one per line.
///
/// Used for both the root index and each per-package index — the two differ
/// only in which anchors they carry. Inputs are already escaped; this layer
/// only joins lines.
pub fn render_index_page(anchors: &[String]) -> String {
    let mut lines = vec!["<!DOCTYPE html>", "<html>", "<body>"];
    lines.extend(anchors.iter().map(String::as_str));
    lines.extend(["</body>", "</html>"]);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn artifact(yaml: &str) -> Artifact {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        Artifact::decode(&value).unwrap()
    }

    #[test]
    fn plain_anchor() {
        let a = artifact("package: pkg\nhref: https://example.com/dist/pkg-1.0.tar.gz\n");
        assert_eq!(
            render_artifact_anchor(&a),
            r#"<a href="https://example.com/dist/pkg-1.0.tar.gz">pkg-1.0.tar.gz</a>"#
        );
    }

    #[test]
    fn sha256_becomes_fragment() {
        let a = artifact(
            "package: pkg\n\
             href: https://example.com/dist/pkg-1.0.tar.gz\n\
             sha256: abc123\n",
        );
        let anchor = render_artifact_anchor(&a);
        assert!(anchor.contains(r#"href="https://example.com/dist/pkg-1.0.tar.gz#sha256=abc123""#));
        assert!(anchor.ends_with(">pkg-1.0.tar.gz</a>"));
    }

    #[test]
    fn existing_fragment_replaced() {
        let a = artifact(
            "package: pkg\n\
             href: https://example.com/pkg.whl#md5=feed\n\
             sha256: abc123\n",
        );
        let anchor = render_artifact_anchor(&a);
        assert!(anchor.contains("#sha256=abc123"));
        assert!(!anchor.contains("md5"));
    }

    #[test]
    fn requires_python_attribute_escaped() {
        let a = artifact(
            "package: pkg\n\
             href: https://example.com/pkg.whl\n\
             requires_python: '>=3.8,<4'\n",
        );
        let anchor = render_artifact_anchor(&a);
        assert!(anchor.contains(r#"data-requires-python="&gt;=3.8,&lt;4""#));
        assert!(!anchor.contains(r#"="<"#));
    }

    #[test]
    fn requires_python_simple_value() {
        let a = artifact(
            "package: pkg\nhref: https://example.com/pkg.whl\nrequires_python: '>=3.8'\n",
        );
        assert!(render_artifact_anchor(&a).contains(r#"data-requires-python="&gt;=3.8""#));
    }

    #[test]
    fn attribute_absent_without_requires_python() {
        let a = artifact("package: pkg\nhref: https://example.com/pkg.whl\n");
        assert!(!render_artifact_anchor(&a).contains("data-requires-python"));
    }

    #[test]
    fn display_text_falls_back_to_full_href() {
        // No path segment to use as a filename.
        let a = artifact("package: pkg\nhref: https://example.com\n");
        let anchor = render_artifact_anchor(&a);
        assert!(anchor.contains(">https://example.com/</a>"));
    }

    #[test]
    fn query_string_preserved_in_href() {
        let a = artifact("package: pkg\nhref: https://example.com/pkg.whl?token=a&x=b\n");
        let anchor = render_artifact_anchor(&a);
        assert!(anchor.contains(r#"href="https://example.com/pkg.whl?token=a&x=b""#));
    }

    #[test]
    fn package_anchor_is_relative_with_trailing_slash() {
        assert_eq!(
            render_package_anchor("my-package"),
            r#"<a href="my-package/">my-package</a>"#
        );
    }

    #[test]
    fn page_shape() {
        let page = render_index_page(&["<a href=\"x/\">x</a>".to_string()]);
        assert_eq!(
            page,
            "<!DOCTYPE html>\n<html>\n<body>\n<a href=\"x/\">x</a>\n</body>\n</html>"
        );
    }

    #[test]
    fn empty_page_still_valid() {
        assert_eq!(
            render_index_page(&[]),
            "<!DOCTYPE html>\n<html>\n<body>\n</body>\n</html>"
        );
    }

    #[test]
    fn anchors_keep_given_order() {
        let page = render_index_page(&["<a>1</a>".to_string(), "<a>2</a>".to_string()]);
        let one = page.find("<a>1</a>").unwrap();
        let two = page.find("<a>2</a>").unwrap();
        assert!(one < two);
    }
}
