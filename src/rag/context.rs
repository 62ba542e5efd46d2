//! Document formatter and context assembler
//!
//! Each retrieved document becomes one `<source>` fragment; the context
//! is the fragments joined with a single newline, in retrieval-rank
//! order. No deduplication and no truncation happen here: any count or
//! length limit is the retriever's responsibility.

use crate::errors::{PipelineError, Result};
use crate::search::Document;

/// Render one document into its fixed-shape context fragment
///
/// `url` and highlight strings are substituted verbatim. Values are NOT
/// XML-escaped; see DESIGN.md for the rationale. A document missing
/// `url` or `highlights` fails with a missing-field error rather than
/// producing malformed output.
pub fn format_source(rank: usize, document: &Document) -> Result<String> {
    let url = document
        .metadata
        .url
        .as_deref()
        .ok_or(PipelineError::MissingField { rank, field: "url" })?;

    let highlights = document
        .metadata
        .highlights
        .as_deref()
        .ok_or(PipelineError::MissingField {
            rank,
            field: "highlights",
        })?;

    Ok(format!(
        "<source>\n    <url>{}</url>\n    <highlights>{}</highlights>\n</source>",
        url,
        highlights.join("\n")
    ))
}

/// Assemble the ordered documents into one context string
///
/// Order-preserving map of [`format_source`] followed by a newline join.
/// No separator for a single fragment; empty input yields the empty
/// string (a degenerate but valid context).
pub fn assemble_context(documents: &[Document]) -> Result<String> {
    let fragments = documents
        .iter()
        .enumerate()
        .map(|(rank, doc)| format_source(rank, doc))
        .collect::<Result<Vec<_>>>()?;

    Ok(fragments.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn doc(url: &str, highlights: &[&str]) -> Document {
        Document::new(
            "body text",
            url,
            highlights.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_fragment_shape() {
        let fragment = format_source(0, &doc("https://x", &["a", "b"])).unwrap();
        assert_eq!(
            fragment,
            "<source>\n    <url>https://x</url>\n    <highlights>a\nb</highlights>\n</source>"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let d = doc("https://example.com", &["one", "two"]);
        let first = format_source(0, &d).unwrap();
        let second = format_source(0, &d).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_url_errors() {
        let mut d = doc("https://x", &["a"]);
        d.metadata.url = None;

        let err = format_source(3, &d).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingField { rank: 3, field: "url" }
        ));
    }

    #[test]
    fn test_missing_highlights_errors() {
        let mut d = doc("https://x", &["a"]);
        d.metadata.highlights = None;

        let err = format_source(0, &d).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingField {
                field: "highlights",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_documents_yield_empty_context() {
        assert_eq!(assemble_context(&[]).unwrap(), "");
    }

    #[test]
    fn test_single_fragment_has_no_separator() {
        let context = assemble_context(&[doc("https://x", &["a"])]).unwrap();
        assert!(!context.starts_with('\n'));
        assert!(!context.ends_with('\n'));
        assert_eq!(context.matches("<source>").count(), 1);
    }

    #[test]
    fn test_assembly_preserves_document_order() {
        let docs = vec![
            doc("https://first", &["f"]),
            doc("https://second", &["s"]),
            doc("https://third", &["t"]),
        ];

        let context = assemble_context(&docs).unwrap();
        let first = context.find("https://first").unwrap();
        let second = context.find("https://second").unwrap();
        let third = context.find("https://third").unwrap();
        assert!(first < second && second < third);
    }

    #[quickcheck]
    fn prop_fragment_order_matches_document_order(urls: Vec<u32>) -> bool {
        let docs: Vec<Document> = urls
            .iter()
            .map(|n| doc(&format!("https://site-{}.example", n), &["h"]))
            .collect();

        let context = assemble_context(&docs).unwrap();
        let mut last_end = 0;
        docs.iter().all(|d| {
            let needle = format!("<url>{}</url>", d.metadata.url.as_deref().unwrap());
            match context[last_end..].find(&needle) {
                Some(pos) => {
                    last_end += pos + needle.len();
                    true
                }
                None => false,
            }
        })
    }
}
