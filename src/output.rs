//! Output types returned by a conversion.
//!
//! All values here are request-scoped: created for one conversion, serialised
//! into the response, and discarded. Nothing is shared across requests.

use crate::config::MarkdownMode;
use crate::pipeline::stage::FileKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP response facts captured during the fetch, before the body is read.
///
/// Only headers the metadata envelope cares about are kept; everything else
/// is dropped at the fetch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchMetadata {
    /// Numeric HTTP status of the upstream response.
    pub status_code: u16,
    /// `Content-Type` header, verbatim.
    pub content_type: Option<String>,
    /// `Content-Length` header, when present and numeric.
    pub content_length: Option<u64>,
    /// `Last-Modified` header, verbatim.
    pub last_modified: Option<String>,
    /// `Server` header, verbatim.
    pub server: Option<String>,
}

/// Descriptive facts about one fetch-and-convert operation.
///
/// Attached to the `complete` output envelope and returned alongside the
/// markdown in API responses. Purely descriptive — nothing here feeds back
/// into the conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionMetadata {
    /// The URL the document was fetched from.
    pub source_url: String,
    /// Document kind inferred from the URL suffix.
    pub file_kind: FileKind,
    /// Size of the downloaded body in bytes.
    pub content_length: usize,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
    /// Page count reported by the engine, when it knows one.
    pub page_count: Option<usize>,
    /// Transform that produced the rendered markdown.
    pub markdown_mode: MarkdownMode,
    /// Upstream response facts.
    pub fetch: FetchMetadata,
}

/// Timing and size statistics for one conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Wall-clock time spent downloading the document.
    pub fetch_duration_ms: u64,
    /// Wall-clock time spent inside the conversion engine.
    pub engine_duration_ms: u64,
    /// End-to-end time including staging and rendering.
    pub total_duration_ms: u64,
    /// Size of the engine's raw markdown export.
    pub raw_markdown_bytes: usize,
    /// Size of the rendered (filtered or wrapped) markdown.
    pub rendered_markdown_bytes: usize,
}

/// The result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Rendered markdown, per the requested [`MarkdownMode`].
    pub markdown: String,
    /// Facts about the fetch and conversion.
    pub metadata: ConversionMetadata,
    /// Timings and sizes.
    pub stats: ConversionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> ConversionMetadata {
        ConversionMetadata {
            source_url: "https://example.org/page.html".into(),
            file_kind: FileKind::Html,
            content_length: 1234,
            fetched_at: Utc::now(),
            page_count: None,
            markdown_mode: MarkdownMode::Complete,
            fetch: FetchMetadata {
                status_code: 200,
                content_type: Some("text/html; charset=utf-8".into()),
                content_length: Some(1234),
                last_modified: None,
                server: Some("nginx".into()),
            },
        }
    }

    #[test]
    fn metadata_serialises_with_null_optionals() {
        let json = serde_json::to_value(sample_metadata()).unwrap();
        assert_eq!(json["source_url"], "https://example.org/page.html");
        assert_eq!(json["fetch"]["status_code"], 200);
        assert!(json["fetch"]["last_modified"].is_null());
        assert!(json["page_count"].is_null());
    }

    #[test]
    fn output_roundtrips_through_json() {
        let out = ConversionOutput {
            markdown: "# Title\n".into(),
            metadata: sample_metadata(),
            stats: ConversionStats::default(),
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: ConversionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.markdown, "# Title\n");
        assert_eq!(back.metadata.fetch.server.as_deref(), Some("nginx"));
    }
}
