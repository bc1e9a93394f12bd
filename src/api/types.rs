//! Wire types for the HTTP surface.

use crate::config::MarkdownMode;
use crate::output::{ConversionMetadata, ConversionOutput, ConversionStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// HTTP or HTTPS URL of the document to convert.
    pub url: String,
    /// Per-request overrides; everything else comes from the server config.
    #[serde(default)]
    pub options: ConvertOptions,
}

/// Per-request options accepted by both convert endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertOptions {
    /// `"simple"` or `"complete"`. Server default when absent.
    pub markdown_type: Option<MarkdownMode>,
    /// Fetch timeout in seconds. Must be positive.
    pub timeout: Option<u64>,
}

/// Query string of `GET /convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertQuery {
    pub url: String,
    pub markdown_type: Option<MarkdownMode>,
    pub timeout: Option<u64>,
}

impl ConvertQuery {
    /// Collapse the flat query parameters into the shared options shape.
    pub fn into_parts(self) -> (String, ConvertOptions) {
        let options = ConvertOptions {
            markdown_type: self.markdown_type,
            timeout: self.timeout,
        };
        (self.url, options)
    }
}

/// Uniform response envelope for both convert endpoints.
///
/// Collaborator failures surface here as `success: false` plus an error
/// string — they are never propagated as a bare 5xx with internal detail.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ConversionMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ConversionStats>,
    pub processed_at: DateTime<Utc>,
}

impl ConvertResponse {
    pub fn ok(output: ConversionOutput) -> Self {
        Self {
            success: true,
            markdown: Some(output.markdown),
            error: None,
            metadata: Some(output.metadata),
            stats: Some(output.stats),
            processed_at: Utc::now(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            markdown: None,
            error: Some(error.into()),
            metadata: None,
            stats: None,
            processed_at: Utc::now(),
        }
    }
}

/// Response of `GET /` and `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Name of the injected conversion engine.
    pub engine: String,
}
