//! Error types for the url2md library.
//!
//! A single fatal error type, [`Url2mdError`], covers every way a conversion
//! can fail: the URL is malformed, the download fails or times out, the
//! staged file cannot be written, or the conversion engine rejects the
//! document. The markdown filter itself is total over its input and has no
//! error cases.
//!
//! The HTTP layer maps each variant to a status code and a uniform
//! unsuccessful JSON body — internal detail never leaks past the handler
//! boundary (see `api::handlers`).

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the url2md library.
#[derive(Debug, Error)]
pub enum Url2mdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input string is not an HTTP or HTTPS URL.
    #[error("Invalid URL '{url}': must start with http:// or https://")]
    InvalidUrl { url: String },

    /// The URL was syntactically valid but the download failed.
    #[error("Failed to fetch '{url}': {reason}\nCheck the URL is reachable from this host.")]
    ConnectionFailed { url: String, reason: String },

    /// The download exceeded the configured timeout.
    #[error("Fetch timed out after {secs}s for '{url}'\nRaise the per-request timeout option or --timeout.")]
    FetchTimeout { url: String, secs: u64 },

    /// The server answered with a non-success status.
    #[error("Upstream returned HTTP {status} for '{url}'")]
    UpstreamStatus { url: String, status: u16 },

    // ── Staging errors ────────────────────────────────────────────────────
    /// The downloaded bytes could not be written to a temp file.
    #[error("Failed to stage downloaded content at '{path}': {source}")]
    StagingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Engine errors ─────────────────────────────────────────────────────
    /// The engine does not support this document format.
    #[error("Engine '{engine}' does not support {extension} documents")]
    UnsupportedFormat {
        engine: String,
        extension: &'static str,
    },

    /// The conversion engine failed on a document it claims to support.
    #[error("Document conversion failed: {detail}")]
    EngineFailed { detail: String },

    // ── Server errors ─────────────────────────────────────────────────────
    /// The HTTP server could not bind its listen address.
    #[error("Failed to bind '{addr}': {source}")]
    BindFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Url2mdError {
    /// True when retrying the same request might succeed.
    ///
    /// Timeouts and connection failures are usually transient; everything
    /// else reflects the input or the deployment and will fail again.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Url2mdError::FetchTimeout { .. } | Url2mdError::ConnectionFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_display() {
        let e = Url2mdError::InvalidUrl {
            url: "ftp://example.com".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("ftp://example.com"), "got: {msg}");
        assert!(msg.contains("http://"));
    }

    #[test]
    fn timeout_display() {
        let e = Url2mdError::FetchTimeout {
            url: "https://example.com/doc.pdf".into(),
            secs: 30,
        };
        assert!(e.to_string().contains("30s"));
        assert!(e.is_transient());
    }

    #[test]
    fn upstream_status_display() {
        let e = Url2mdError::UpstreamStatus {
            url: "https://example.com".into(),
            status: 503,
        };
        assert!(e.to_string().contains("503"));
        assert!(!e.is_transient());
    }

    #[test]
    fn unsupported_format_display() {
        let e = Url2mdError::UnsupportedFormat {
            engine: "html".into(),
            extension: ".docx",
        };
        assert!(e.to_string().contains(".docx"));
        assert!(e.to_string().contains("html"));
    }
}
