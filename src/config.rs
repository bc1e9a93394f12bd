//! Configuration types for URL-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share a config between the library API and the HTTP server,
//! and to log it when diagnosing why two runs differed.
//!
//! # Design choice: builder over constructor
//! The builder lets callers set only what they care about and rely on
//! well-documented defaults for the rest; per-request options from the HTTP
//! layer are applied on a clone of the server-wide config.

use crate::error::Url2mdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two output transforms to apply to the raw markdown.
///
/// `Complete` wraps the raw conversion output, untouched, in a metadata
/// envelope. `Simple` strips it down to headings, lists, and plain
/// paragraphs. See [`crate::pipeline::render`] for the exact rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownMode {
    /// Content-only: headings, lists, and marker-free paragraph lines.
    Simple,
    /// Metadata header + verbatim content + footer. (default)
    #[default]
    Complete,
}

impl MarkdownMode {
    /// Lowercase wire name, as accepted in request options.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkdownMode::Simple => "simple",
            MarkdownMode::Complete => "complete",
        }
    }
}

impl FromStr for MarkdownMode {
    type Err = Url2mdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(MarkdownMode::Simple),
            "complete" => Ok(MarkdownMode::Complete),
            other => Err(Url2mdError::InvalidConfig(format!(
                "markdown_type must be 'simple' or 'complete', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for MarkdownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a URL-to-Markdown conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use url2md::{ConversionConfig, MarkdownMode};
///
/// let config = ConversionConfig::builder()
///     .markdown_mode(MarkdownMode::Simple)
///     .fetch_timeout_secs(10)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Output transform applied to the engine's raw markdown. Default: `Complete`.
    pub markdown_mode: MarkdownMode,

    /// Total HTTP fetch timeout in seconds. Range: 1–600. Default: 30.
    ///
    /// Covers connect, request, and body download together. Slow
    /// origins serving large PDFs need more; interactive callers usually
    /// want less. The HTTP layer lets each request lower or raise this.
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with the fetch. Default: a desktop browser UA.
    ///
    /// Many origins answer `403` or serve a degraded page to obvious bot
    /// agents. A browser UA keeps the fetched document representative of
    /// what a reader would see.
    pub user_agent: String,
}

/// Default User-Agent: a mainstream desktop browser signature.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            markdown_mode: MarkdownMode::default(),
            fetch_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Clone this config with per-request overrides applied.
    ///
    /// Used by the HTTP layer: the server keeps one base config and each
    /// request may override the mode and the timeout, nothing else.
    pub fn with_overrides(
        &self,
        mode: Option<MarkdownMode>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, Url2mdError> {
        let mut c = self.clone();
        if let Some(m) = mode {
            c.markdown_mode = m;
        }
        if let Some(t) = timeout_secs {
            if t == 0 {
                return Err(Url2mdError::InvalidConfig(
                    "timeout must be a positive number of seconds".into(),
                ));
            }
            c.fetch_timeout_secs = t;
        }
        Ok(c)
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn markdown_mode(mut self, mode: MarkdownMode) -> Self {
        self.config.markdown_mode = mode;
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.fetch_timeout_secs = secs.clamp(1, 600);
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Url2mdError> {
        let c = &self.config;
        if c.fetch_timeout_secs == 0 {
            return Err(Url2mdError::InvalidConfig(
                "Fetch timeout must be ≥ 1 second".into(),
            ));
        }
        if c.user_agent.trim().is_empty() {
            return Err(Url2mdError::InvalidConfig(
                "User-Agent must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_complete() {
        assert_eq!(ConversionConfig::default().markdown_mode, MarkdownMode::Complete);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Simple".parse::<MarkdownMode>().unwrap(), MarkdownMode::Simple);
        assert_eq!("COMPLETE".parse::<MarkdownMode>().unwrap(), MarkdownMode::Complete);
        assert!("markdown".parse::<MarkdownMode>().is_err());
    }

    #[test]
    fn builder_clamps_timeout() {
        let c = ConversionConfig::builder()
            .fetch_timeout_secs(0)
            .build()
            .unwrap();
        assert_eq!(c.fetch_timeout_secs, 1);

        let c = ConversionConfig::builder()
            .fetch_timeout_secs(10_000)
            .build()
            .unwrap();
        assert_eq!(c.fetch_timeout_secs, 600);
    }

    #[test]
    fn overrides_apply_mode_and_timeout() {
        let base = ConversionConfig::default();
        let c = base
            .with_overrides(Some(MarkdownMode::Simple), Some(5))
            .unwrap();
        assert_eq!(c.markdown_mode, MarkdownMode::Simple);
        assert_eq!(c.fetch_timeout_secs, 5);
        // base untouched
        assert_eq!(base.markdown_mode, MarkdownMode::Complete);
    }

    #[test]
    fn zero_timeout_override_rejected() {
        let base = ConversionConfig::default();
        assert!(base.with_overrides(None, Some(0)).is_err());
    }

    #[test]
    fn mode_serde_roundtrip() {
        let json = serde_json::to_string(&MarkdownMode::Simple).unwrap();
        assert_eq!(json, "\"simple\"");
        let back: MarkdownMode = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(back, MarkdownMode::Complete);
    }
}
