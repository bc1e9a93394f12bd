//! # url2md
//!
//! Fetch a URL, convert the document behind it to Markdown, and post-process
//! the result — as a library or as an HTTP service.
//!
//! ## Why this crate?
//!
//! Raw converter output is rarely what a downstream consumer wants: chat and
//! indexing pipelines choke on tables, image embeds, and code fences, while
//! archival consumers want the full export plus provenance (where it came
//! from, when, and what the origin server said). url2md wraps one fetch and
//! one engine call with exactly those two renditions — a `simple`
//! content-only filter and a `complete` metadata envelope.
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL
//!  │
//!  ├─ 1. Fetch   download with timeout, capture response headers
//!  ├─ 2. Stage   write bytes to a temp file with the inferred extension
//!  ├─ 3. Engine  injected DocumentEngine exports raw markdown
//!  └─ 4. Render  `simple` filter or `complete` envelope
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url2md::{convert, ConversionConfig, DocumentEngine, HtmlEngine, MarkdownMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine: Arc<dyn DocumentEngine> = Arc::new(HtmlEngine::new());
//!     let config = ConversionConfig::builder()
//!         .markdown_mode(MarkdownMode::Simple)
//!         .build()?;
//!     let output = convert("https://example.com", &engine, &config).await?;
//!     println!("{}", output.markdown);
//!     eprintln!("fetched {} bytes in {}ms",
//!         output.metadata.content_length,
//!         output.stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `server` | on      | HTTP API (axum + tower-http) and the `url2md-server` binary |
//!
//! Disable `server` when using only the library:
//! ```toml
//! url2md = { version = "0.3", default-features = false }
//! ```
//!
//! ## Bring your own engine
//!
//! The conversion backend is an injected [`DocumentEngine`], constructed once
//! and passed in — never a process-global. The built-in [`HtmlEngine`]
//! handles web pages and plain text; plug in a document-understanding
//! backend for PDF and DOCX.

// ── Modules ──────────────────────────────────────────────────────────────

#[cfg(feature = "server")]
pub mod api;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, MarkdownMode, DEFAULT_USER_AGENT};
pub use convert::{convert, convert_sync};
pub use engine::{DocumentEngine, EngineDocument, HtmlEngine};
pub use error::Url2mdError;
pub use output::{ConversionMetadata, ConversionOutput, ConversionStats, FetchMetadata};
pub use pipeline::stage::FileKind;
