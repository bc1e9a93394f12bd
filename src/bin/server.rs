//! Server binary for url2md.
//!
//! A thin shim over the library crate that maps CLI flags to a
//! `ConversionConfig`, builds the engine, and serves the HTTP API.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url2md::{api, ConversionConfig, DocumentEngine, HtmlEngine, MarkdownMode};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default address (0.0.0.0:8000)
  url2md-server

  # Local-only, custom port, simple output by default
  url2md-server --host 127.0.0.1 --port 9090 --markdown-type simple

  # Slow origins: raise the default fetch timeout
  url2md-server --timeout 120

  # Convert a page (per-request options override the server defaults)
  curl -X POST http://localhost:8000/convert \
       -H 'Content-Type: application/json' \
       -d '{"url": "https://example.com", "options": {"markdown_type": "simple", "timeout": 10}}'

  # Quick test via GET
  curl 'http://localhost:8000/convert?url=https://example.com'

  # Health check
  curl http://localhost:8000/health

ENVIRONMENT VARIABLES:
  URL2MD_HOST           Listen host
  URL2MD_PORT           Listen port
  URL2MD_TIMEOUT        Default fetch timeout in seconds
  URL2MD_MARKDOWN_TYPE  Default output mode (simple | complete)
  URL2MD_USER_AGENT     User-Agent for outbound fetches
  RUST_LOG              tracing filter (overrides -v/-q)
"#;

/// Serve the URL-to-Markdown conversion API over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "url2md-server",
    version,
    about = "Serve the URL-to-Markdown conversion API over HTTP",
    long_about = "Fetches a URL, converts the document behind it to Markdown with the \
built-in engine, and returns either a content-only ('simple') or metadata-wrapped \
('complete') rendition. Per-request options may override the mode and timeout.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Listen host.
    #[arg(long, env = "URL2MD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port.
    #[arg(short, long, env = "URL2MD_PORT", default_value_t = 8000)]
    port: u16,

    /// Default fetch timeout in seconds (1–600).
    #[arg(long, env = "URL2MD_TIMEOUT", default_value_t = 30,
          value_parser = clap::value_parser!(u64).range(1..=600))]
    timeout: u64,

    /// Default output mode: simple or complete.
    #[arg(long, env = "URL2MD_MARKDOWN_TYPE", default_value = "complete")]
    markdown_type: String,

    /// User-Agent for outbound fetches.
    #[arg(long, env = "URL2MD_USER_AGENT")]
    user_agent: Option<String>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "URL2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "URL2MD_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mode: MarkdownMode = cli
        .markdown_type
        .parse()
        .context("Invalid --markdown-type")?;

    let mut builder = ConversionConfig::builder()
        .markdown_mode(mode)
        .fetch_timeout_secs(cli.timeout);
    if let Some(ref ua) = cli.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Serve ────────────────────────────────────────────────────────────
    let engine: Arc<dyn DocumentEngine> = Arc::new(HtmlEngine::new());
    let addr = format!("{}:{}", cli.host, cli.port);

    api::serve(&addr, engine, config)
        .await
        .context("Server failed")?;

    Ok(())
}
