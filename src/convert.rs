//! Conversion entry points.
//!
//! One request-scoped flow: fetch the URL, stage the bytes, hand the staged
//! file to the injected engine, render the export. Nothing is cached or
//! shared between calls; the temp file lives exactly as long as the engine
//! needs it.

use crate::config::ConversionConfig;
use crate::engine::DocumentEngine;
use crate::error::Url2mdError;
use crate::output::{ConversionMetadata, ConversionOutput, ConversionStats};
use crate::pipeline::{fetch, render, stage};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Convert the document behind `url` to Markdown.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `url`    — HTTP or HTTPS URL of the document
/// * `engine` — conversion backend that turns the staged file into markdown
/// * `config` — fetch and rendering configuration
///
/// # Errors
/// Returns `Err(Url2mdError)` when the URL is invalid, the fetch fails or
/// times out, staging fails, or the engine rejects the document. Rendering
/// itself cannot fail.
pub async fn convert(
    url: impl AsRef<str>,
    engine: &Arc<dyn DocumentEngine>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Url2mdError> {
    let total_start = Instant::now();
    let url = url.as_ref();
    info!("Starting conversion: {}", url);

    // ── Step 1: Fetch ────────────────────────────────────────────────────
    let fetch_start = Instant::now();
    let fetched = fetch::fetch_url(url, config).await?;
    let fetch_duration_ms = fetch_start.elapsed().as_millis() as u64;

    // ── Step 2: Infer kind and stage to disk ─────────────────────────────
    let kind = stage::FileKind::from_url(url);
    let staged = stage::stage_bytes(&fetched.bytes, kind).await?;
    debug!("Inferred kind {:?} for {}", kind, url);

    // ── Step 3: Engine conversion ────────────────────────────────────────
    let engine_start = Instant::now();
    let document = engine.convert(staged.path(), kind).await?;
    let engine_duration_ms = engine_start.elapsed().as_millis() as u64;
    info!(
        "Engine '{}' exported {} bytes of raw markdown",
        engine.name(),
        document.markdown.len()
    );

    // ── Step 4: Assemble metadata ────────────────────────────────────────
    let metadata = ConversionMetadata {
        source_url: url.to_string(),
        file_kind: kind,
        content_length: fetched.bytes.len(),
        fetched_at: fetched.fetched_at,
        page_count: document.page_count,
        markdown_mode: config.markdown_mode,
        fetch: fetched.metadata,
    };

    // ── Step 5: Render ───────────────────────────────────────────────────
    let markdown = render::render(&document.markdown, config.markdown_mode, &metadata);

    // ── Step 6: Stats ────────────────────────────────────────────────────
    let stats = ConversionStats {
        fetch_duration_ms,
        engine_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        raw_markdown_bytes: document.markdown.len(),
        rendered_markdown_bytes: markdown.len(),
    };

    info!(
        "Conversion complete: {} → {} bytes ({} mode, {}ms total)",
        stats.raw_markdown_bytes,
        stats.rendered_markdown_bytes,
        config.markdown_mode,
        stats.total_duration_ms
    );

    Ok(ConversionOutput {
        markdown,
        metadata,
        stats,
    })
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    url: impl AsRef<str>,
    engine: &Arc<dyn DocumentEngine>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Url2mdError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Url2mdError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(url, engine, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HtmlEngine;

    #[test]
    fn invalid_url_fails_before_any_network_io() {
        let engine: Arc<dyn DocumentEngine> = Arc::new(HtmlEngine::new());
        let err = tokio_test::block_on(convert(
            "not-a-url",
            &engine,
            &ConversionConfig::default(),
        ))
        .unwrap_err();
        assert!(matches!(err, Url2mdError::InvalidUrl { .. }));
    }

    // End-to-end conversion against a live local listener is covered in
    // tests/convert.rs.
}
