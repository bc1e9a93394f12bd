//! End-to-end tests for the library conversion flow.
//!
//! No external network: every test spins up a local axum listener that
//! serves fixture content, then points `convert` at it. This exercises the
//! real fetch → stage → engine → render path including header capture,
//! timeouts, and error mapping.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url2md::{
    convert, ConversionConfig, DocumentEngine, EngineDocument, FileKind, HtmlEngine,
    MarkdownMode, Url2mdError,
};

const PAGE_HTML: &str = "<html><body>\
<h1>Hello</h1>\
<p>A plain paragraph.</p>\
<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>\
</body></html>";

const DOC_TXT: &str = "# Title\n\nSome text with a | pipe\n- item one\n```code```\n> quote\n";

// ── Test origin server ───────────────────────────────────────────────────

/// Serve fixture documents on an ephemeral local port.
async fn spawn_origin() -> String {
    use axum::http::header;
    use axum::routing::get;
    use axum::Router;

    let app = Router::new()
        .route(
            "/page.html",
            get(|| async {
                (
                    [
                        (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                        (header::SERVER, "fixture"),
                    ],
                    PAGE_HTML,
                )
            }),
        )
        .route("/doc.txt", get(|| async { DOC_TXT }))
        .route("/report.pdf", get(|| async { "%PDF-1.7 not really" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn html_engine() -> Arc<dyn DocumentEngine> {
    Arc::new(HtmlEngine::new())
}

// ── Happy path ───────────────────────────────────────────────────────────

#[tokio::test]
async fn complete_mode_wraps_raw_and_captures_headers() {
    let origin = spawn_origin().await;
    let url = format!("{origin}/doc.txt");

    let output = convert(&url, &html_engine(), &ConversionConfig::default())
        .await
        .unwrap();

    // Complete mode embeds the engine export verbatim.
    assert!(output.markdown.contains(DOC_TXT));
    assert!(output.markdown.starts_with("---\n# Converted Document"));
    assert!(output.markdown.contains(&format!("- **Source URL:** {url}")));
    assert!(output.markdown.contains("- **HTTP status:** 200"));

    assert_eq!(output.metadata.file_kind, FileKind::Txt);
    assert_eq!(output.metadata.content_length, DOC_TXT.len());
    assert_eq!(output.metadata.fetch.status_code, 200);
    assert_eq!(output.stats.raw_markdown_bytes, DOC_TXT.len());
    assert!(output.stats.rendered_markdown_bytes > DOC_TXT.len());
}

#[tokio::test]
async fn simple_mode_filters_marked_lines() {
    let origin = spawn_origin().await;
    let config = ConversionConfig::builder()
        .markdown_mode(MarkdownMode::Simple)
        .build()
        .unwrap();

    let output = convert(format!("{origin}/doc.txt"), &html_engine(), &config)
        .await
        .unwrap();

    assert!(output.markdown.contains("# Title"));
    assert!(output.markdown.contains("- item one"));
    assert!(!output.markdown.contains("pipe"));
    assert!(!output.markdown.contains("code"));
    assert!(!output.markdown.contains("quote"));
    assert!(!output.markdown.contains("\n\n\n"));
}

#[tokio::test]
async fn html_page_is_converted_and_headers_flow_through() {
    let origin = spawn_origin().await;

    let output = convert(
        format!("{origin}/page.html"),
        &html_engine(),
        &ConversionConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(output.metadata.file_kind, FileKind::Html);
    assert!(output.markdown.contains("Hello"));
    assert!(!output.markdown.contains("<h1>"));
    assert_eq!(
        output.metadata.fetch.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(output.metadata.fetch.server.as_deref(), Some("fixture"));
    assert!(output.markdown.contains("- **Server:** fixture"));
}

// ── Engine injection ─────────────────────────────────────────────────────

struct StubEngine;

#[async_trait]
impl DocumentEngine for StubEngine {
    async fn convert(&self, _file: &Path, _kind: FileKind) -> Result<EngineDocument, Url2mdError> {
        Ok(EngineDocument {
            markdown: "# Stubbed export\n".to_string(),
            page_count: Some(7),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[tokio::test]
async fn injected_engine_drives_output_and_page_count() {
    let origin = spawn_origin().await;
    let engine: Arc<dyn DocumentEngine> = Arc::new(StubEngine);

    let output = convert(
        format!("{origin}/report.pdf"),
        &engine,
        &ConversionConfig::default(),
    )
    .await
    .unwrap();

    assert!(output.markdown.contains("# Stubbed export"));
    assert_eq!(output.metadata.page_count, Some(7));
    assert_eq!(output.metadata.file_kind, FileKind::Pdf);
}

// ── Error mapping ────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_document_maps_to_upstream_status() {
    let origin = spawn_origin().await;

    let err = convert(
        format!("{origin}/not-there.html"),
        &html_engine(),
        &ConversionConfig::default(),
    )
    .await
    .unwrap_err();

    match err {
        Url2mdError::UpstreamStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_origin_maps_to_fetch_timeout() {
    let origin = spawn_origin().await;
    let config = ConversionConfig::builder()
        .fetch_timeout_secs(1)
        .build()
        .unwrap();

    let err = convert(format!("{origin}/slow"), &html_engine(), &config)
        .await
        .unwrap_err();

    match err {
        Url2mdError::FetchTimeout { secs, .. } => assert_eq!(secs, 1),
        other => panic!("expected FetchTimeout, got {other:?}"),
    }
}

#[tokio::test]
async fn closed_port_maps_to_connection_failed() {
    // Bind then drop to get a port with (almost certainly) no listener.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = convert(
        format!("http://{addr}/x"),
        &html_engine(),
        &ConversionConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, Url2mdError::ConnectionFailed { .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn builtin_engine_rejects_pdf() {
    let origin = spawn_origin().await;

    let err = convert(
        format!("{origin}/report.pdf"),
        &html_engine(),
        &ConversionConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, Url2mdError::UnsupportedFormat { extension: ".pdf", .. }),
        "got {err:?}"
    );
}
