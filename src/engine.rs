//! The document-conversion capability consumed by the pipeline.
//!
//! ## Why a trait?
//!
//! Real document understanding (layout analysis, OCR, table extraction)
//! lives in heavyweight external engines. The pipeline only needs one
//! operation from them: turn a staged file into a raw markdown export and,
//! when known, a page count. Modelling that as an injected [`DocumentEngine`]
//! keeps the fetch/stage/render logic independently testable with a stub
//! engine, and lets deployments swap in a richer backend without touching
//! this crate. The engine is constructed once at startup and passed in —
//! there is no process-global converter instance.

use crate::error::Url2mdError;
use crate::pipeline::stage::FileKind;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// A raw conversion result produced by an engine.
#[derive(Debug, Clone)]
pub struct EngineDocument {
    /// Markdown export of the document, unfiltered.
    pub markdown: String,
    /// Number of pages, when the format has a meaningful page notion.
    pub page_count: Option<usize>,
}

/// A document-conversion backend.
///
/// Implementations receive the path of a staged file (the pipeline has
/// already written the downloaded bytes to disk with the right extension)
/// and the inferred [`FileKind`] as a hint.
#[async_trait]
pub trait DocumentEngine: Send + Sync {
    /// Convert the staged file into a raw markdown export.
    async fn convert(&self, file: &Path, kind: FileKind) -> Result<EngineDocument, Url2mdError>;

    /// Short engine name for health reporting and logs.
    fn name(&self) -> &str;
}

/// The built-in engine: HTML via [`html2md`], plain text verbatim.
///
/// Good enough to run the server against ordinary web pages. PDF and DOCX
/// need a real document-understanding backend and are rejected with
/// [`Url2mdError::UnsupportedFormat`].
#[derive(Debug, Default)]
pub struct HtmlEngine;

impl HtmlEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentEngine for HtmlEngine {
    async fn convert(&self, file: &Path, kind: FileKind) -> Result<EngineDocument, Url2mdError> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| Url2mdError::EngineFailed {
                detail: format!("failed to read staged file: {e}"),
            })?;
        // Upstream charset declarations are not honoured; lossy UTF-8 keeps
        // the common case (UTF-8 and ASCII-compatible pages) correct.
        let text = String::from_utf8_lossy(&bytes);

        let markdown = match kind {
            FileKind::Html => html2md::parse_html(&text),
            FileKind::Txt => text.into_owned(),
            FileKind::Pdf | FileKind::Docx => {
                return Err(Url2mdError::UnsupportedFormat {
                    engine: self.name().to_string(),
                    extension: kind.extension(),
                })
            }
        };

        debug!(
            "Engine '{}' produced {} bytes of markdown from {}",
            self.name(),
            markdown.len(),
            file.display()
        );

        Ok(EngineDocument {
            markdown,
            page_count: None,
        })
    }

    fn name(&self) -> &str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn convert_temp(content: &[u8], kind: FileKind) -> Result<EngineDocument, Url2mdError> {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(content).unwrap();
        HtmlEngine::new().convert(tmp.path(), kind).await
    }

    #[tokio::test]
    async fn html_becomes_markdown() {
        let doc = convert_temp(
            b"<html><body><h1>Hello</h1><p>World</p></body></html>",
            FileKind::Html,
        )
        .await
        .unwrap();
        assert!(doc.markdown.contains("Hello"));
        assert!(doc.markdown.contains("World"));
        assert!(doc.page_count.is_none());
    }

    #[tokio::test]
    async fn text_passes_through_verbatim() {
        let doc = convert_temp(b"plain text\nsecond line", FileKind::Txt)
            .await
            .unwrap();
        assert_eq!(doc.markdown, "plain text\nsecond line");
    }

    #[tokio::test]
    async fn pdf_is_rejected() {
        let err = convert_temp(b"%PDF-1.7", FileKind::Pdf).await.unwrap_err();
        assert!(matches!(err, Url2mdError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn missing_file_is_engine_failure() {
        let err = HtmlEngine::new()
            .convert(Path::new("/definitely/not/here.html"), FileKind::Html)
            .await
            .unwrap_err();
        assert!(matches!(err, Url2mdError::EngineFailed { .. }));
    }
}
