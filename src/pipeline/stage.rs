//! Temp-file staging: put downloaded bytes where an engine can open them.
//!
//! ## Why stage to a temp file?
//!
//! Document engines are file-based — they expect a filesystem path with a
//! recognisable extension, not a byte buffer. Writing the download into a
//! fresh `TempDir` gives the engine a path it can open while ensuring
//! cleanup happens automatically when [`StagedFile`] is dropped, even if the
//! request handler panics.

use crate::error::Url2mdError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Document kind inferred from the source URL's suffix.
///
/// The extension hint steers the engine; anything without a recognised
/// suffix is treated as a web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Web page (default when no suffix matches).
    #[default]
    Html,
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    /// Infer the kind from a URL's trailing characters.
    pub fn from_url(url: &str) -> Self {
        let tail = url.to_ascii_lowercase();
        if tail.ends_with(".pdf") {
            FileKind::Pdf
        } else if tail.ends_with(".docx") {
            FileKind::Docx
        } else if tail.ends_with(".txt") {
            FileKind::Txt
        } else {
            FileKind::Html
        }
    }

    /// File extension used for the staged file, dot included.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Html => ".html",
            FileKind::Pdf => ".pdf",
            FileKind::Docx => ".docx",
            FileKind::Txt => ".txt",
        }
    }
}

/// A downloaded document staged on disk.
///
/// The `TempDir` is kept alive to prevent cleanup until the engine has
/// finished reading the file.
pub struct StagedFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl StagedFile {
    /// Path of the staged file, valid for the lifetime of this value.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `bytes` into a fresh temp directory with the extension for `kind`.
pub async fn stage_bytes(bytes: &[u8], kind: FileKind) -> Result<StagedFile, Url2mdError> {
    let temp_dir = TempDir::new().map_err(|e| Url2mdError::Internal(format!("tempdir: {e}")))?;
    let path = temp_dir.path().join(format!("staged{}", kind.extension()));

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| Url2mdError::StagingFailed {
            path: path.clone(),
            source: e,
        })?;

    debug!("Staged {} bytes at {}", bytes.len(), path.display());

    Ok(StagedFile {
        path,
        _temp_dir: temp_dir,
    })
}
