use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the entire launcher backend.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Version catalog returned HTTP {0}")]
    CatalogUnavailable(u16),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Versions ────────────────────────────────────────
    #[error("Version not found: {0}")]
    VersionNotFound(String),

    // ── User input ──────────────────────────────────────
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Not an APK file: {0:?}")]
    NotAnApk(PathBuf),

    // ── External tools ──────────────────────────────────
    #[error("Extractor failed ({code:?}): {stderr}")]
    ExtractionFailed { code: Option<i32>, stderr: String },

    #[error("Extractor timed out after {0} seconds")]
    ExtractionTimeout(u64),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    // ── Packages ────────────────────────────────────────
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Not a recognized package archive: {0:?}")]
    UnsupportedPackage(PathBuf),

    #[error("Archive entry escapes the extraction root: {0}")]
    UnsafeArchivePath(String),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
