use std::path::PathBuf;

/// Errors from the quote ingestion side.
///
/// A malformed individual line or row is never an error; parsers skip it.
/// These variants cover failures of the whole file or the dispatch itself.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported file type '.{extension}' for file: {path}")]
    UnsupportedFileType { path: PathBuf, extension: String },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("CSV file {path} is missing required column(s): {missing}")]
    MissingColumns { path: PathBuf, missing: String },

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("pdftotext timed out after {secs}s on {path}")]
    PdftotextTimeout { path: PathBuf, secs: u64 },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the image captioning side.
#[derive(Debug, thiserror::Error)]
pub enum MemeError {
    #[error("image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("cannot open image '{path}': {source}")]
    ImageUnreadable {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to save meme to '{path}': {source}")]
    SaveFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
