use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::IngestError;
use crate::ingest::{parse_quote_line, QuoteParser};
use crate::model::Quote;

/// Wall-clock limit for one external extraction run.
pub const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for PDF text extraction backends.
///
/// Narrow seam around the external utility so the parser can be tested
/// against a fake backend without spawning a real process.
pub trait TextExtractor: Send + Sync {
    /// Extract a plain-text rendering of the PDF at `path`.
    fn extract_text(&self, path: &Path, timeout: Duration) -> Result<String, IngestError>;

    /// Name of this extraction backend (for diagnostics).
    fn name(&self) -> &str;
}

/// Extraction backend using pdftotext (from poppler-utils).
///
/// Runs `pdftotext -layout <pdf> <tmp.txt>` under a deadline; the
/// intermediate text file is removed whether extraction succeeds or not.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, path: &Path, timeout: Duration) -> Result<String, IngestError> {
        // Dropping the handle removes the intermediate file on every exit path.
        let out_file = tempfile::Builder::new().suffix(".txt").tempfile()?;

        let mut child = Command::new("pdftotext")
            .arg("-layout")
            .arg(path)
            .arg(out_file.path())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    IngestError::PdftotextNotFound
                } else {
                    IngestError::Io(e)
                }
            })?;

        let status = match child.wait_timeout(timeout)? {
            Some(status) => status,
            None => {
                child.kill().ok();
                child.wait().ok();
                return Err(IngestError::PdftotextTimeout {
                    path: path.to_path_buf(),
                    secs: timeout.as_secs(),
                });
            }
        };

        if !status.success() {
            let stderr = child
                .stderr
                .take()
                .map(|mut pipe| {
                    let mut buf = String::new();
                    std::io::Read::read_to_string(&mut pipe, &mut buf).ok();
                    buf.trim().to_string()
                })
                .unwrap_or_default();
            return Err(IngestError::PdftotextFailed {
                code: status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(std::fs::read_to_string(out_file.path())?)
    }

    fn name(&self) -> &str {
        "pdftotext"
    }
}

/// Parser for PDF quote files, one `"body" - author` line each in the
/// extracted text rendering.
pub struct PdfParser<E = PdftotextExtractor> {
    extractor: E,
    timeout: Duration,
}

impl PdfParser<PdftotextExtractor> {
    pub fn new() -> Self {
        PdfParser {
            extractor: PdftotextExtractor,
            timeout: EXTRACTION_TIMEOUT,
        }
    }
}

impl Default for PdfParser<PdftotextExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> PdfParser<E> {
    /// A parser using a custom extraction backend.
    pub fn with_extractor(extractor: E) -> Self {
        PdfParser {
            extractor,
            timeout: EXTRACTION_TIMEOUT,
        }
    }
}

impl<E: TextExtractor> QuoteParser for PdfParser<E> {
    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        let text = self.extractor.extract_text(path, self.timeout)?;
        let quotes: Vec<Quote> = text.lines().filter_map(parse_quote_line).collect();

        tracing::info!(
            count = quotes.len(),
            backend = self.extractor.name(),
            path = %path.display(),
            "parsed PDF file"
        );
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "pdf"
    }
}
