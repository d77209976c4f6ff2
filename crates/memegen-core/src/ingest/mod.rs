pub mod csv;
pub mod docx;
pub mod line;
pub mod pdf;
pub mod text;

use std::path::Path;

use crate::error::IngestError;
use crate::model::Quote;

pub use line::parse_quote_line;

/// Trait for format-specific quote file parsers.
///
/// Each parser declares the extensions it claims and converts one file
/// into a sequence of quotes. Per-line malformed content is skipped, not
/// an error; failures of the whole file surface as [`IngestError`].
pub trait QuoteParser: Send + Sync {
    /// Extensions this parser claims (lower-case, no leading dot).
    fn extensions(&self) -> &'static [&'static str];

    /// Parse the file into quotes.
    fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError>;

    /// Name of this parser (for diagnostics).
    fn name(&self) -> &str;

    /// Whether this parser claims the path, by lower-cased extension.
    fn can_ingest(&self, path: &Path) -> bool {
        match extension_of(path) {
            Some(ext) => self.extensions().contains(&ext.as_str()),
            None => false,
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Facade that selects the right parser for a file by extension.
///
/// Holds an ordered parser list; the first parser whose `can_ingest`
/// returns true handles the file. This is the sole entry point the
/// front ends use.
pub struct Ingestor {
    parsers: Vec<Box<dyn QuoteParser>>,
}

impl Ingestor {
    /// An ingestor with all built-in parsers registered.
    pub fn new() -> Self {
        Ingestor {
            parsers: vec![
                Box::new(csv::CsvParser),
                Box::new(docx::DocxParser),
                Box::new(pdf::PdfParser::default()),
                Box::new(text::TextParser),
            ],
        }
    }

    /// Parse a quote file by delegating to the matching parser.
    ///
    /// Fails with [`IngestError::UnsupportedFileType`] when no parser
    /// claims the file's extension.
    pub fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError> {
        for parser in &self.parsers {
            if parser.can_ingest(path) {
                tracing::debug!(parser = parser.name(), path = %path.display(), "delegating");
                return parser.parse(path);
            }
        }

        Err(IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
            extension: extension_of(path).unwrap_or_else(|| "unknown".into()),
        })
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}
