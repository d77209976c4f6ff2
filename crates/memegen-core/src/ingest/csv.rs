use std::path::Path;

use crate::error::IngestError;
use crate::ingest::QuoteParser;
use crate::model::Quote;

/// Parser for CSV quote files with `body` and `author` columns.
///
/// Column names are case-sensitive; a file missing either column fails
/// before producing any records. Rows whose cells trim to empty are
/// skipped, as are structurally malformed rows.
pub struct CsvParser;

impl QuoteParser for CsvParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError> {
        if !path.is_file() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path).map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                reason: format!("cannot read header row: {e}"),
            })?
            .clone();

        let body_idx = headers.iter().position(|h| h == "body");
        let author_idx = headers.iter().position(|h| h == "author");

        let missing: Vec<&str> = [("body", body_idx), ("author", author_idx)]
            .iter()
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                path: path.to_path_buf(),
                missing: missing.join(", "),
            });
        }
        let (body_idx, author_idx) = (body_idx.unwrap(), author_idx.unwrap());

        let mut quotes = Vec::new();
        for record in reader.records() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping malformed row: {e}");
                    continue;
                }
            };

            let body = record.get(body_idx).unwrap_or("");
            let author = record.get(author_idx).unwrap_or("");
            match Quote::new(body, author) {
                Some(quote) => quotes.push(quote),
                None => {
                    tracing::warn!(path = %path.display(), "skipping row with empty body or author");
                }
            }
        }

        tracing::info!(count = quotes.len(), path = %path.display(), "parsed CSV file");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "csv"
    }
}
