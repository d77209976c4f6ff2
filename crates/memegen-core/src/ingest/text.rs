use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::IngestError;
use crate::ingest::{parse_quote_line, QuoteParser};
use crate::model::Quote;

/// Parser for plain text quote files, one `"body" - author` line each.
pub struct TextParser;

impl QuoteParser for TextParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let reader = BufReader::new(file);

        let mut quotes = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                reason: format!("not readable as UTF-8 text: {e}"),
            })?;
            if let Some(quote) = parse_quote_line(&line) {
                quotes.push(quote);
            }
        }

        tracing::info!(count = quotes.len(), path = %path.display(), "parsed text file");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Map an open failure to `FileNotFound` when that is what it is.
pub(crate) fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound(path.to_path_buf())
    } else {
        IngestError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_txt(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_lines_and_skips_malformed() {
        let file = write_txt(
            "\"Good boy\" - Rex\n\
             this line has no separator\n\
             \n\
             \"Life is ruff\" - Bodhi\n",
        );

        let quotes = TextParser.parse(file.path()).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].author(), "Rex");
        assert_eq!(quotes[1].author(), "Bodhi");
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = TextParser.parse(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound(_)));
    }
}
