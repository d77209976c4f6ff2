use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::IngestError;
use crate::ingest::text::open_error;
use crate::ingest::{parse_quote_line, QuoteParser};
use crate::model::Quote;

/// Parser for DOCX quote files, one `"body" - author` paragraph each.
///
/// A .docx file is a zip archive; the visible text lives in
/// `word/document.xml` as `<w:t>` runs grouped under `<w:p>` paragraphs.
pub struct DocxParser;

impl QuoteParser for DocxParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, IngestError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let mut archive = zip::ZipArchive::new(file).map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            reason: format!("not a valid docx archive: {e}"),
        })?;

        let mut document = archive
            .by_name("word/document.xml")
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                reason: format!("missing word/document.xml: {e}"),
            })?;

        let mut xml = String::new();
        document
            .read_to_string(&mut xml)
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                reason: format!("cannot read word/document.xml: {e}"),
            })?;

        let paragraphs = extract_paragraphs(&xml).map_err(|reason| IngestError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        let quotes: Vec<Quote> = paragraphs
            .iter()
            .filter_map(|p| parse_quote_line(p))
            .collect();

        tracing::info!(count = quotes.len(), path = %path.display(), "parsed DOCX file");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "docx"
    }
}

/// Collect the visible text of each `<w:p>` paragraph as one line.
fn extract_paragraphs(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"p" => {
                in_paragraph = true;
                current.clear();
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => {
                if in_paragraph {
                    paragraphs.push(std::mem::take(&mut current));
                    in_paragraph = false;
                }
            }
            Ok(Event::Text(t)) if in_paragraph => {
                let text = t
                    .unescape()
                    .map_err(|e| format!("invalid XML text content: {e}"))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("invalid document XML: {e}")),
        }
    }

    Ok(paragraphs)
}
