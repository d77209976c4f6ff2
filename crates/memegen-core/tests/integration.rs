//! Integration tests for the ingestion dispatcher and captioning engine.
//!
//! PDF scenarios use a MockExtractor implementing TextExtractor, so the
//! tests run without poppler-utils installed.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use memegen_core::error::IngestError;
use memegen_core::ingest::pdf::{PdfParser, TextExtractor};
use memegen_core::ingest::QuoteParser;
use memegen_core::{load_quote_pool, Ingestor, MemeEngine};

struct MockExtractor {
    text: String,
}

impl TextExtractor for MockExtractor {
    fn extract_text(&self, _path: &Path, _timeout: Duration) -> Result<String, IngestError> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn file_with(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Dispatcher scenarios
// ---------------------------------------------------------------------------

#[test]
fn text_file_yields_single_quote() {
    let file = file_with(".txt", b"\"Good boy\" - Rex\n");
    let quotes = Ingestor::new().parse(file.path()).unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].body(), "Good boy");
    assert_eq!(quotes[0].author(), "Rex");
}

#[test]
fn unknown_extension_is_rejected_by_name() {
    let err = Ingestor::new().parse(Path::new("pool.xyz")).unwrap_err();
    match err {
        IngestError::UnsupportedFileType { extension, path } => {
            assert_eq!(extension, "xyz");
            assert_eq!(path, PathBuf::from("pool.xyz"));
        }
        other => panic!("expected UnsupportedFileType, got: {other}"),
    }
}

#[test]
fn csv_file_is_dispatched_to_the_csv_parser() {
    let file = file_with(".csv", b"body,author\nChase the ball,Rex\n");
    let quotes = Ingestor::new().parse(file.path()).unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].body(), "Chase the ball");
}

#[test]
fn docx_file_is_dispatched_to_the_docx_parser() {
    let document = br#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>"Bark less" - Bodhi</w:t></w:r></w:p></w:body>
</w:document>"#;

    let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
    writer
        .start_file(
            "word/document.xml",
            zip::write::SimpleFileOptions::default(),
        )
        .unwrap();
    writer.write_all(document).unwrap();
    writer.finish().unwrap();

    let quotes = Ingestor::new().parse(file.path()).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].author(), "Bodhi");
}

#[test]
fn pdf_parser_reads_extracted_text() {
    let file = file_with(".pdf", b"%PDF-1.4 placeholder");
    let parser = PdfParser::with_extractor(MockExtractor {
        text: "\"Good boy\" - Rex\n\"Treats now\" - Luna\n".into(),
    });

    let quotes = parser.parse(file.path()).unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[1].body(), "Treats now");
}

// ---------------------------------------------------------------------------
// Pool loading
// ---------------------------------------------------------------------------

#[test]
fn pool_accumulates_across_files_and_skips_failures() {
    let txt = file_with(".txt", b"\"Good boy\" - Rex\n");
    let csv = file_with(".csv", b"body,author\nNap all day,Luna\n");
    let broken = file_with(".csv", b"body,writer\nno author column,oops\n");

    let pool = load_quote_pool(&[
        txt.path().to_path_buf(),
        broken.path().to_path_buf(),
        PathBuf::from("/no/such/pool.txt"),
        csv.path().to_path_buf(),
    ]);

    assert_eq!(pool.len(), 2);
    assert_eq!(pool[0].author(), "Rex");
    assert_eq!(pool[1].author(), "Luna");
}

// ---------------------------------------------------------------------------
// End-to-end: quote file through dispatcher into the captioning engine
// ---------------------------------------------------------------------------

#[test]
fn quote_file_to_meme_file() {
    let quote_file = file_with(".txt", b"\"Good boy\" - Rex\n");
    let quotes = Ingestor::new().parse(quote_file.path()).unwrap();
    assert_eq!(quotes.len(), 1);

    let src_dir = tempfile::tempdir().unwrap();
    let src = src_dir.path().join("photo.png");
    image::RgbaImage::from_pixel(1000, 800, image::Rgba([40, 80, 160, 255]))
        .save(&src)
        .unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let engine = MemeEngine::new(out_dir.path()).unwrap();
    let out = engine
        .make_meme_with_rng(
            &src,
            quotes[0].body(),
            quotes[0].author(),
            500,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();

    let produced = image::open(&out).unwrap();
    assert_eq!((produced.width(), produced.height()), (500, 400));

    // The caption leaves light and dark pixels on the solid background.
    let rgba = produced.to_rgba8();
    assert!(rgba.pixels().any(|p| p.0[0] > 200 && p.0[1] > 200 && p.0[2] > 200));
    assert!(rgba.pixels().any(|p| p.0[0] < 50 && p.0[1] < 50 && p.0[2] < 50));
}
