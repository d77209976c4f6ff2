//! Quote ingestion and image captioning for meme generation.
//!
//! Two facades do the work: [`Ingestor`] turns quote files (.txt, .csv,
//! .docx, .pdf) into [`Quote`] values, and [`MemeEngine`] overlays one
//! quote on a photograph and writes the result under a random name.

pub mod error;
pub mod ingest;
pub mod meme;
pub mod model;

use std::path::PathBuf;

pub use error::{IngestError, MemeError};
pub use ingest::Ingestor;
pub use meme::MemeEngine;
pub use model::Quote;

/// Load a quote pool from several files, skipping the ones that fail.
///
/// Per-file ingestion failures are logged and swallowed so one bad file
/// does not empty the pool; callers decide what an empty result means.
pub fn load_quote_pool(paths: &[PathBuf]) -> Vec<Quote> {
    let ingestor = Ingestor::new();
    let mut quotes = Vec::new();

    for path in paths {
        match ingestor.parse(path) {
            Ok(parsed) => quotes.extend(parsed),
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not parse quote file: {e}");
            }
        }
    }

    quotes
}
