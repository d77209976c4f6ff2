use serde::Serialize;
use std::fmt;

/// A quote with a body and an author.
///
/// Both fields are trimmed on construction and guaranteed non-empty;
/// candidate quotes that trim to nothing are rejected by [`Quote::new`]
/// rather than constructed in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    body: String,
    author: String,
}

impl Quote {
    /// Build a quote from raw body and author text.
    ///
    /// Returns `None` when either field is empty after trimming.
    pub fn new(body: &str, author: &str) -> Option<Quote> {
        let body = body.trim();
        let author = author.trim();
        if body.is_empty() || author.is_empty() {
            return None;
        }
        Some(Quote {
            body: body.to_string(),
            author: author.to_string(),
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Quote {
    /// Renders the caption form: `"body" - author`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
