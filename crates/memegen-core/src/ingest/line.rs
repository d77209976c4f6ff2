use crate::model::Quote;

/// Parse a single `"body" - author` line into a [`Quote`].
///
/// This is the one grammar shared by every line-oriented source (plain
/// text files, DOCX paragraphs, pdftotext output). The author is taken
/// as the segment after the *last* `" - "`, so a body may itself contain
/// the separator. One pair of surrounding double quotes is stripped from
/// the body; inner quotes are kept.
///
/// Returns `None` for blank or malformed lines so callers can filter.
pub fn parse_quote_line(line: &str) -> Option<Quote> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(split_at) = line.rfind(" - ") else {
        tracing::warn!("skipping malformed line: {line}");
        return None;
    };

    let body = line[..split_at].trim();
    let body = body.strip_prefix('"').unwrap_or(body);
    let body = body.strip_suffix('"').unwrap_or(body);
    let author = &line[split_at + 3..];

    Quote::new(body, author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line() {
        let q = parse_quote_line("\"Good boy\" - Rex").unwrap();
        assert_eq!(q.body(), "Good boy");
        assert_eq!(q.author(), "Rex");
    }

    #[test]
    fn splits_on_last_separator() {
        let q = parse_quote_line("\"A - B\" - C").unwrap();
        assert_eq!(q.body(), "A - B");
        assert_eq!(q.author(), "C");
    }

    #[test]
    fn unquoted_body_accepted() {
        let q = parse_quote_line("Life is ruff - Bodhi").unwrap();
        assert_eq!(q.body(), "Life is ruff");
        assert_eq!(q.author(), "Bodhi");
    }

    #[test]
    fn inner_quotes_kept() {
        let q = parse_quote_line("\"He said \"woof\"\" - Rex").unwrap();
        assert_eq!(q.body(), "He said \"woof\"");
    }

    #[test]
    fn blank_line_is_none() {
        assert!(parse_quote_line("   ").is_none());
    }

    #[test]
    fn missing_separator_is_none() {
        assert!(parse_quote_line("no separator here").is_none());
    }

    #[test]
    fn hyphen_without_spaces_is_none() {
        assert!(parse_quote_line("body-author").is_none());
    }

    #[test]
    fn empty_author_is_none() {
        assert!(parse_quote_line("\"Good boy\" -  ").is_none());
    }

    #[test]
    fn empty_body_is_none() {
        assert!(parse_quote_line("\"\" - Rex").is_none());
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let q = parse_quote_line("   \"Good boy\" - Rex \n").unwrap();
        assert_eq!(q.body(), "Good boy");
        assert_eq!(q.author(), "Rex");
    }
}
