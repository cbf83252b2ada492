//! `key=value` scanning within ElAc input lines
use std::ops::Range;

/// Numeric value located within a line
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NumericField<'a> {
    /// Raw value, as it appears in the line
    pub value: &'a str,
    /// Byte range of the value within the line
    pub span: Range<usize>,
}

/// True if the trimmed line starts with `token` followed by whitespace.
pub(crate) fn is_token_line(line: &str, token: &str) -> bool {
    line.trim()
        .strip_prefix(token)
        .and_then(|rem| rem.chars().next())
        .is_some_and(char::is_whitespace)
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '+' || c == '.'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Locates the first `key=<numeric>` occurrence in `line`.
/// `key` must start on a word boundary (`xx=1` does not match `x`)
/// and at least one numeric character (sign, digit, dot) must follow `=`.
pub(crate) fn find_numeric<'a>(line: &'a str, key: &str) -> Option<NumericField<'a>> {
    let pattern = format!("{}=", key);
    line.match_indices(&pattern).find_map(|(offset, _)| {
        let bounded = line[..offset]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        if !bounded {
            return None;
        }
        let start = offset + pattern.len();
        let len = line[start..]
            .find(|c: char| !is_numeric_char(c))
            .unwrap_or(line.len() - start);
        if len == 0 {
            return None;
        }
        Some(NumericField {
            value: &line[start..start + len],
            span: start..start + len,
        })
    })
}

#[cfg(test)]
mod test {
    use super::{find_numeric, is_token_line};

    #[test]
    fn token_lines() {
        assert!(is_token_line("source x=1 y=2", "source"));
        assert!(is_token_line("   rec\tx=1", "rec"));
        assert!(!is_token_line("sources x=1", "source"));
        assert!(!is_token_line("record x=1", "rec"));
        assert!(!is_token_line("rec", "rec"));
        assert!(!is_token_line("rec  ", "rec"));
        assert!(!is_token_line("  source \t", "source"));
        assert!(!is_token_line("# rec x=1", "rec"));
        assert!(!is_token_line("Rec x=1", "rec"));
    }

    #[test]
    fn numeric_fields() {
        let line = "rec x=-12.5 y=3 z=40.25 file=a";
        let z = find_numeric(line, "z").unwrap();
        assert_eq!(z.value, "40.25");
        assert_eq!(&line[z.span.clone()], "40.25");

        let x = find_numeric(line, "x").unwrap();
        assert_eq!(x.value, "-12.5");

        // word boundary
        assert!(find_numeric("rec xx=1", "x").is_none());
        assert_eq!(find_numeric("rec xx=1 x=2", "x").unwrap().value, "2");

        // no numeric content
        assert!(find_numeric("rec z=abc", "z").is_none());
        assert_eq!(find_numeric("rec z= z=7", "z").unwrap().value, "7");

        // value at end of line
        assert_eq!(find_numeric("source y=8.", "y").unwrap().value, "8.");
    }
}
