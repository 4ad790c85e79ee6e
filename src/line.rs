//! Line-level view of a text document.
//!
//! Documents are handled as ordered sequences of [`Line`] records, split on
//! any end-of-line convention and numbered from 1. The general splitting
//! rule is N separators produce N+1 segments, so a trailing terminator
//! yields a final empty record and joining the records with a terminator
//! reproduces the original text exactly.

use crate::eol::EolStyle;

/// A single line of a document, without its terminator.
///
/// A sequence of `N` records is always numbered `1..=N` contiguously after
/// every public operation. Edits replace records rather than mutating them
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position within the document
    pub number: u32,
    /// Line content without any terminator
    pub text: String,
}

/// Split raw text into numbered line records.
///
/// Any of `\r\n`, `\r`, and `\n` acts as a separator, even when mixed
/// within one document. A trailing terminator yields one extra empty record
/// (`"a\n"` parses as `["a", ""]`). The empty string parses to no records
/// at all, not to a single empty record.
///
/// # Examples
/// ```
/// use line_patch::line::parse;
///
/// assert!(parse("").is_empty());
///
/// let lines = parse("a\nb\n");
/// let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
/// assert_eq!(texts, ["a", "b", ""]);
/// ```
pub fn parse(content: &str) -> Vec<Line> {
    if content.is_empty() {
        return Vec::new();
    }
    renumber(split_text(content))
}

/// Split text into segments on any end-of-line convention.
///
/// N separators always produce N+1 segments, so the empty string is a
/// single empty segment. Used both by [`parse`] and for splitting the
/// replacement text supplied to edit operations, where `""` must mean one
/// empty line.
pub fn split_text(content: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                segments.push(std::mem::take(&mut current));
            }
            '\n' => segments.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }

    segments.push(current);
    segments
}

/// Join line records back into a document using the given terminator.
pub fn join(lines: &[Line], eol: EolStyle) -> String {
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    texts.join(eol.as_str())
}

/// Number a sequence of texts 1..=N in order.
pub(crate) fn renumber(texts: Vec<String>) -> Vec<Line> {
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| Line {
            number: i as u32 + 1,
            text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn parse_empty_is_no_records() {
        assert_eq!(parse(""), Vec::new());
    }

    #[test]
    fn parse_single_line_without_terminator() {
        let lines = parse("hello");
        assert_eq!(texts(&lines), ["hello"]);
        assert_eq!(lines[0].number, 1);
    }

    #[test]
    fn parse_trailing_terminator_adds_empty_record() {
        assert_eq!(texts(&parse("a\n")), ["a", ""]);
    }

    #[test]
    fn parse_preserves_blank_lines() {
        assert_eq!(texts(&parse("a\n\nb")), ["a", "", "b"]);
    }

    #[test]
    fn parse_mixed_terminators() {
        assert_eq!(texts(&parse("a\r\nb\rc\nd")), ["a", "b", "c", "d"]);
    }

    #[test]
    fn parse_numbers_are_contiguous() {
        let lines = parse("x\ny\nz");
        let numbers: Vec<u32> = lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn split_text_empty_is_one_segment() {
        assert_eq!(split_text(""), [""]);
    }

    #[test]
    fn split_text_crlf_is_one_separator() {
        assert_eq!(split_text("a\r\nb"), ["a", "b"]);
    }

    #[test]
    fn split_text_consecutive_separators() {
        assert_eq!(split_text("\r\r\n\n"), ["", "", "", ""]);
    }

    #[test]
    fn join_reproduces_terminated_document() {
        let content = "a\nb\nc\n";
        assert_eq!(join(&parse(content), EolStyle::Lf), content);
    }

    #[test]
    fn join_with_crlf() {
        let lines = parse("a\nb\n");
        assert_eq!(join(&lines, EolStyle::CrLf), "a\r\nb\r\n");
    }

    #[test]
    fn join_empty_is_empty() {
        assert_eq!(join(&[], EolStyle::Lf), "");
    }
}
