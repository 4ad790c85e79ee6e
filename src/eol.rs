//! End-of-line convention detection.
//!
//! A document's dominant terminator is detected once from the raw text and
//! reused when the edited result is joined back together, so edits do not
//! silently rewrite a file's line endings.

use std::fmt;

/// Dominant end-of-line convention of a document.
///
/// A property of the whole document, not of individual lines. Detection
/// picks whichever terminator occurs most often; see [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EolStyle {
    /// Unix `\n`
    #[default]
    Lf,
    /// Windows `\r\n`
    CrLf,
    /// Classic Mac `\r`
    Cr,
}

impl EolStyle {
    /// The terminator bytes for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            EolStyle::Lf => "\n",
            EolStyle::CrLf => "\r\n",
            EolStyle::Cr => "\r",
        }
    }
}

impl fmt::Display for EolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EolStyle::Lf => write!(f, "LF"),
            EolStyle::CrLf => write!(f, "CRLF"),
            EolStyle::Cr => write!(f, "CR"),
        }
    }
}

/// Classify the dominant end-of-line convention of raw text.
///
/// Counts non-overlapping `\r\n` pairs, `\n` not preceded by `\r`, and `\r`
/// not followed by `\n`, then returns the style with the greatest count.
/// Ties break in the priority order CRLF > CR > LF. Input with no
/// terminators at all, including the empty string, defaults to LF.
///
/// Operates on the raw, unparsed text; it is independent of the line
/// parser.
///
/// # Examples
/// ```
/// use line_patch::eol::{detect, EolStyle};
///
/// assert_eq!(detect("line1\r\nline2\r\nline3\n"), EolStyle::CrLf);
/// assert_eq!(detect("no terminators here"), EolStyle::Lf);
/// ```
pub fn detect(content: &str) -> EolStyle {
    let bytes = content.as_bytes();
    let mut crlf = 0usize;
    let mut cr = 0usize;
    let mut lf = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                i += 2;
            }
            b'\r' => {
                cr += 1;
                i += 1;
            }
            b'\n' => {
                lf += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    if crlf == 0 && cr == 0 && lf == 0 {
        EolStyle::Lf
    } else if crlf >= cr && crlf >= lf {
        EolStyle::CrLf
    } else if cr > crlf && cr >= lf {
        EolStyle::Cr
    } else {
        EolStyle::Lf
    }
}
