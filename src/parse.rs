//! Parsing for the textual edit-spec syntax into structured operations.
//!
//! This module handles parsing command-line input like `rep:3:new text`
//! into [`EditOp`] values for the applier.
//!
//! # Syntax
//!
//! The expected format is `KIND:RANGE[:TEXT]` where:
//! - `KIND` is `ins`, `del`, or `rep`
//! - `RANGE` is a line number `N` or an inclusive range `N..M`
//! - `TEXT` is everything after the second colon, taken verbatim
//!
//! # Spec forms
//!
//! - `ins:N:TEXT` - Insert TEXT before line N (`N = lines + 1` appends)
//! - `del:N` - Delete line N
//! - `del:N..M` - Delete lines N through M (inclusive)
//! - `rep:N:TEXT` - Replace line N with TEXT
//! - `rep:N..M:TEXT` - Replace lines N through M with TEXT
//!
//! TEXT may contain embedded newlines; it is split on any end-of-line
//! convention when the operation is applied. `rep` without TEXT removes
//! the range without inserting anything.
//!
//! The syntax layer is strict where the engine is lenient: an inverted
//! range or trailing text on `del` is rejected here, while out-of-bounds
//! positions are left for the applier to clamp.
//!
//! # Examples
//!
//! ```
//! use line_patch::ops::EditOp;
//! use line_patch::parse::parse_op;
//! use std::num::NonZeroU32;
//!
//! let op = parse_op("del:2..4").unwrap();
//! assert_eq!(
//!     op,
//!     EditOp::Delete {
//!         start: NonZeroU32::new(2).unwrap(),
//!         end: NonZeroU32::new(4),
//!     }
//! );
//!
//! let op = parse_op("ins:7:fresh line").unwrap();
//! assert_eq!(
//!     op,
//!     EditOp::Insert {
//!         at: NonZeroU32::new(7).unwrap(),
//!         text: Some("fresh line".into()),
//!     }
//! );
//! ```

use error_set::error_set;
use std::num::NonZeroU32;

use crate::ops::{EditOp, NewText};

error_set! {
    /// Errors from parsing edit-spec syntax
    ParseError := {
        /// Input does not match `kind:range[:text]`
        #[display("Invalid edit spec '{input}': expected 'kind:range[:text]'")]
        InvalidFormat { input: String },
        /// Kind is not one of ins, del, rep
        #[display("Unknown operation '{kind}': expected ins, del, or rep")]
        UnknownKind { kind: String },
        /// Line number could not be parsed as a valid non-zero u32
        #[display("Invalid line number '{value}'")]
        InvalidLineNumber { value: String },
        /// Range has start greater than end
        #[display("Invalid range {start}..{end}: start must be <= end")]
        InvalidRange { start: u32, end: u32 },
        /// Insert addresses a single position, not a range
        #[display("Insert takes a single line position, got range '{value}'")]
        RangeOnInsert { value: String },
        /// Delete does not accept replacement text
        #[display("Delete does not take text: '{input}'")]
        TextOnDelete { input: String },
    }
}

/// Parse a single edit spec into an operation.
///
/// # Errors
///
/// Returns [`ParseError`] if the spec has no `kind:range` shape, the kind
/// is unknown, a line number is zero or non-numeric, a range is inverted,
/// or text is supplied where it makes no sense.
pub fn parse_op(input: &str) -> Result<EditOp, ParseError> {
    let Some((kind, rest)) = input.split_once(':') else {
        return Err(ParseError::InvalidFormat {
            input: input.to_string(),
        });
    };

    // Text is everything after the second colon, verbatim
    let (range, text) = match rest.split_once(':') {
        Some((range, text)) => (range, Some(text)),
        None => (rest, None),
    };

    match kind {
        "ins" => {
            if range.contains("..") {
                return Err(ParseError::RangeOnInsert {
                    value: range.to_string(),
                });
            }
            Ok(EditOp::Insert {
                at: parse_number(range)?,
                text: text.map(NewText::from),
            })
        }
        "del" => {
            if text.is_some() {
                return Err(ParseError::TextOnDelete {
                    input: input.to_string(),
                });
            }
            let (start, end) = parse_range(range)?;
            Ok(EditOp::Delete { start, end })
        }
        "rep" => {
            let (start, end) = parse_range(range)?;
            Ok(EditOp::Replace {
                start,
                end,
                text: text.map(NewText::from),
            })
        }
        other => Err(ParseError::UnknownKind {
            kind: other.to_string(),
        }),
    }
}

/// Parse a whole batch of edit specs, in the order given.
pub fn parse_ops(specs: &[String]) -> Result<Vec<EditOp>, ParseError> {
    specs.iter().map(|spec| parse_op(spec)).collect()
}

/// Parse `N` or `N..M`; the end is `None` for a single position.
fn parse_range(input: &str) -> Result<(NonZeroU32, Option<NonZeroU32>), ParseError> {
    if let Some((start_str, end_str)) = input.split_once("..") {
        let start = parse_number(start_str)?;
        let end = parse_number(end_str)?;
        if start > end {
            return Err(ParseError::InvalidRange {
                start: start.get(),
                end: end.get(),
            });
        }
        Ok((start, Some(end)))
    } else {
        Ok((parse_number(input)?, None))
    }
}

/// Parse a positive, non-zero line number.
fn parse_number(input: &str) -> Result<NonZeroU32, ParseError> {
    input
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| ParseError::InvalidLineNumber {
            value: input.to_string(),
        })
}
