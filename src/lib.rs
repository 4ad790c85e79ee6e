//! Line-addressed text editing with unified diff output.
//!
//! The engine takes a document as a single string, a batch of
//! insert/delete/replace operations addressed by 1-based line numbers, and
//! produces the edited document together with a unified diff describing the
//! change, preserving the document's end-of-line convention.
//!
//! Everything is pure and synchronous: the crate performs no I/O, and the
//! engine raises no errors. Degenerate input (out-of-range positions,
//! inverted spans, absent replacement text) is clamped or treated as a
//! no-op rather than rejected; the one fallible precondition is editing a
//! missing document without requesting creation.

use error_set::error_set;

pub mod diff;
pub mod eol;
pub mod line;
pub mod ops;
pub mod parse;

pub use diff::{Change, Diff, Hunk, HunkLine};
pub use eol::EolStyle;
pub use line::Line;
pub use ops::{EditOp, NewText};
pub use parse::ParseError;

error_set! {
    /// Top-level error for line-patch operations
    LinePatchError := {
        /// Edit target has no content and creation was not requested
        #[display("No such file: {label} (create_if_missing not set)")]
        MissingTarget { label: String },
        ParseError(ParseError),
    }
}

/// Result of applying a batch of edits to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The edited document, joined with the chosen terminator
    pub content: String,
    /// Unified diff plus flat change list describing the edit
    pub diff: Diff,
    /// Total lines inserted plus lines removed by the operations
    pub lines_modified: usize,
    /// Record count of the edited document
    pub new_total: usize,
    /// Terminator used to join the edited document
    pub eol: EolStyle,
}

/// Apply edits to a document and describe the change.
///
/// `original` is the current content, or `None` when the target does not
/// exist yet; `create_if_missing` then decides between starting from an
/// empty document and failing with [`LinePatchError::MissingTarget`]. With
/// `keep_eol` the output keeps the dominant terminator of the original;
/// otherwise it is joined with LF. `label` names the document in the diff
/// headers.
///
/// The edits themselves never fail: positions are clamped to the document
/// and degenerate spans are silently dropped. `lines_modified` is the raw
/// operation volume (lines inserted plus removed) while `diff.changes`
/// comes from the alignment; the two may differ when an edit is a textual
/// no-op.
///
/// # Examples
/// ```
/// use line_patch::{apply_edit, EditOp};
/// use std::num::NonZeroU32;
///
/// let ops = vec![EditOp::Replace {
///     start: NonZeroU32::new(2).unwrap(),
///     end: None,
///     text: Some("two".into()),
/// }];
/// let outcome = apply_edit(Some("one\nold\nthree\n"), &ops, false, true, "demo.txt").unwrap();
/// assert_eq!(outcome.content, "one\ntwo\nthree\n");
/// assert_eq!(outcome.lines_modified, 2);
/// assert!(outcome.diff.unified.contains("-old"));
/// ```
///
/// # Errors
///
/// Only [`LinePatchError::MissingTarget`], when `original` is `None` and
/// `create_if_missing` is false.
pub fn apply_edit(
    original: Option<&str>,
    ops: &[EditOp],
    create_if_missing: bool,
    keep_eol: bool,
    label: &str,
) -> Result<EditOutcome, LinePatchError> {
    let source = match original {
        Some(content) => content,
        None if create_if_missing => "",
        None => {
            return Err(LinePatchError::MissingTarget {
                label: label.to_string(),
            });
        }
    };

    let before = line::parse(source);
    let (after, lines_modified) = ops::apply(&before, ops);
    let diff = diff::diff(&before, &after, label);

    let eol = if keep_eol {
        eol::detect(source)
    } else {
        EolStyle::Lf
    };
    let content = line::join(&after, eol);
    let new_total = after.len();

    Ok(EditOutcome {
        content,
        diff,
        lines_modified,
        new_total,
        eol,
    })
}
