//! Line-addressed edit operations and their application.
//!
//! A batch of operations is resolved with sequential-rewrite semantics:
//! operations are sorted into a fixed total order and then folded one at a
//! time over a single mutable working sequence, so each operation addresses
//! the document as left by the ones before it. Positions are never
//! rejected; anything out of range is clamped and degenerate spans are
//! silently dropped.

use std::num::NonZeroU32;

use crate::line::{self, Line};

/// Replacement text for an insert or replace operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewText {
    /// Raw text, split on `\r\n`, `\r`, or `\n` when the operation is
    /// applied. `Raw("")` is exactly one empty line.
    Raw(String),
    /// Pre-split lines, used verbatim.
    Lines(Vec<String>),
}

impl NewText {
    fn into_lines(self) -> Vec<String> {
        match self {
            NewText::Raw(text) => line::split_text(&text),
            NewText::Lines(lines) => lines,
        }
    }
}

impl From<&str> for NewText {
    fn from(text: &str) -> Self {
        NewText::Raw(text.to_string())
    }
}

impl From<String> for NewText {
    fn from(text: String) -> Self {
        NewText::Raw(text)
    }
}

impl From<Vec<String>> for NewText {
    fn from(lines: Vec<String>) -> Self {
        NewText::Lines(lines)
    }
}

/// A single line-addressed edit.
///
/// All positions are 1-based and inclusive. Callers may supply operations
/// out of order or overlapping; [`apply`] resolves them deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Insert lines before position `at`; `at = N + 1` appends to an
    /// N-line document. Absent text inserts zero lines.
    Insert {
        at: NonZeroU32,
        text: Option<NewText>,
    },
    /// Remove the inclusive range `[start, end]`; `end` defaults to
    /// `start`.
    Delete {
        start: NonZeroU32,
        end: Option<NonZeroU32>,
    },
    /// Remove `[start, end]` and splice the replacement text in its place.
    /// Absent text makes this a plain deletion.
    Replace {
        start: NonZeroU32,
        end: Option<NonZeroU32>,
        text: Option<NewText>,
    },
}

impl EditOp {
    /// First line this operation touches.
    pub fn start(&self) -> NonZeroU32 {
        match self {
            EditOp::Insert { at, .. } => *at,
            EditOp::Delete { start, .. } | EditOp::Replace { start, .. } => *start,
        }
    }

    // Deletions resolve before replacements, replacements before inserts,
    // so an insert at a mutated line lands after the mutation instead of
    // being absorbed by it.
    fn rank(&self) -> u8 {
        match self {
            EditOp::Delete { .. } => 0,
            EditOp::Replace { .. } => 1,
            EditOp::Insert { .. } => 2,
        }
    }
}

/// Convert a 1-based line number to an index clamped to `[0, max]`.
fn index_clamped(number: NonZeroU32, max: usize) -> usize {
    ((number.get() - 1) as usize).min(max)
}

/// Remove the clamped inclusive span `[start, end]` from the working
/// sequence. Returns the index where the span began, or `None` when the
/// span was degenerate and nothing was removed.
fn remove_span(
    work: &mut Vec<String>,
    start: NonZeroU32,
    end: Option<NonZeroU32>,
    dels: &mut usize,
) -> Option<usize> {
    if work.is_empty() {
        return None;
    }
    let last = work.len() - 1;
    let from = index_clamped(start, last);
    let to = index_clamped(end.unwrap_or(start), last);
    if to < from {
        return None;
    }
    *dels += to - from + 1;
    work.drain(from..=to);
    Some(from)
}

/// Apply a batch of edits to a line sequence.
///
/// Operations are sorted by ascending start position, with ties broken by
/// the fixed priority delete < replace < insert, then applied sequentially
/// against one working sequence. The result is renumbered `1..=N`.
///
/// The returned count is the total of lines inserted plus lines removed
/// across all operations, a raw volume count rather than a semantic diff
/// size: replacing a line with identical text still counts two.
///
/// # Examples
/// ```
/// use line_patch::line::parse;
/// use line_patch::ops::{apply, EditOp};
/// use std::num::NonZeroU32;
///
/// let lines = parse("line1\nline2\nline3\nline4\nline5");
/// let op = EditOp::Delete {
///     start: NonZeroU32::new(2).unwrap(),
///     end: NonZeroU32::new(4),
/// };
/// let (result, changed) = apply(&lines, &[op]);
/// let texts: Vec<&str> = result.iter().map(|l| l.text.as_str()).collect();
/// assert_eq!(texts, ["line1", "line5"]);
/// assert_eq!(changed, 3);
/// ```
pub fn apply(lines: &[Line], ops: &[EditOp]) -> (Vec<Line>, usize) {
    let mut work: Vec<String> = lines.iter().map(|l| l.text.clone()).collect();

    let mut sorted: Vec<EditOp> = ops.to_vec();
    sorted.sort_by_key(|op| (op.start(), op.rank()));

    let mut adds = 0usize;
    let mut dels = 0usize;

    for op in sorted {
        match op {
            EditOp::Insert { at, text } => {
                let index = index_clamped(at, work.len());
                let inserted = text.map(NewText::into_lines).unwrap_or_default();
                adds += inserted.len();
                work.splice(index..index, inserted);
            }
            EditOp::Delete { start, end } => {
                remove_span(&mut work, start, end, &mut dels);
            }
            EditOp::Replace { start, end, text } => {
                if let Some(index) = remove_span(&mut work, start, end, &mut dels) {
                    let inserted = text.map(NewText::into_lines).unwrap_or_default();
                    adds += inserted.len();
                    work.splice(index..index, inserted);
                }
            }
        }
    }

    (line::renumber(work), adds + dels)
}
