//! Line diff computation and unified rendering.
//!
//! The generator aligns the before/after line sequences with a full LCS
//! table, tags the alignment with per-side line numbers, and renders the
//! result as a unified diff with three lines of context per hunk. It has
//! no error conditions: any two sequences, including empty ones, produce a
//! well-formed diff.

pub mod hunk;
mod lcs;

pub use hunk::{Hunk, HunkLine};

use crate::line::Line;
use hunk::Entry;
use lcs::StepKind;

/// A single added or deleted line from a computed diff.
///
/// Deletions are numbered against the old document, additions against the
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Line present only in the new document
    Add { line: u32, text: String },
    /// Line present only in the old document
    Del { line: u32, text: String },
}

/// A rendered unified diff plus the flat list of changed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Fully rendered patch text
    pub unified: String,
    /// Additions and deletions in alignment order
    pub changes: Vec<Change>,
}

impl Diff {
    /// True when the two sides aligned with no additions or deletions.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Diff two line sequences into a unified patch with 3-line context hunks.
///
/// `label` names the file in the `--- a/...` and `+++ b/...` headers.
/// Identical inputs produce an empty change list and a patch containing
/// the synthetic marker `@@ -1,0 +1,0 @@` instead of any hunks, so the
/// unified text is never empty.
///
/// The change list is computed from the alignment, independently of any
/// operation count reported by the applier; the two can legitimately
/// disagree when an edit is a textual no-op.
///
/// # Examples
/// ```
/// use line_patch::diff::{diff, Change};
/// use line_patch::line::parse;
///
/// let before = parse("a\nb\nc");
/// let after = parse("a\nx\nc");
/// let d = diff(&before, &after, "demo.txt");
/// assert_eq!(
///     d.changes,
///     vec![
///         Change::Del { line: 2, text: "b".to_string() },
///         Change::Add { line: 2, text: "x".to_string() },
///     ]
/// );
/// ```
pub fn diff(before: &[Line], after: &[Line], label: &str) -> Diff {
    let a: Vec<&str> = before.iter().map(|l| l.text.as_str()).collect();
    let b: Vec<&str> = after.iter().map(|l| l.text.as_str()).collect();

    let steps = lcs::align(&a, &b);

    // Tag every step with the line cursors in effect before it, and pull
    // the flat change list out of the same pass.
    let mut entries = Vec::with_capacity(steps.len());
    let mut changes = Vec::new();
    let mut old_line = 1u32;
    let mut new_line = 1u32;
    for step in &steps {
        entries.push(Entry {
            kind: step.kind,
            old_line,
            new_line,
            text: step.text,
        });
        match step.kind {
            StepKind::Equal => {
                old_line += 1;
                new_line += 1;
            }
            StepKind::Del => {
                changes.push(Change::Del {
                    line: old_line,
                    text: step.text.to_string(),
                });
                old_line += 1;
            }
            StepKind::Add => {
                changes.push(Change::Add {
                    line: new_line,
                    text: step.text.to_string(),
                });
                new_line += 1;
            }
        }
    }

    let hunks = hunk::assemble(&entries);

    let mut unified = format!("--- a/{label}\n+++ b/{label}\n");
    if hunks.is_empty() {
        unified.push_str("@@ -1,0 +1,0 @@\n");
    } else {
        for h in &hunks {
            unified.push_str(&h.to_string());
        }
    }

    Diff { unified, changes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::parse;
    use similar_asserts::assert_eq;

    #[test]
    fn identical_sides_render_synthetic_marker() {
        let lines = parse("a\nb\nc");
        let d = diff(&lines, &lines, "same.txt");
        assert!(d.is_empty());
        assert_eq!(d.unified, "--- a/same.txt\n+++ b/same.txt\n@@ -1,0 +1,0 @@\n");
    }

    #[test]
    fn empty_sides_render_synthetic_marker() {
        let d = diff(&[], &[], "empty.txt");
        assert!(d.changes.is_empty());
        assert_eq!(
            d.unified,
            "--- a/empty.txt\n+++ b/empty.txt\n@@ -1,0 +1,0 @@\n"
        );
    }

    #[test]
    fn single_replacement() {
        let before = parse("a\nb\nc");
        let after = parse("a\nx\nc");
        let d = diff(&before, &after, "demo.txt");
        assert_eq!(
            d.changes,
            vec![
                Change::Del {
                    line: 2,
                    text: "b".to_string()
                },
                Change::Add {
                    line: 2,
                    text: "x".to_string()
                },
            ]
        );
        assert_eq!(
            d.unified,
            "--- a/demo.txt\n+++ b/demo.txt\n@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n"
        );
    }

    #[test]
    fn deletions_numbered_against_old_side() {
        let before = parse("a\nb\nc\nd");
        let after = parse("a\nd");
        let d = diff(&before, &after, "f");
        assert_eq!(
            d.changes,
            vec![
                Change::Del {
                    line: 2,
                    text: "b".to_string()
                },
                Change::Del {
                    line: 3,
                    text: "c".to_string()
                },
            ]
        );
    }

    #[test]
    fn additions_numbered_against_new_side() {
        let before = parse("a\nd");
        let after = parse("a\nb\nc\nd");
        let d = diff(&before, &after, "f");
        assert_eq!(
            d.changes,
            vec![
                Change::Add {
                    line: 2,
                    text: "b".to_string()
                },
                Change::Add {
                    line: 3,
                    text: "c".to_string()
                },
            ]
        );
    }

    #[test]
    fn creation_from_empty() {
        let after = parse("hello");
        let d = diff(&[], &after, "new.txt");
        assert_eq!(
            d.unified,
            "--- a/new.txt\n+++ b/new.txt\n@@ -1,0 +1,1 @@\n+hello\n"
        );
    }

    #[test]
    fn distant_changes_produce_two_hunks() {
        let before = parse("l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8\nl9\nl10\nl11\nl12");
        let after = parse("l1\nX\nl3\nl4\nl5\nl6\nl7\nl8\nl9\nY\nl11\nl12");
        let d = diff(&before, &after, "demo.txt");
        assert_eq!(
            d.unified,
            concat!(
                "--- a/demo.txt\n",
                "+++ b/demo.txt\n",
                "@@ -1,5 +1,5 @@\n",
                " l1\n",
                "-l2\n",
                "+X\n",
                " l3\n",
                " l4\n",
                " l5\n",
                "@@ -7,6 +7,6 @@\n",
                " l7\n",
                " l8\n",
                " l9\n",
                "-l10\n",
                "+Y\n",
                " l11\n",
                " l12\n",
            )
        );
    }

    #[test]
    fn nearby_changes_share_one_hunk() {
        let before = parse("l1\nl2\nl3\nl4\nl5\nl6");
        let after = parse("l1\nA\nl3\nl4\nB\nl6");
        let d = diff(&before, &after, "demo.txt");
        assert_eq!(
            d.unified,
            concat!(
                "--- a/demo.txt\n",
                "+++ b/demo.txt\n",
                "@@ -1,6 +1,6 @@\n",
                " l1\n",
                "-l2\n",
                "+A\n",
                " l3\n",
                " l4\n",
                "-l5\n",
                "+B\n",
                " l6\n",
            )
        );
    }
}
