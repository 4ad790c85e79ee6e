//! Unified-diff hunks and their assembly from an alignment stream.

use std::collections::VecDeque;
use std::fmt;

use super::lcs::StepKind;

/// Equal lines shown around each change.
const CONTEXT: usize = 3;

/// One rendered line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunkLine {
    /// Unchanged line shown for context
    Context(String),
    /// Line present only in the new document
    Add(String),
    /// Line present only in the old document
    Del(String),
}

/// A contiguous block of changes with up to three lines of context on
/// either side.
///
/// Start lines are 1-based; lengths count the lines shown from each side
/// (context plus deletions for the old side, context plus additions for
/// the new side). Rendering via [`fmt::Display`] produces the hunk header
/// and its prefixed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// 1-based starting line on the old side
    pub a_start: u32,
    /// Lines shown from the old side
    pub a_len: u32,
    /// 1-based starting line on the new side
    pub b_start: u32,
    /// Lines shown from the new side
    pub b_len: u32,
    /// Context, addition, and deletion lines in display order
    pub lines: Vec<HunkLine>,
}

impl Hunk {
    fn open(a_start: u32, b_start: u32) -> Self {
        Hunk {
            a_start,
            a_len: 0,
            b_start,
            b_len: 0,
            lines: Vec::new(),
        }
    }

    fn push_context(&mut self, text: &str) {
        self.a_len += 1;
        self.b_len += 1;
        self.lines.push(HunkLine::Context(text.to_string()));
    }

    fn push_del(&mut self, text: &str) {
        self.a_len += 1;
        self.lines.push(HunkLine::Del(text.to_string()));
    }

    fn push_add(&mut self, text: &str) {
        self.b_len += 1;
        self.lines.push(HunkLine::Add(text.to_string()));
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_len, self.b_start, self.b_len
        )?;
        for line in &self.lines {
            match line {
                HunkLine::Context(text) => writeln!(f, " {text}")?,
                HunkLine::Add(text) => writeln!(f, "+{text}")?,
                HunkLine::Del(text) => writeln!(f, "-{text}")?,
            }
        }
        Ok(())
    }
}

/// An alignment step tagged with the old/new line cursors that were in
/// effect when it was produced.
#[derive(Debug)]
pub(crate) struct Entry<'a> {
    pub kind: StepKind,
    pub old_line: u32,
    pub new_line: u32,
    pub text: &'a str,
}

/// Group an alignment stream into hunks with three lines of context.
///
/// A hunk opens lazily on the first change, seeded with up to three
/// preceding equal lines. Equal lines inside an open hunk buffer up; once
/// more than three accumulate, the hunk closes, keeping the first three as
/// trailing context and carrying the rest forward as the next hunk's
/// pre-context candidates. Identical sides produce no hunks at all.
pub(crate) fn assemble(entries: &[Entry<'_>]) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut pre: VecDeque<&Entry<'_>> = VecDeque::new();
    let mut pending: Vec<&Entry<'_>> = Vec::new();
    let mut open: Option<Hunk> = None;

    for entry in entries {
        match entry.kind {
            StepKind::Equal => {
                if open.is_none() {
                    pre.push_back(entry);
                    if pre.len() > CONTEXT {
                        pre.pop_front();
                    }
                    continue;
                }
                pending.push(entry);
                if pending.len() > CONTEXT {
                    if let Some(mut hunk) = open.take() {
                        for ctx in pending.drain(..CONTEXT) {
                            hunk.push_context(ctx.text);
                        }
                        hunks.push(hunk);
                    }
                    for ctx in pending.drain(..) {
                        pre.push_back(ctx);
                        if pre.len() > CONTEXT {
                            pre.pop_front();
                        }
                    }
                }
            }
            StepKind::Del | StepKind::Add => {
                let hunk = open.get_or_insert_with(|| {
                    let seed = pre.front().copied().unwrap_or(entry);
                    Hunk::open(seed.old_line, seed.new_line)
                });
                for ctx in pre.drain(..) {
                    hunk.push_context(ctx.text);
                }
                for ctx in pending.drain(..) {
                    hunk.push_context(ctx.text);
                }
                match entry.kind {
                    StepKind::Del => hunk.push_del(entry.text),
                    _ => hunk.push_add(entry.text),
                }
            }
        }
    }

    if let Some(mut hunk) = open.take() {
        // At most CONTEXT equals can still be pending here
        for ctx in pending.drain(..) {
            hunk.push_context(ctx.text);
        }
        hunks.push(hunk);
    }

    hunks
}
