//! Greedy longest-common-subsequence alignment between two line sequences.

/// Kind of one step in the alignment walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepKind {
    Equal,
    Del,
    Add,
}

/// One step of the alignment: an unchanged, removed, or added line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Step<'a> {
    pub kind: StepKind,
    pub text: &'a str,
}

impl<'a> Step<'a> {
    fn new(kind: StepKind, text: &'a str) -> Self {
        Step { kind, text }
    }
}

/// Align `a` against `b`, producing an equal/del/add step stream.
///
/// Builds the full `(n + 1) x (m + 1)` LCS length table with the standard
/// suffix recurrence and walks it greedily from the top-left. On a tie the
/// walk favors deletion; the choice is arbitrary but fixed, so rendered
/// diffs stay byte-stable. The table is the deliberately simple `O(n * m)`
/// form, acceptable for single-file line counts.
pub(crate) fn align<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<Step<'a>> {
    let n = a.len();
    let m = b.len();

    // lcs[i][j] = LCS length of a[i..] and b[j..]; last row/column stay 0
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if a[i] == b[j] {
            steps.push(Step::new(StepKind::Equal, a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            steps.push(Step::new(StepKind::Del, a[i]));
            i += 1;
        } else {
            steps.push(Step::new(StepKind::Add, b[j]));
            j += 1;
        }
    }

    // Drain whichever side remains
    while i < n {
        steps.push(Step::new(StepKind::Del, a[i]));
        i += 1;
    }
    while j < m {
        steps.push(Step::new(StepKind::Add, b[j]));
        j += 1;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(steps: &[Step<'_>]) -> Vec<String> {
        steps
            .iter()
            .map(|s| match s.kind {
                StepKind::Equal => format!("={}", s.text),
                StepKind::Del => format!("-{}", s.text),
                StepKind::Add => format!("+{}", s.text),
            })
            .collect()
    }

    #[test]
    fn identical_sides_are_all_equal() {
        let steps = align(&["a", "b"], &["a", "b"]);
        assert_eq!(render(&steps), ["=a", "=b"]);
    }

    #[test]
    fn both_empty_is_no_steps() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn empty_old_side_is_pure_additions() {
        let steps = align(&[], &["x", "y"]);
        assert_eq!(render(&steps), ["+x", "+y"]);
    }

    #[test]
    fn empty_new_side_is_pure_deletions() {
        let steps = align(&["x", "y"], &[]);
        assert_eq!(render(&steps), ["-x", "-y"]);
    }

    #[test]
    fn replacement_emits_del_before_add() {
        // Tie in the table: deletion wins
        let steps = align(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(render(&steps), ["=a", "-b", "+x", "=c"]);
    }

    #[test]
    fn insertion_in_the_middle() {
        let steps = align(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(render(&steps), ["=a", "+b", "=c"]);
    }

    #[test]
    fn deletion_in_the_middle() {
        let steps = align(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(render(&steps), ["=a", "-b", "=c"]);
    }

    #[test]
    fn common_subsequence_is_preserved() {
        let steps = align(&["a", "b", "c", "d"], &["b", "d", "e"]);
        assert_eq!(render(&steps), ["-a", "=b", "-c", "=d", "+e"]);
    }
}
