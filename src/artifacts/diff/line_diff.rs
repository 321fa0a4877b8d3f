use crate::artifacts::diff::diff_line::DiffLine;
use crate::artifacts::diff::error::{DiffError, Side};
use derive_new::new;

/// Split text into lines on `\n` only.
///
/// A trailing `\r` stays part of the line, and the empty string yields a
/// single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compute the line diff between two texts.
///
/// ```
/// use linediff::artifacts::diff::diff_line::DiffLine;
/// use linediff::artifacts::diff::line_diff::compute_line_diff;
///
/// let lines = compute_line_diff("a\nb\nc", "a\nx\nc");
/// assert_eq!(
///     lines,
///     vec![
///         DiffLine::common(1, 1, "a"),
///         DiffLine::removed(2, "b"),
///         DiffLine::added(2, "x"),
///         DiffLine::common(3, 3, "c"),
///     ]
/// );
/// ```
pub fn compute_line_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    LineDiff::new(&old_lines, &new_lines).diff()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffLimits {
    pub max_lines: Option<usize>,
}

impl DiffLimits {
    pub fn check(&self, side: Side, lines: usize) -> Result<(), DiffError> {
        match self.max_lines {
            Some(limit) if lines > limit => Err(DiffError::TooLarge { side, lines, limit }),
            _ => Ok(()),
        }
    }
}

/// Same as [`compute_line_diff`], but refuses inputs with more lines per side
/// than `limits` allows before any lookahead work starts.
pub fn compute_line_diff_checked(
    old_text: &str,
    new_text: &str,
    limits: DiffLimits,
) -> Result<Vec<DiffLine>, DiffError> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    limits.check(Side::Old, old_lines.len())?;
    limits.check(Side::New, new_lines.len())?;

    Ok(LineDiff::new(&old_lines, &new_lines).diff())
}

/// Greedy two-cursor line matcher.
///
/// When the current lines differ, each one is checked against the rest of the
/// opposite side. A line that never shows up again is emitted right away;
/// whatever is left unresolved is emitted afterwards, so every mismatching
/// step produces exactly one removed and one added row. This is not a
/// minimal edit script.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LineDiff<'d> {
    a: &'d [&'d str],
    b: &'d [&'d str],
}

impl<'d> LineDiff<'d> {
    pub fn diff(&self) -> Vec<DiffLine> {
        let (n, m) = (self.a.len(), self.b.len());
        let mut script = EditScript::with_capacity(n + m);
        let (mut i, mut j) = (0, 0);

        while i < n || j < m {
            if i < n && j < m {
                if self.a[i] == self.b[j] {
                    script.common(self.a[i]);
                    i += 1;
                    j += 1;
                    continue;
                }

                let old_reappears = self.b[j..].contains(&self.a[i]);
                let new_reappears = self.a[i..].contains(&self.b[j]);

                let mut removed = false;
                let mut added = false;

                if !old_reappears {
                    script.removed(self.a[i]);
                    i += 1;
                    removed = true;
                }

                if !new_reappears {
                    script.added(self.b[j]);
                    j += 1;
                    added = true;
                }

                // fallback: both cursors always move on a mismatch
                if !removed {
                    script.removed(self.a[i]);
                    i += 1;
                }

                if !added {
                    script.added(self.b[j]);
                    j += 1;
                }
            } else if i < n {
                script.removed(self.a[i]);
                i += 1;
            } else {
                script.added(self.b[j]);
                j += 1;
            }
        }

        script.into_lines()
    }
}

#[derive(Debug, Default)]
struct EditScript {
    old_line_num: usize,
    new_line_num: usize,
    lines: Vec<DiffLine>,
}

impl EditScript {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    fn common(&mut self, text: &str) {
        self.old_line_num += 1;
        self.new_line_num += 1;
        self.lines
            .push(DiffLine::common(self.old_line_num, self.new_line_num, text));
    }

    fn removed(&mut self, text: &str) {
        self.old_line_num += 1;
        self.lines.push(DiffLine::removed(self.old_line_num, text));
    }

    fn added(&mut self, text: &str) {
        self.new_line_num += 1;
        self.lines.push(DiffLine::added(self.new_line_num, text));
    }

    fn into_lines(self) -> Vec<DiffLine> {
        self.lines
    }
}
