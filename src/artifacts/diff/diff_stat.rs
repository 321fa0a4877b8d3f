use crate::artifacts::diff::diff_line::{DiffLine, LineKind};
use crate::artifacts::diff::diff_target::DiffTarget;
use serde::Serialize;
use std::fmt::Display;

/// Per-file line counts of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub additions: usize,
    pub deletions: usize,
}

impl DiffStat {
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(DiffStat::default(), |mut stat, line| {
            match line.kind() {
                LineKind::Added => stat.additions += 1,
                LineKind::Removed => stat.deletions += 1,
                LineKind::Common => {}
            }
            stat
        })
    }

    /// Counts for the diff between two targets.
    ///
    /// A side that does not exist only stands in as empty text, so its empty
    /// line is not counted: an added file has no deletions and a deleted file
    /// has no additions.
    pub fn between(old: &DiffTarget, new: &DiffTarget, lines: &[DiffLine]) -> Self {
        let mut stat = Self::from_lines(lines);

        if !old.exists() {
            stat.deletions = 0;
        }
        if !new.exists() {
            stat.additions = 0;
        }

        stat
    }

    pub fn changes(&self) -> usize {
        self.additions + self.deletions
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes() == 0
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

impl Display for DiffStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}",
            plural(self.additions, "addition", "additions"),
            plural(self.deletions, "deletion", "deletions")
        )
    }
}

/// Totals over every file of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    pub fn record(&mut self, stat: &DiffStat) {
        self.files_changed += 1;
        self.insertions += stat.additions;
        self.deletions += stat.deletions;
    }
}

impl Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} changed, {}(+), {}(-)",
            plural(self.files_changed, "file", "files"),
            plural(self.insertions, "insertion", "insertions"),
            plural(self.deletions, "deletion", "deletions")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::line_diff::compute_line_diff;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::Path;

    #[test]
    fn counts_each_kind() {
        let stat = DiffStat::from_lines(&compute_line_diff("a\nb\nc", "a\nx\nc\nd"));

        assert_eq!(
            stat,
            DiffStat {
                additions: 2,
                deletions: 1,
            }
        );
        assert!(!stat.is_unchanged());
    }

    #[test]
    fn identical_text_is_unchanged() {
        let stat = DiffStat::from_lines(&compute_line_diff("a\nb", "a\nb"));

        assert!(stat.is_unchanged());
    }

    #[rstest]
    #[case(None, Some("four"), 1, 0)]
    #[case(None, Some("a\n"), 2, 0)]
    #[case(Some("two"), None, 0, 1)]
    #[case(Some("three"), Some("three modified"), 1, 1)]
    fn absent_side_counts_one_sided(
        #[case] old: Option<&str>,
        #[case] new: Option<&str>,
        #[case] additions: usize,
        #[case] deletions: usize,
    ) {
        let target = |text: Option<&str>| match text {
            Some(text) => DiffTarget::from_text(Path::new("f.txt"), text),
            None => DiffTarget::from_nothing(Path::new("f.txt")),
        };
        let (old, new) = (target(old), target(new));
        let lines = compute_line_diff(old.text(), new.text());

        assert_eq!(
            DiffStat::between(&old, &new, &lines),
            DiffStat {
                additions,
                deletions,
            }
        );
    }

    #[rstest]
    #[case(1, 1, "1 addition, 1 deletion")]
    #[case(0, 2, "0 additions, 2 deletions")]
    #[case(3, 0, "3 additions, 0 deletions")]
    fn display_uses_singular_forms(
        #[case] additions: usize,
        #[case] deletions: usize,
        #[case] expected: &str,
    ) {
        let stat = DiffStat {
            additions,
            deletions,
        };

        assert_eq!(stat.to_string(), expected);
    }

    #[test]
    fn summary_accumulates_files() {
        let mut summary = DiffSummary::default();
        summary.record(&DiffStat {
            additions: 2,
            deletions: 1,
        });
        summary.record(&DiffStat {
            additions: 0,
            deletions: 3,
        });

        assert_eq!(
            summary.to_string(),
            "2 files changed, 2 insertions(+), 4 deletions(-)"
        );
    }
}
