use crate::areas::comparison::Comparison;
use crate::areas::viewer::Viewer;
use crate::artifacts::core::debug_log;
use crate::artifacts::diff::diff_stat::{DiffStat, DiffSummary};
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::line_diff::{DiffLimits, compute_line_diff_checked};
use crate::artifacts::diff::tree_diff::{DiffFilter, TreeDiff};
use colored::Colorize;
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct StatOptions {
    pub limits: DiffLimits,
    pub filter: DiffFilter,
}

impl Viewer {
    pub fn stat(&self, old: &Path, new: &Path, opts: &StatOptions) -> anyhow::Result<()> {
        let stats = match Comparison::resolve(old, new)? {
            Comparison::Files { old, new } => {
                let path = if new.exists() { new.file() } else { old.file() };
                let stat = file_stat(&old, &new, opts.limits)?;

                if stat.is_unchanged() {
                    Vec::new()
                } else {
                    vec![(path.to_path_buf(), stat)]
                }
            }
            Comparison::Trees { old, new } => {
                let mut tree_diff = TreeDiff::new(&old, &new);
                tree_diff.compare(opts.filter)?;

                tree_diff
                    .changes()
                    .keys()
                    .map(|file| -> anyhow::Result<_> {
                        let a = DiffTarget::from_file(file, tree_diff.old())?;
                        let b = DiffTarget::from_file(file, tree_diff.new_side())?;
                        Ok((file.clone(), file_stat(&a, &b, opts.limits)?))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?
            }
        };

        self.print_stats(&stats)
    }

    fn print_stats(&self, stats: &[(PathBuf, DiffStat)]) -> anyhow::Result<()> {
        let path_width = stats
            .iter()
            .map(|(path, _)| path.display().to_string().len())
            .max()
            .unwrap_or(0);
        let max_changes = stats
            .iter()
            .map(|(_, stat)| stat.changes())
            .max()
            .unwrap_or(0);

        let mut summary = DiffSummary::default();

        for (path, stat) in stats {
            summary.record(stat);

            let plus = "+".repeat(scale(stat.additions, max_changes));
            let minus = "-".repeat(scale(stat.deletions, max_changes));

            writeln!(
                self.writer(),
                " {:<path_width$} | {} {}{}",
                path.display().to_string(),
                stat.changes(),
                plus.green(),
                minus.red()
            )?;
        }

        writeln!(self.writer(), " {summary}")?;

        Ok(())
    }
}

fn file_stat(a: &DiffTarget, b: &DiffTarget, limits: DiffLimits) -> anyhow::Result<DiffStat> {
    let lines = compute_line_diff_checked(a.text(), b.text(), limits)?;
    let stat = DiffStat::between(a, b, &lines);

    debug_log!("{}: {}", b.diff_path().display(), stat);

    Ok(stat)
}

fn scale(count: usize, max_changes: usize) -> usize {
    if max_changes <= BAR_WIDTH {
        count
    } else {
        (count * BAR_WIDTH).div_ceil(max_changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 10, 3)]
    #[case(0, 100, 0)]
    #[case(50, 100, 20)]
    #[case(1, 100, 1)]
    #[case(100, 100, 40)]
    fn test_scale(#[case] count: usize, #[case] max_changes: usize, #[case] expected: usize) {
        assert_eq!(scale(count, max_changes), expected);
    }
}
