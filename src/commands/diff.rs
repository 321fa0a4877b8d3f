use crate::areas::comparison::Comparison;
use crate::areas::viewer::Viewer;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::debug_log;
use crate::artifacts::diff::diff_line::{DiffLine, LineKind};
use crate::artifacts::diff::diff_stat::DiffStat;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::line_diff::{DiffLimits, compute_line_diff_checked};
use crate::artifacts::diff::tree_diff::{DiffFilter, TreeChangeType, TreeDiff};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::path::{Path, PathBuf};

const MIN_NUMBER_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    /// Old/New/Content table
    #[default]
    Table,
    /// One marker-prefixed line per row
    Plain,
    /// Machine-readable rows
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub format: DiffFormat,
    pub limits: DiffLimits,
    pub filter: DiffFilter,
}

/// The diff of one file inside a tree comparison.
#[derive(Debug, Serialize)]
pub struct FileDiff {
    pub path: PathBuf,
    pub status: TreeChangeType,
    #[serde(flatten)]
    pub stat: DiffStat,
    pub lines: Vec<DiffLine>,
}

impl Viewer {
    pub fn diff(&self, old: &Path, new: &Path, opts: &DiffOptions) -> anyhow::Result<()> {
        match Comparison::resolve(old, new)? {
            Comparison::Files { old, new } => self.diff_files(&old, &new, opts),
            Comparison::Trees { old, new } => self.diff_trees(&old, &new, opts),
        }
    }

    fn diff_files(&self, a: &DiffTarget, b: &DiffTarget, opts: &DiffOptions) -> anyhow::Result<()> {
        let lines = compute_line_diff_checked(a.text(), b.text(), opts.limits)?;

        match opts.format {
            DiffFormat::Table => self.print_table(a, b, &lines),
            DiffFormat::Plain => self.print_plain(&lines),
            DiffFormat::Json => {
                writeln!(self.writer(), "{}", serde_json::to_string_pretty(&lines)?)?;
                Ok(())
            }
        }
    }

    fn diff_trees(
        &self,
        old: &Workspace,
        new: &Workspace,
        opts: &DiffOptions,
    ) -> anyhow::Result<()> {
        let mut tree_diff = TreeDiff::new(old, new);
        tree_diff.compare(opts.filter)?;

        debug_log!(
            "{} changed files between {} and {}",
            tree_diff.changes().len(),
            old.path().display(),
            new.path().display()
        );

        let file_diffs = tree_diff
            .changes()
            .iter()
            .map(|(file, change)| -> anyhow::Result<_> {
                let a = DiffTarget::from_file(file, old)?;
                let b = DiffTarget::from_file(file, new)?;
                let lines = compute_line_diff_checked(a.text(), b.text(), opts.limits)?;
                let file_diff = FileDiff {
                    path: file.clone(),
                    status: *change,
                    stat: DiffStat::between(&a, &b, &lines),
                    lines,
                };

                Ok((a, b, file_diff))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if opts.format == DiffFormat::Json {
            let file_diffs = file_diffs
                .iter()
                .map(|(_, _, diff)| diff)
                .collect::<Vec<_>>();
            writeln!(
                self.writer(),
                "{}",
                serde_json::to_string_pretty(&file_diffs)?
            )?;
            return Ok(());
        }

        for (a, b, file_diff) in &file_diffs {
            self.print_file_header(a, b, file_diff.status)?;

            match opts.format {
                DiffFormat::Table => self.print_table(a, b, &file_diff.lines)?,
                _ => self.print_plain(&file_diff.lines)?,
            }
        }

        Ok(())
    }

    fn print_file_header(
        &self,
        a: &DiffTarget,
        b: &DiffTarget,
        change: TreeChangeType,
    ) -> anyhow::Result<()> {
        let a_file = Path::new("a").join(a.file());
        let b_file = Path::new("b").join(b.file());

        writeln!(
            self.writer(),
            "{}",
            format!("diff {} {}", a_file.display(), b_file.display()).bold()
        )?;

        match change {
            TreeChangeType::Added => writeln!(self.writer(), "{}", "new file".bold())?,
            TreeChangeType::Deleted => writeln!(self.writer(), "{}", "deleted file".bold())?,
            TreeChangeType::Modified => {}
        }

        let a_path = if a.exists() { a_file } else { a.diff_path() };
        let b_path = if b.exists() { b_file } else { b.diff_path() };
        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", a_path.display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", b_path.display()).bold()
        )?;

        Ok(())
    }

    fn print_plain(&self, lines: &[DiffLine]) -> anyhow::Result<()> {
        for line in lines {
            writeln!(self.writer(), "{}", paint(line.kind(), line.as_string()))?;
        }

        Ok(())
    }

    fn print_table(
        &self,
        a: &DiffTarget,
        b: &DiffTarget,
        lines: &[DiffLine],
    ) -> anyhow::Result<()> {
        if a.text().is_empty() && b.text().is_empty() {
            writeln!(self.writer(), "{}", "Differences".bold())?;
            writeln!(self.writer(), "No content to compare.")?;
            return Ok(());
        }

        if a.text() == b.text() {
            writeln!(self.writer(), "{}", "Differences".bold())?;
            writeln!(self.writer(), "No changes detected.")?;
            writeln!(self.writer())?;
            writeln!(self.writer(), "{}", b.text())?;
            return Ok(());
        }

        let stat = DiffStat::between(a, b, lines);
        writeln!(self.writer(), "{} ({})", "Differences".bold(), stat)?;

        let width = number_width(lines);
        writeln!(
            self.writer(),
            "{}",
            format!("{:>width$} {:>width$}   {}", "Old", "New", "Content").dimmed()
        )?;

        for line in lines {
            let old = line
                .line_number_old()
                .map(|n| n.to_string())
                .unwrap_or_default();
            let new = line
                .line_number_new()
                .map(|n| n.to_string())
                .unwrap_or_default();

            writeln!(
                self.writer(),
                "{} {} {}",
                format!("{old:>width$}").dimmed(),
                format!("{new:>width$}").dimmed(),
                paint(
                    line.kind(),
                    format!("{} {}", line.kind().marker(), line.text())
                )
            )?;
        }

        Ok(())
    }
}

fn paint(kind: LineKind, text: String) -> ColoredString {
    match kind {
        LineKind::Added => text.green(),
        LineKind::Removed => text.red(),
        LineKind::Common => text.normal(),
    }
}

fn number_width(lines: &[DiffLine]) -> usize {
    lines
        .iter()
        .flat_map(|line| [line.line_number_old(), line.line_number_new()])
        .flatten()
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(0)
        .max(MIN_NUMBER_WIDTH)
}
