use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use linediff::areas::viewer::Viewer;
use linediff::artifacts::core::Output;
use linediff::artifacts::diff::line_diff::DiffLimits;
use linediff::artifacts::diff::tree_diff::DiffFilter;
use linediff::commands::diff::{DiffFormat, DiffOptions};
use linediff::commands::stat::StatOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    about = "Compare two files or directory trees line by line",
    long_about = "This tool compares an old and a new version of a file, or of a whole \
    directory tree, and shows which lines are common, added or removed. \
    It uses a simple greedy line matcher, not a minimal edit script.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        default_value_t = ColorMode::Auto,
        global = true,
        help = "When to colorize the output"
    )]
    color: ColorMode,
    #[arg(long, global = true, help = "Write to stdout instead of the pager")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show line differences between two files or trees",
        long_about = "This command shows the lines that are common, added or removed between \
        OLD and NEW. A missing file compares like an empty one."
    )]
    Diff {
        #[arg(index = 1, help = "The old file or directory")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file or directory")]
        new: PathBuf,
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = DiffFormat::Table,
            help = "The output format"
        )]
        format: DiffFormat,
        #[arg(long, help = "Refuse to diff a side with more lines than this")]
        max_lines: Option<usize>,
        #[arg(
            long,
            value_parser = parse_diff_filter,
            help = "Only show (A)dded, (D)eleted or (M)odified files, e.g. AM"
        )]
        diff_filter: Option<DiffFilter>,
    },
    #[command(
        name = "stat",
        about = "Show addition and deletion counts per file",
        long_about = "This command prints one line per changed file with its number of \
        changed lines, followed by a summary of files, insertions and deletions."
    )]
    Stat {
        #[arg(index = 1, help = "The old file or directory")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file or directory")]
        new: PathBuf,
        #[arg(long, help = "Refuse to diff a side with more lines than this")]
        max_lines: Option<usize>,
        #[arg(
            long,
            value_parser = parse_diff_filter,
            help = "Only count (A)dded, (D)eleted or (M)odified files, e.g. AM"
        )]
        diff_filter: Option<DiffFilter>,
    },
}

fn parse_diff_filter(raw: &str) -> Result<DiffFilter, String> {
    DiffFilter::try_parse(raw)
        .ok_or_else(|| format!("invalid diff filter '{raw}', expected letters from A, D, M"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let output = Output::new(!cli.no_pager);
    let viewer = Viewer::new(output.writer());

    match &cli.command {
        Commands::Diff {
            old,
            new,
            format,
            max_lines,
            diff_filter,
        } => {
            let opts = DiffOptions {
                format: *format,
                limits: DiffLimits::new(*max_lines),
                filter: diff_filter.unwrap_or_default(),
            };

            viewer.diff(old, new, &opts)?
        }
        Commands::Stat {
            old,
            new,
            max_lines,
            diff_filter,
        } => {
            let opts = StatOptions {
                limits: DiffLimits::new(*max_lines),
                filter: diff_filter.unwrap_or_default(),
            };

            viewer.stat(old, new, &opts)?
        }
    }

    viewer.flush()?;
    drop(viewer);

    output.finish()
}
