//! Line-oriented diffing for pull-request style "files changed" views.
//!
//! The heart of the crate is [`compute_line_diff`], a greedy two-cursor line
//! matcher that turns two texts into an ordered list of [`DiffLine`] rows
//! (common, added or removed) ready for side-by-side rendering. Around it
//! sit the input boundary ([`DiffTarget`], [`compute_line_diff_checked`]),
//! directory comparison and the terminal renderers used by the `linediff`
//! binary.
//!
//! - `areas`: Comparison inputs (workspaces) and the output sink
//! - `artifacts`: Diff algorithms and data structures
//! - `commands`: The `diff` and `stat` reports

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::diff_line::{DiffLine, LineKind};
pub use artifacts::diff::diff_target::DiffTarget;
pub use artifacts::diff::error::DiffError;
pub use artifacts::diff::line_diff::{
    DiffLimits, compute_line_diff, compute_line_diff_checked, split_lines,
};
