//! Line diffing and tree comparison
//!
//! This module implements the diffing pieces:
//!
//! - `line_diff`: the greedy two-cursor line matcher and line splitting
//! - `diff_line`: the annotated rows it produces
//! - `diff_stat`: addition/deletion counts per file and per comparison
//! - `diff_target`: one side of a comparison (bytes or a file turned into text)
//! - `tree_diff`: pairing the files of two directory trees
//! - `error`: input boundary errors
//!
//! The line diff is a pure function; everything that touches the file system
//! or can fail lives in the other modules.

pub mod diff_line;
pub mod diff_stat;
pub mod diff_target;
pub mod error;
pub mod line_diff;
pub mod tree_diff;
