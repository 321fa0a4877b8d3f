//! Command implementations
//!
//! Each command is an `impl Viewer` block rendering one kind of report:
//!
//! - `diff`: Line-by-line differences as a table, marker lines or JSON
//! - `stat`: Per-file addition/deletion counts and a summary line
//!
//! Both accept either two files or two directory trees.

pub mod diff;
pub mod stat;
