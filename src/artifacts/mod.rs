//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager output, debug logging)
//! - `diff`: Line diffing, diff statistics and tree comparison

pub mod core;
pub mod diff;
