//! Error types for the diff input boundary.
//!
//! The line diff itself cannot fail. These errors come from turning raw input
//! into text, and from the optional size guard that runs before a diff.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Old => write!(f, "old"),
            Side::New => write!(f, "new"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DiffError {
    /// The input is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// One side has more lines than the configured limit.
    #[error("{side} text has {lines} lines, which exceeds the limit of {limit}")]
    TooLarge {
        side: Side,
        lines: usize,
        limit: usize,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
