//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application:
//! the pager-backed output and the feature-gated debug logger.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Comparing {}", path.display());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where command output goes: the pager when stdout is a terminal and paging
/// is enabled, stdout otherwise.
///
/// ## Usage
///
/// ```ignore
/// let output = Output::new(true);
/// let mut writer = output.writer();
/// writeln!(writer, "Some long output...")?;
/// output.finish()?;
/// ```
pub struct Output {
    pager: Option<Pager>,
}

impl Output {
    pub fn new(use_pager: bool) -> Self {
        let pager = (use_pager && io::stdout().is_terminal()).then(Pager::new);
        Self { pager }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match &self.pager {
            Some(pager) => Box::new(PagerWriter::new(pager.clone())),
            None => Box::new(io::stdout()),
        }
    }

    /// Hand the buffered output to the pager, if any. Blocks until the user
    /// quits it.
    pub fn finish(self) -> anyhow::Result<()> {
        if let Some(pager) = self.pager {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
