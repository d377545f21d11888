//! Line oriented text sinks
//!
//! Decoders in this crate describe what they found by writing lines to a
//! [`Printer`]. A [`String`] collects the text, while a [`LogPrinter`] forwards
//! every complete line to [`tracing`].

use std::fmt::{self, Write};

use tracing::Level;

/// Something formatted text can be printed to
///
/// Lines are terminated by `\n`, which is part of the printed text.
pub trait Printer {
    /// Print formatted text, usually obtained via [`format_args!`]
    fn print(&mut self, args: fmt::Arguments<'_>);
}

impl Printer for String {
    fn print(&mut self, args: fmt::Arguments<'_>) {
        // formatting into a String only fails if a Display impl does
        let _ = self.write_fmt(args);
    }
}

/// A [`Printer`] emitting each line as a [`tracing`] event
///
/// Incomplete lines are held back until their terminating `\n` arrives or the
/// printer is dropped.
#[derive(Debug)]
pub struct LogPrinter {
    level: Level,
    prefix: &'static str,
    pending: String,
}

impl LogPrinter {
    /// Create a printer logging at the given level
    pub fn new(level: Level) -> LogPrinter {
        LogPrinter {
            level,
            prefix: "",
            pending: String::new(),
        }
    }

    /// Prefix every emitted line, e.g. with a connector name
    pub fn with_prefix(mut self, prefix: &'static str) -> LogPrinter {
        self.prefix = prefix;
        self
    }

    /// The level events are emitted at
    pub fn level(&self) -> Level {
        self.level
    }

    fn emit(&self, line: &str) {
        let prefix = self.prefix;
        if self.level == Level::ERROR {
            tracing::error!("{}{}", prefix, line);
        } else if self.level == Level::WARN {
            tracing::warn!("{}{}", prefix, line);
        } else if self.level == Level::INFO {
            tracing::info!("{}{}", prefix, line);
        } else if self.level == Level::DEBUG {
            tracing::debug!("{}{}", prefix, line);
        } else {
            tracing::trace!("{}{}", prefix, line);
        }
    }

    /// Emit whatever is pending, even without a line terminator
    pub fn flush(&mut self) {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.emit(&line);
        }
    }
}

impl Printer for LogPrinter {
    fn print(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.pending.write_fmt(args);
        while let Some(idx) = self.pending.find('\n') {
            let rest = self.pending.split_off(idx + 1);
            let line = std::mem::replace(&mut self.pending, rest);
            self.emit(line.trim_end_matches('\n'));
        }
    }
}

impl Drop for LogPrinter {
    fn drop(&mut self) {
        self.flush();
    }
}
