//! Named logger with a fixed minimum severity

use std::io;

use super::format::{format_line, Clock, SystemClock};
use super::level::{resolve, LevelSpec, Severity};
use super::sink::{ConsoleSink, Sink, Stream};

/// A named logger
///
/// The minimum level is resolved once at construction and never changes.
/// Each call filters, formats, then writes one line to the sink. Write errors
/// are returned as-is.
#[derive(Debug)]
pub struct Logger<S = ConsoleSink, C = SystemClock> {
    name: String,
    min_level: Severity,
    sink: S,
    clock: C,
}

impl Logger {
    /// Create a logger writing to the process stdout/stderr
    pub fn new(name: impl Into<String>, level: impl Into<LevelSpec>) -> Self {
        Self::with_sink(name, level, ConsoleSink)
    }
}

impl<S: Sink> Logger<S> {
    /// Create a logger writing to `sink`, timestamped by the system clock
    pub fn with_sink(name: impl Into<String>, level: impl Into<LevelSpec>, sink: S) -> Self {
        Self::with_sink_and_clock(name, level, sink, SystemClock)
    }
}

impl<S: Sink, C: Clock> Logger<S, C> {
    pub fn with_sink_and_clock(
        name: impl Into<String>,
        level: impl Into<LevelSpec>,
        sink: S,
        clock: C,
    ) -> Self {
        Self {
            name: name.into(),
            min_level: resolve(level),
            sink,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved minimum severity
    pub fn level(&self) -> Severity {
        self.min_level
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether a message at `severity` would be written
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.min_level.permits(severity)
    }

    /// Log `message` at `severity`; a no-op when filtered out
    pub fn log(&self, severity: Severity, message: &str) -> io::Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let line = format_line(&self.clock.now(), severity, &self.name, message);
        self.sink.write_line(Stream::for_severity(severity), &line)
    }

    pub fn error(&self, message: &str) -> io::Result<()> {
        self.log(Severity::Error, message)
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.log(Severity::Warn, message)
    }

    pub fn verbose(&self, message: &str) -> io::Result<()> {
        self.log(Severity::Verbose, message)
    }

    pub fn info(&self, message: &str) -> io::Result<()> {
        self.log(Severity::Info, message)
    }

    pub fn debug(&self, message: &str) -> io::Result<()> {
        self.log(Severity::Debug, message)
    }
}
