//! Output destinations for formatted log lines
//!
//! A [`Sink`] receives each line together with the [`Stream`] it is routed to.
//! [`ConsoleSink`] writes to the process streams, [`MemorySink`] keeps lines in
//! a bounded ring buffer, and [`WriterSink`] wraps arbitrary writers.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::level::Severity;

/// Standard stream a line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// ERROR and DEBUG go to stderr, everything else to stdout
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error | Severity::Debug => Stream::Stderr,
            Severity::Off | Severity::Warn | Severity::Verbose | Severity::Info => Stream::Stdout,
        }
    }
}

/// Destination for formatted log lines
///
/// `line` carries no trailing newline; sinks that write text add one.
pub trait Sink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        (**self).write_line(stream, line)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        (**self).write_line(stream, line)
    }
}

/// Writes to the process stdout/stderr
///
/// Each line is written under the stream's lock so concurrent callers never
/// interleave within a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        }
    }
}

/// Routes lines to a pair of caller-supplied writers
pub struct WriterSink<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
}

impl<O: Write, E: Write> WriterSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Recover the writers
    pub fn into_inner(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(|e| e.into_inner()),
            self.err.into_inner().unwrap_or_else(|e| e.into_inner()),
        )
    }
}

impl<O: Write, E: Write> Sink for WriterSink<O, E> {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => {
                let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
                writeln!(out, "{}", line)
            }
            Stream::Stderr => {
                let mut err = self.err.lock().unwrap_or_else(|e| e.into_inner());
                writeln!(err, "{}", line)
            }
        }
    }
}

/// A line captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub stream: Stream,
    pub line: String,
}

/// Thread-safe ring buffer of emitted lines
pub struct MemorySink {
    entries: RwLock<VecDeque<CapturedLine>>,
    /// Oldest lines are dropped past this
    max_entries: usize,
}

impl MemorySink {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    /// Lines survive a panicking writer, so a poisoned lock is recovered
    fn read_entries(&self) -> RwLockReadGuard<'_, VecDeque<CapturedLine>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, VecDeque<CapturedLine>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// All captured lines, oldest first
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.read_entries().iter().cloned().collect()
    }

    /// Captured text for one stream only
    pub fn stream_lines(&self, stream: Stream) -> Vec<String> {
        self.read_entries()
            .iter()
            .filter(|c| c.stream == stream)
            .map(|c| c.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.write_entries().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(1_000)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        if self.max_entries == 0 {
            return Ok(());
        }
        let mut entries = self.write_entries();
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(CapturedLine {
            stream,
            line: line.to_string(),
        });
        Ok(())
    }
}
