//! Leveled logging
//!
//! Severity model and resolution, line formatting, output sinks and the
//! [`Logger`] that ties them together.

mod format;
mod level;
mod logger;
mod sink;

pub use format::{format_line, format_timestamp, Clock, FixedClock, SystemClock};
pub use level::{resolve, LevelSpec, ParseSeverityError, Severity};
pub use logger::Logger;
pub use sink::{CapturedLine, ConsoleSink, MemorySink, Sink, Stream, WriterSink};
