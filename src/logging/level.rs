//! Severity levels and level resolution
//!
//! Maps free-form level specifiers to a canonical [`Severity`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered log severity
///
/// Declaration order is rank order: `Off` is the most restrictive setting,
/// `Debug` the most permissive. Serializes as the lower-case name and
/// deserializes through [`resolve`], so any casing is accepted and unknown
/// names become `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    Off,
    Error,
    Warn,
    Verbose,
    Info,
    Debug,
}

/// Lower-cased canonical names, checked at resolve time
const SEVERITY_NAMES: &[(&str, Severity)] = &[
    ("off", Severity::Off),
    ("error", Severity::Error),
    ("warn", Severity::Warn),
    ("verbose", Severity::Verbose),
    ("info", Severity::Info),
    ("debug", Severity::Debug),
];

impl Severity {
    /// Upper-case name as it appears in output lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Verbose => "VERBOSE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Whether a minimum level of `self` lets a message at `level` through
    pub fn permits(&self, level: Severity) -> bool {
        *self != Severity::Off && level != Severity::Off && level <= *self
    }

    /// Closest `tracing` level, `None` for `Off`
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            Severity::Off => None,
            Severity::Error => Some(tracing::Level::ERROR),
            Severity::Warn => Some(tracing::Level::WARN),
            Severity::Verbose | Severity::Info => Some(tracing::Level::INFO),
            Severity::Debug => Some(tracing::Level::DEBUG),
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        resolve(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}

/// Returned by strict parsing when a name matches no known level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        SEVERITY_NAMES
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, severity)| *severity)
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// A level as supplied by a caller: already resolved, or a name to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSpec {
    Severity(Severity),
    Name(String),
}

impl From<Severity> for LevelSpec {
    fn from(severity: Severity) -> Self {
        LevelSpec::Severity(severity)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}

impl From<&String> for LevelSpec {
    fn from(name: &String) -> Self {
        LevelSpec::Name(name.clone())
    }
}

/// Resolve a level specifier to a [`Severity`]
///
/// Names are matched case-insensitively. Anything unrecognized falls back to
/// [`Severity::Info`]; this never fails.
pub fn resolve(spec: impl Into<LevelSpec>) -> Severity {
    match spec.into() {
        LevelSpec::Severity(severity) => severity,
        LevelSpec::Name(name) => name.parse().unwrap_or_else(|e: ParseSeverityError| {
            tracing::debug!("{}, falling back to info", e);
            Severity::Info
        }),
    }
}
