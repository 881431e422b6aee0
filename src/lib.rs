//! Levelog - named, leveled console logging
//!
//! A [`Logger`] carries a name and a minimum [`Severity`], and writes
//! `[timestamp] [LEVEL] name - message` lines to stdout or stderr.

pub mod config;
pub mod logging;

pub use config::LoggerConfig;
pub use logging::{resolve, Logger, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports() {
        let logger: Logger = Logger::new("root", Severity::Off);
        assert_eq!(logger.level(), resolve("off"));
    }
}
