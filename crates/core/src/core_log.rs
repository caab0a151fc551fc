use std::fmt;

/// Severity attached to every core log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Host-provided sink for core diagnostics (profile repairs, rejected configs).
///
/// Hosts implement `log`; the per-level helpers all route through it.
pub trait CoreLog: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

/// Drops everything.
pub struct NoopLog;
impl CoreLog for NoopLog {
    fn log(&self, _level: LogLevel, _msg: &str) {}
}

#[cfg(test)]
pub(crate) mod test_log {
    use super::{CoreLog, LogLevel};
    use std::sync::Mutex;

    /// Captures warnings so tests can assert on normalization reports.
    #[derive(Default)]
    pub struct RecordingLog {
        pub warnings: Mutex<Vec<String>>,
    }

    impl CoreLog for RecordingLog {
        fn log(&self, level: LogLevel, msg: &str) {
            if level != LogLevel::Warn {
                return;
            }
            if let Ok(mut w) = self.warnings.lock() {
                w.push(msg.to_string());
            }
        }
    }

    #[test]
    fn helpers_route_through_log() {
        let rec = RecordingLog::default();
        rec.info("skipped");
        rec.warn("kept");
        rec.error("skipped too");
        assert_eq!(*rec.warnings.lock().unwrap(), ["kept"]);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}
