//! Test logging infrastructure: level-filtered event capture with a full
//! report printed when an assertion fails.
//!
//! The pieces:
//!
//! - [`TestLogLevel`]: configurable verbosity, read from the
//!   `TEST_LOG_LEVEL` environment variable.
//! - [`TestEvent`]: typed events (phase markers, evaluation notes,
//!   warnings, errors, completion markers).
//! - [`TestLogger`]: captures events with elapsed-time stamps behind a
//!   process-global instance.
//!
//! Tests interact through the macros: [`test_phase!`](crate::test_phase)
//! marks the start of a test, [`test_log!`](crate::test_log) records a
//! note, [`assert_with_log!`](crate::assert_with_log) asserts and dumps
//! the captured report on failure, and
//! [`test_complete!`](crate::test_complete) marks the end.

use std::fmt;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

// ============================================================================
// TestLogLevel
// ============================================================================

/// Logging verbosity level for tests.
///
/// Levels are ordered from least to most verbose:
/// `Error < Warn < Info < Debug < Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TestLogLevel {
    /// Only errors and failures.
    Error,
    /// Warnings and above.
    Warn,
    /// General test progress: phase and completion markers.
    #[default]
    Info,
    /// Per-operation evaluation notes.
    Debug,
    /// Everything.
    Trace,
}

impl TestLogLevel {
    /// Returns a human-readable name for the level.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the level configured via the `TEST_LOG_LEVEL` environment
    /// variable, or the default.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("TEST_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for TestLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TestLogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

// ============================================================================
// TestEvent
// ============================================================================

/// A typed event captured by the test logger.
#[derive(Debug, Clone)]
pub enum TestEvent {
    /// A test (or test phase) started.
    Phase {
        /// Phase name.
        name: String,
    },
    /// A free-form note from inside a test.
    Note {
        /// Note category, e.g. `"eval"` or `"setup"`.
        category: &'static str,
        /// Rendered message.
        message: String,
    },
    /// A warning.
    Warn {
        /// Warning category.
        category: &'static str,
        /// Rendered message.
        message: String,
    },
    /// An error observation (does not itself fail the test).
    Error {
        /// Error category.
        category: &'static str,
        /// Rendered message.
        message: String,
    },
    /// A test completed.
    Complete {
        /// Completed test name.
        name: String,
    },
}

impl TestEvent {
    /// The verbosity level at which this event is captured.
    #[must_use]
    pub const fn level(&self) -> TestLogLevel {
        match self {
            Self::Error { .. } => TestLogLevel::Error,
            Self::Warn { .. } => TestLogLevel::Warn,
            Self::Phase { .. } | Self::Complete { .. } => TestLogLevel::Info,
            Self::Note { .. } => TestLogLevel::Debug,
        }
    }
}

impl fmt::Display for TestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phase { name } => write!(f, "phase: {name}"),
            Self::Note { category, message }
            | Self::Warn { category, message }
            | Self::Error { category, message } => write!(f, "{category}: {message}"),
            Self::Complete { name } => write!(f, "complete: {name}"),
        }
    }
}

// ============================================================================
// TestLogger
// ============================================================================

struct EventRecord {
    at: Duration,
    event: TestEvent,
}

/// Captures typed test events with elapsed-time stamps.
///
/// Events below the configured level are dropped at capture time. The full
/// captured history is rendered by [`report`](TestLogger::report), which the
/// assertion macros print on failure.
pub struct TestLogger {
    min_level: TestLogLevel,
    start: Instant,
    events: Mutex<Vec<EventRecord>>,
}

impl TestLogger {
    /// Creates a logger capturing events at or below `min_level`.
    #[must_use]
    pub fn new(min_level: TestLogLevel) -> Self {
        Self {
            min_level,
            start: Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// The process-global logger, created on first use with the level from
    /// the environment.
    pub fn global() -> &'static TestLogger {
        static GLOBAL: OnceLock<TestLogger> = OnceLock::new();
        GLOBAL.get_or_init(|| TestLogger::new(TestLogLevel::from_env()))
    }

    /// Captures an event, subject to level filtering.
    pub fn log(&self, event: TestEvent) {
        if event.level() > self.min_level {
            return;
        }
        let record = EventRecord {
            at: self.start.elapsed(),
            event,
        };
        self.events.lock().expect("test logger poisoned").push(record);
    }

    /// Number of captured events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.lock().expect("test logger poisoned").len()
    }

    /// Renders every captured event with its timestamp.
    #[must_use]
    pub fn report(&self) -> String {
        use fmt::Write as _;

        let events = self.events.lock().expect("test logger poisoned");
        let mut out = String::new();
        let _ = writeln!(out, "=== test log ({} events) ===", events.len());
        for record in events.iter() {
            let _ = writeln!(
                out,
                "[{:>12.3?}] {:5} {}",
                record.at,
                record.event.level().name(),
                record.event
            );
        }
        out
    }

    /// Drops all captured events.
    pub fn clear(&self) {
        self.events.lock().expect("test logger poisoned").clear();
    }
}

// ============================================================================
// Macros
// ============================================================================

/// Marks the start of a test or test phase in the global logger.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::test_logging::TestLogger::global().log($crate::test_logging::TestEvent::Phase {
            name: String::from($name),
        });
    };
}

/// Records a categorized note in the global logger.
#[macro_export]
macro_rules! test_log {
    ($cat:literal, $($arg:tt)*) => {
        $crate::test_logging::TestLogger::global().log($crate::test_logging::TestEvent::Note {
            category: $cat,
            message: format!($($arg)*),
        });
    };
}

/// Records a warning in the global logger.
#[macro_export]
macro_rules! test_warn {
    ($cat:literal, $($arg:tt)*) => {
        $crate::test_logging::TestLogger::global().log($crate::test_logging::TestEvent::Warn {
            category: $cat,
            message: format!($($arg)*),
        });
    };
}

/// Asserts a condition, printing the full captured log on failure.
///
/// The failure message names the checked condition and shows the expected
/// and actual values with their `Debug` renderings.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $label:expr, $expected:expr, $actual:expr) => {
        if !$cond {
            eprintln!("{}", $crate::test_logging::TestLogger::global().report());
            panic!(
                "assertion failed: {} (expected {:?}, got {:?})",
                $label, $expected, $actual
            );
        }
    };
}

/// Marks a test as completed in the global logger.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::test_logging::TestLogger::global().log($crate::test_logging::TestEvent::Complete {
            name: String::from($name),
        });
    };
}

// ============================================================================
// Tests
// ============================================================================
