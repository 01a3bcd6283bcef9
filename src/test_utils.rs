//! Shared helpers for the unit and integration test suites.

use crate::test_logging::TestLogger;

/// Ensures the process-global test logger exists.
///
/// Safe to call from every test; the first call wins and later calls are
/// no-ops. Verbosity comes from the `TEST_LOG_LEVEL` environment variable.
pub fn init_test_logging() {
    let _ = TestLogger::global();
}
