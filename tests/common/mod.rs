//! Shared helpers for the integration test suites.

#![allow(dead_code)]

pub use bivalent::{assert_with_log, test_complete, test_log, test_phase, test_warn};

/// Ensures the process-global test logger exists.
pub fn init_test_logging() {
    bivalent::test_utils::init_test_logging();
}
