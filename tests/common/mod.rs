//! Shared helpers for the integration tests: a minimal assertion
//! collaborator honoring the fail/message contract the core consumes, and an
//! event-stream checker.

#![allow(dead_code)]

use std::fmt::Display;

use verdict::{Failure, ResultEvent};

/// Fails with "expected <value> to be truthy" unless `value` is true.
pub fn expect_truthy(value: bool) -> Result<(), Failure> {
    if value {
        Ok(())
    } else {
        Err(Failure::new(format!("expected {} to be truthy", value)))
    }
}

/// Fails with "expected <actual> to equal <expected>" unless they match.
pub fn expect_equal<T: PartialEq + Display>(actual: T, expected: T) -> Result<(), Failure> {
    if actual == expected {
        Ok(())
    } else {
        Err(Failure::new(format!(
            "expected {} to equal {}",
            actual, expected
        )))
    }
}

/// Asserts the emitted stream matches `expected` exactly, order included.
pub fn check_events(actual: &[ResultEvent], expected: &[(&str, bool)]) {
    let got: Vec<(&str, bool)> = actual.iter().map(|e| (e.name.as_str(), e.passed)).collect();
    assert_eq!(got, expected);
}
