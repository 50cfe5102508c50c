// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The reporting sink every processing notice flows through.
//!
//! The processor never writes to a stream directly; it hands each notice to a
//! [`Reporter`]. Production code wires in [`TracingReporter`], which renders
//! notices through the observability message types. Tests wire in
//! [`CapturingReporter`] and assert on the recorded notice sequence.

use std::sync::Mutex;

use crate::errors::ProcessError;
use crate::observability::messages::processor::{
    FileContentEmitted, FileHandleReleased, FileProcessingStarted,
};
use crate::observability::messages::validation::{FileDataErrorRaised, KnownErrorRaised};
use crate::observability::messages::StructuredLog;

/// Sink for the notices a single processing attempt emits.
///
/// Channel contract: per invocation the processor calls exactly one of
/// `file_content` / `data_error` / `known_error`, then `handle_released`,
/// in that order.
pub trait Reporter: Send + Sync {
    /// Content notice: the request validated and its content was "processed".
    fn file_content(&self, file_name: &str, content: &str);

    /// Special data-error channel, reserved for [`ProcessError::EmptyPayload`].
    fn data_error(&self, error: &ProcessError);

    /// Generic known-error channel for every other failure kind.
    fn known_error(&self, error: &ProcessError);

    /// Cleanup notice: the simulated file handle was released.
    fn handle_released(&self);
}

/// Production reporter backed by the `tracing` message types.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn file_content(&self, file_name: &str, content: &str) {
        FileProcessingStarted { file_name }.log();
        FileContentEmitted { file_name, content }.log();
    }

    fn data_error(&self, error: &ProcessError) {
        FileDataErrorRaised { error }.log();
    }

    fn known_error(&self, error: &ProcessError) {
        KnownErrorRaised { error }.log();
    }

    fn handle_released(&self) {
        FileHandleReleased.log();
    }
}

/// One recorded notice, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    FileContent { file_name: String, content: String },
    DataError { error: ProcessError },
    KnownError { error: ProcessError },
    HandleReleased,
}

/// Reporter that records notices in order instead of logging them.
///
/// The interior `Mutex` keeps the trait's `Send + Sync` bound satisfied; no
/// contention exists in the single-threaded processing path.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    notices: Mutex<Vec<Notice>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far, in emission order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    fn push(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

impl Reporter for CapturingReporter {
    fn file_content(&self, file_name: &str, content: &str) {
        self.push(Notice::FileContent {
            file_name: file_name.to_string(),
            content: content.to_string(),
        });
    }

    fn data_error(&self, error: &ProcessError) {
        self.push(Notice::DataError {
            error: error.clone(),
        });
    }

    fn known_error(&self, error: &ProcessError) {
        self.push(Notice::KnownError {
            error: error.clone(),
        });
    }

    fn handle_released(&self) {
        self.push(Notice::HandleReleased);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capturing_reporter_preserves_emission_order() {
        let reporter = CapturingReporter::new();
        reporter.known_error(&ProcessError::MissingName);
        reporter.handle_released();

        assert_eq!(
            reporter.notices(),
            vec![
                Notice::KnownError {
                    error: ProcessError::MissingName
                },
                Notice::HandleReleased,
            ]
        );
    }

    #[test]
    fn test_capturing_reporter_starts_empty() {
        let reporter = CapturingReporter::new();
        assert!(reporter.notices().is_empty());
    }
}
