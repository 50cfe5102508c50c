// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::errors::ProcessError;
use crate::processor::{validate, Outcome, ProcessRequest};
use crate::traits::{Processor, Reporter, TracingReporter};

/// The validating file processor.
///
/// Runs the validation pipeline over a request, emits the outcome notice
/// through its [`Reporter`], and releases the simulated file handle on every
/// path. All failures are handled locally; `process` never returns an error.
pub struct FileProcessor {
    reporter: Arc<dyn Reporter>,
}

impl FileProcessor {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// Processor wired to the production tracing sink.
    pub fn with_tracing() -> Self {
        Self::new(Arc::new(TracingReporter::new()))
    }
}

/// Simulated file handle.
///
/// Held for the duration of one processing attempt; dropping it emits the
/// handle-released notice. Scoping the guard to `process` guarantees the
/// notice fires exactly once per invocation, after the outcome notice, on
/// every return path.
struct FileHandle<'a> {
    reporter: &'a dyn Reporter,
}

impl Drop for FileHandle<'_> {
    fn drop(&mut self) {
        self.reporter.handle_released();
    }
}

impl Processor for FileProcessor {
    fn process(&self, req: &ProcessRequest) -> Outcome {
        let _handle = FileHandle {
            reporter: self.reporter.as_ref(),
        };

        match validate(req.file_name.as_deref(), req.payload.as_ref()) {
            Ok(valid) => {
                self.reporter.file_content(valid.file_name, valid.content);
                Outcome::processed(valid.file_name, valid.content.len())
            }
            Err(error) => {
                // EmptyPayload is the one specially-routed kind; every other
                // kind, present or future, takes the generic channel.
                match &error {
                    ProcessError::EmptyPayload => self.reporter.data_error(&error),
                    _ => self.reporter.known_error(&error),
                }
                Outcome::rejected(error)
            }
        }
    }

    fn name(&self) -> &'static str {
        "file_processor"
    }
}
