// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for request validation failures.
//!
//! This module contains message types for logging events related to:
//! * Known validation failures (missing name, wrong payload type)
//! * File data errors (the one specially-routed failure kind)

use crate::errors::ProcessError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A known validation failure rejected the request.
///
/// Carries any [`ProcessError`] kind that is not routed through the dedicated
/// data-error channel.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_archivist::errors::ProcessError;
/// use the_archivist::observability::messages::validation::KnownErrorRaised;
///
/// let error = ProcessError::MissingName;
/// let msg = KnownErrorRaised { error: &error };
///
/// tracing::error!("{}", msg);
/// ```
pub struct KnownErrorRaised<'a> {
    pub error: &'a ProcessError,
}

impl Display for KnownErrorRaised<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.error.kind(), self.error)
    }
}

impl StructuredLog for KnownErrorRaised<'_> {
    fn log(&self) {
        tracing::error!(
            kind = self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failure",
            name = name,
            kind = self.error.kind(),
        )
    }
}

/// File data failed validation.
///
/// The one failure kind with its own reporting channel, kept visually
/// distinct from the generic known-error notice.
///
/// # Log Level
/// `warn!` - Business-rule rejection, not an operational fault
///
/// # Example
/// ```
/// use the_archivist::errors::ProcessError;
/// use the_archivist::observability::messages::validation::FileDataErrorRaised;
///
/// let error = ProcessError::EmptyPayload;
/// let msg = FileDataErrorRaised { error: &error };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FileDataErrorRaised<'a> {
    pub error: &'a ProcessError,
}

impl Display for FileDataErrorRaised<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "File data error happened: {}", self.error)
    }
}

impl StructuredLog for FileDataErrorRaised<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = self.error.kind(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "file_data_error",
            name = name,
            kind = self.error.kind(),
        )
    }
}
