// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processing lifecycle and resource events.
//!
//! This module contains message types for logging events related to:
//! * Processing start and emitted file content
//! * Simulated file handle release

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processing of a named file started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_archivist::observability::messages::processor::FileProcessingStarted;
///
/// let msg = FileProcessingStarted {
///     file_name: "myFile.txt",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FileProcessingStarted<'a> {
    pub file_name: &'a str,
}

impl Display for FileProcessingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing file: {}", self.file_name)
    }
}

impl StructuredLog for FileProcessingStarted<'_> {
    fn log(&self) {
        tracing::info!(
            file_name = self.file_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "file_processing",
            name = name,
            file_name = self.file_name,
        )
    }
}

/// File content accepted for processing.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_archivist::observability::messages::processor::FileContentEmitted;
///
/// let msg = FileContentEmitted {
///     file_name: "myFile.txt",
///     content: "Hello, world!",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct FileContentEmitted<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
}

impl Display for FileContentEmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "File content: {}", self.content)
    }
}

impl StructuredLog for FileContentEmitted<'_> {
    fn log(&self) {
        tracing::info!(
            file_name = self.file_name,
            content_bytes = self.content.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "file_content",
            name = name,
            file_name = self.file_name,
            content_bytes = self.content.len(),
        )
    }
}

/// Simulated file handle released.
///
/// Emitted exactly once per invocation, after the outcome notice, whether
/// processing succeeded or failed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_archivist::observability::messages::processor::FileHandleReleased;
///
/// let msg = FileHandleReleased;
///
/// tracing::info!("{}", msg);
/// ```
pub struct FileHandleReleased;

impl Display for FileHandleReleased {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Closing file handle...")
    }
}

impl StructuredLog for FileHandleReleased {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "file_handle_release",
            name = name,
        )
    }
}
