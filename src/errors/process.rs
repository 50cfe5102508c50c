// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for file processing validation.
//!
//! This module defines the closed set of reasons a processing request can be
//! rejected. All errors implement `std::error::Error` via the `thiserror`
//! crate for consistent error handling.

use serde::Serialize;
use thiserror::Error;

/// The closed set of validation failures a processing request can produce.
///
/// Checks are applied in a fixed order (name, then payload type, then payload
/// content), so an earlier failure always preempts a later one. `EmptyPayload`
/// is the one kind routed through the dedicated data-error channel; every
/// other kind goes through the generic known-error channel.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProcessError {
    /// File name absent, empty, or whitespace-only.
    #[error("File name is missing or empty.")]
    MissingName,

    /// Payload present but not text (or absent entirely).
    #[error("File data must be a string, got {actual}.")]
    InvalidPayloadType {
        /// The JSON type name of the offending payload ("number", "boolean", ...).
        actual: String,
    },

    /// Payload is text, but empty or whitespace-only.
    #[error("File data cannot be empty.")]
    EmptyPayload,
}

impl ProcessError {
    /// Stable kind name for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessError::MissingName => "MissingName",
            ProcessError::InvalidPayloadType { .. } => "InvalidPayloadType",
            ProcessError::EmptyPayload => "EmptyPayload",
        }
    }
}
