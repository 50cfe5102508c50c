// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait to provide consistent,
//! human-readable output, and [`StructuredLog`] to emit the same event as a
//! structured `tracing` record with typed fields.
//!
//! # Organization
//!
//! * `processor` - Processing lifecycle and resource events
//! * `validation` - Request validation failures

use tracing::Span;

pub mod processor;
pub mod validation;

/// A log message that knows how to emit itself as a structured tracing event.
///
/// Implementors pair a human-readable `Display` rendering with a `log()`
/// method that attaches typed fields, so callers never hand-assemble field
/// lists at the call site.
pub trait StructuredLog {
    /// Emit this message as a structured tracing event at its intrinsic level.
    fn log(&self);

    /// Create a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
