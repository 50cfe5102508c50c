// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the archivist. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - Processing lifecycle and resource events
//! * `messages::validation` - Request validation failures
//!
//! # Usage
//!
//! ```rust
//! use the_archivist::observability::messages::processor::FileProcessingStarted;
//! use the_archivist::observability::messages::StructuredLog;
//!
//! let msg = FileProcessingStarted { file_name: "myFile.txt" };
//! msg.log();
//! ```

pub mod messages;
