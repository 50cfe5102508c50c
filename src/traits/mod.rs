// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod processor;
pub mod reporter;

pub use processor::Processor;
pub use reporter::{CapturingReporter, Notice, Reporter, TracingReporter};
