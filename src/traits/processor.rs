// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::processor::{Outcome, ProcessRequest};

pub trait Processor: Send + Sync {
    /// Run one processing attempt to completion.
    ///
    /// Never panics and never returns an error to the caller: every failure
    /// is classified, reported through the sink, and folded into the
    /// [`Outcome`]. The handle-release notice is emitted on every path,
    /// always last.
    fn process(&self, req: &ProcessRequest) -> Outcome;

    fn name(&self) -> &'static str;
}
