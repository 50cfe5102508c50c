// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One processing attempt: an optional file name and an optional payload of
/// any JSON type.
///
/// No invariants hold on construction; validity is decided entirely inside
/// [`crate::processor::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub file_name: Option<String>,
    pub payload: Option<Value>,
}

impl ProcessRequest {
    pub fn new(file_name: Option<String>, payload: Option<Value>) -> Self {
        Self { file_name, payload }
    }

    /// Request with both inputs absent.
    pub fn empty() -> Self {
        Self::default()
    }
}
