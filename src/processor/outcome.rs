// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::errors::ProcessError;

/// The result of one processing attempt.
///
/// The original design only logged this; it is returned as well so callers
/// and tests can branch on it without scraping the output stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outcome {
    #[serde(rename_all = "camelCase")]
    Processed {
        file_name: String,
        /// Byte length of the accepted content.
        byte_count: usize,
    },
    Rejected {
        error: ProcessError,
    },
}

impl Outcome {
    pub fn processed(file_name: &str, byte_count: usize) -> Self {
        Self::Processed {
            file_name: file_name.to_string(),
            byte_count,
        }
    }

    pub fn rejected(error: ProcessError) -> Self {
        Self::Rejected { error }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed { .. })
    }

    /// The validation failure, if this attempt was rejected.
    pub fn error(&self) -> Option<&ProcessError> {
        match self {
            Outcome::Processed { .. } => None,
            Outcome::Rejected { error } => Some(error),
        }
    }
}
