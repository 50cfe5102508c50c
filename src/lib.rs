// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod errors;     // error handling
pub mod observability;
pub mod processor;  // the validating file processor
pub mod traits;     // unified abstractions
