// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod file_processor;
mod outcome;
mod request;
mod validation;


pub use file_processor::FileProcessor;
pub use outcome::Outcome;
pub use request::ProcessRequest;
pub use validation::{validate, ValidRequest};
