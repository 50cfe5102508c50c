// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request validation for processing attempts.
//!
//! Validation runs as a fixed three-check pipeline, short-circuiting on the
//! first failure:
//!
//! 1. **Name check**: the file name must be present and not whitespace-only
//! 2. **Type check**: the payload must be text (any non-string JSON value,
//!    including an absent payload, fails here)
//! 3. **Content check**: the text must not be empty or whitespace-only
//!
//! The ordering is part of the contract: a whitespace-only name paired with an
//! empty payload reports `MissingName`, never `EmptyPayload`.
//!
//! The type check is uniform over every non-text payload. Numbers, booleans,
//! arrays, objects, and null are all classified as `InvalidPayloadType`; only
//! the `actual` field distinguishes them.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use the_archivist::errors::ProcessError;
//! use the_archivist::processor::validate;
//!
//! let payload = json!("Hello, world!");
//! let valid = validate(Some("myFile.txt"), Some(&payload)).unwrap();
//! assert_eq!(valid.content, "Hello, world!");
//!
//! let payload = json!(42);
//! let err = validate(Some("myFile.txt"), Some(&payload)).unwrap_err();
//! assert_eq!(err.kind(), "InvalidPayloadType");
//! ```

use serde_json::Value;

use crate::errors::ProcessError;

/// A request that passed every validation check, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRequest<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
}

/// Validates one processing attempt.
///
/// Pure: no side effects, no reporting. The caller decides how to act on the
/// result.
///
/// # Returns
///
/// * `Ok(ValidRequest)` - both inputs are usable text
/// * `Err(ProcessError)` - the first failing check, in pipeline order
pub fn validate<'a>(
    file_name: Option<&'a str>,
    payload: Option<&'a Value>,
) -> Result<ValidRequest<'a>, ProcessError> {
    let file_name = match file_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ProcessError::MissingName),
    };

    let content = match payload {
        Some(Value::String(text)) => text.as_str(),
        other => {
            return Err(ProcessError::InvalidPayloadType {
                actual: payload_type_name(other).to_string(),
            })
        }
    };

    if content.trim().is_empty() {
        return Err(ProcessError::EmptyPayload);
    }

    Ok(ValidRequest { file_name, content })
}

/// JSON type name of a possibly-absent payload, for error context.
fn payload_type_name(payload: Option<&Value>) -> &'static str {
    match payload {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_request_passes() {
        let payload = json!("Hello, world!");
        let valid = validate(Some("myFile.txt"), Some(&payload)).unwrap();

        assert_eq!(valid.file_name, "myFile.txt");
        assert_eq!(valid.content, "Hello, world!");
    }

    #[test]
    fn test_absent_name_fails_first() {
        let payload = json!("content");
        assert_eq!(
            validate(None, Some(&payload)),
            Err(ProcessError::MissingName)
        );
    }

    #[test]
    fn test_empty_name_is_missing() {
        let payload = json!("content");
        assert_eq!(
            validate(Some(""), Some(&payload)),
            Err(ProcessError::MissingName)
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let payload = json!("content");
        assert_eq!(
            validate(Some("   \t"), Some(&payload)),
            Err(ProcessError::MissingName)
        );
    }

    #[test]
    fn test_name_check_preempts_payload_checks() {
        // Whitespace-only name plus empty payload reports the name failure.
        let payload = json!("");
        assert_eq!(
            validate(Some(" "), Some(&payload)),
            Err(ProcessError::MissingName)
        );
        assert_eq!(validate(Some(" "), None), Err(ProcessError::MissingName));
    }

    #[test]
    fn test_absent_payload_is_wrong_type() {
        assert_eq!(
            validate(Some("myFile.txt"), None),
            Err(ProcessError::InvalidPayloadType {
                actual: "absent".to_string()
            })
        );
    }

    #[test]
    fn test_number_payload_is_wrong_type() {
        let payload = json!(42);
        assert_eq!(
            validate(Some("myFile.txt"), Some(&payload)),
            Err(ProcessError::InvalidPayloadType {
                actual: "number".to_string()
            })
        );
    }

    #[test]
    fn test_all_non_text_payloads_classified_uniformly() {
        let payloads = vec![
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!([1, 2, 3]), "array"),
            (json!({"a": 1}), "object"),
        ];

        for (payload, expected_type) in payloads {
            assert_eq!(
                validate(Some("myFile.txt"), Some(&payload)),
                Err(ProcessError::InvalidPayloadType {
                    actual: expected_type.to_string()
                })
            );
        }
    }

    #[test]
    fn test_empty_text_payload_is_empty_payload() {
        let payload = json!("");
        assert_eq!(
            validate(Some("myFile.txt"), Some(&payload)),
            Err(ProcessError::EmptyPayload)
        );
    }

    #[test]
    fn test_whitespace_text_payload_is_empty_payload() {
        let payload = json!("  \n ");
        assert_eq!(
            validate(Some("myFile.txt"), Some(&payload)),
            Err(ProcessError::EmptyPayload)
        );
    }

    #[test]
    fn test_type_check_preempts_content_check() {
        // A non-text payload never reaches the emptiness check.
        let payload = json!([]);
        assert_eq!(
            validate(Some("myFile.txt"), Some(&payload)),
            Err(ProcessError::InvalidPayloadType {
                actual: "array".to_string()
            })
        );
    }
}
