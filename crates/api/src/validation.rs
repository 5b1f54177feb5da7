//! Request body validation helpers built on `validator`.

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Reject strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Validate `input`, turning the first failure into a 400 with its message.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), AppError> {
    input.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("Invalid value for '{field}'")))
                })
            })
            .next()
            .map(Cow::into_owned)
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::BadRequest(message)
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank", message = "Name is required"))]
        name: String,
    }

    #[test]
    fn blank_value_yields_custom_message() {
        let err = validate_request(&Sample { name: "   ".into() }).unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "Name is required");
    }

    #[test]
    fn present_value_passes() {
        assert!(validate_request(&Sample { name: "Claudia".into() }).is_ok());
    }
}
