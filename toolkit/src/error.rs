//! Error types shared by every calculator and codec helper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Rejected calculator input.
///
/// The `field` names are the labels the UI shows next to the input, so the
/// `Display` output can be rendered inline without further mapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number (got \"{raw}\")")]
    NotANumber { field: &'static str, raw: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: f64, max: f64 },
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("{0}")]
    Invalid(String),
}

/// Failure in one of the text codecs on the developer page.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
    #[error("expected {0}")]
    Shape(&'static str),
}

/// Parse a user-entered number, trimming whitespace.
///
/// # Errors
///
/// Returns [`ToolError::Missing`] for blank input, [`ToolError::NotANumber`]
/// when the text does not parse, and [`ToolError::NotFinite`] for `inf`/`NaN`.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ToolError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ToolError::Missing { field });
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ToolError::NotANumber { field, raw: trimmed.to_owned() })?;
    finite(field, value)
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ToolError> {
    if value.is_finite() { Ok(value) } else { Err(ToolError::NotFinite { field }) }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ToolError> {
    let value = finite(field, value)?;
    if value < 0.0 { Err(ToolError::Negative { field }) } else { Ok(value) }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ToolError> {
    let value = finite(field, value)?;
    if value <= 0.0 { Err(ToolError::NotPositive { field }) } else { Ok(value) }
}

pub(crate) fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ToolError> {
    let value = finite(field, value)?;
    if value < min || value > max {
        Err(ToolError::OutOfRange { field, min, max })
    } else {
        Ok(value)
    }
}
