//! Developer utilities: Base64, regex testing, JSON/CSV conversion, QR links,
//! password generation, and colour codes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use serde_json::{Map, Value};

use crate::error::{CodecError, ToolError};

#[cfg(test)]
#[path = "developer_test.rs"]
mod developer_test;

/// Message shown in place of Base64 output when decoding fails.
pub const INVALID_INPUT: &str = "Invalid Input";

/// Message shown in place of converter output when parsing fails.
pub const PARSE_FAILURE: &str = "Error parsing input. Please ensure valid format.";

// =============================================================================
// BASE64
// =============================================================================

#[must_use]
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard Base64 into UTF-8 text.
///
/// # Errors
///
/// Returns [`CodecError`] for malformed Base64 or non-UTF-8 payloads.
pub fn base64_decode(input: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

// =============================================================================
// REGEX
// =============================================================================

/// Whether `pattern` matches anywhere in `text`.
///
/// # Errors
///
/// Returns [`CodecError::Regex`] when the pattern does not compile.
pub fn regex_matches(pattern: &str, text: &str) -> Result<bool, CodecError> {
    let re = regex::Regex::new(pattern)?;
    Ok(re.is_match(text))
}

// =============================================================================
// JSON <> CSV
// =============================================================================

/// Convert a JSON array of objects into CSV.
///
/// Columns come from the first object's keys in document order. Cells are
/// JSON-encoded (strings keep their quotes), `null` becomes `""`, and keys
/// missing from later rows become empty cells. Rows are CRLF-separated.
///
/// # Errors
///
/// Returns [`CodecError`] when the input is not JSON or not a non-empty
/// array of objects.
pub fn json_to_csv(input: &str) -> Result<String, CodecError> {
    let value: Value = serde_json::from_str(input)?;
    let rows = value.as_array().ok_or(CodecError::Shape("a JSON array"))?;
    let first = rows
        .first()
        .and_then(Value::as_object)
        .ok_or(CodecError::Shape("an array whose first element is an object"))?;
    let header: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.iter().map(|h| h.as_str()).collect::<Vec<_>>().join(","));
    for row in rows {
        let obj = row.as_object().ok_or(CodecError::Shape("every element to be an object"))?;
        let cells: Vec<String> = header
            .iter()
            .map(|key| match obj.get(key.as_str()) {
                None => String::new(),
                Some(Value::Null) => "\"\"".to_owned(),
                Some(v) => v.to_string(),
            })
            .collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\r\n"))
}

/// Convert header-first CSV into a pretty-printed JSON array of objects.
///
/// Values are kept as trimmed strings. Blank lines are skipped and short
/// rows simply omit the trailing keys.
///
/// # Errors
///
/// Returns [`CodecError::Shape`] when there is no header row.
pub fn csv_to_json(input: &str) -> Result<String, CodecError> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let header_line = lines.next().ok_or(CodecError::Shape("a header row"))?;
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let rows: Vec<Value> = lines
        .map(|line| {
            let mut obj = Map::new();
            for (header, cell) in headers.iter().zip(line.split(',')) {
                obj.insert((*header).to_owned(), Value::String(cell.trim().to_owned()));
            }
            Value::Object(obj)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Which way the JSON/CSV converter runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataDirection {
    #[default]
    JsonToCsv,
    CsvToJson,
}

/// Run the converter and fold any failure into the inline error message.
#[must_use]
pub fn convert_data(direction: DataDirection, input: &str) -> String {
    let out = match direction {
        DataDirection::JsonToCsv => json_to_csv(input),
        DataDirection::CsvToJson => csv_to_json(input),
    };
    out.unwrap_or_else(|_| PARSE_FAILURE.to_owned())
}

// =============================================================================
// QR CODES
// =============================================================================

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Image URL for a 200x200 QR code encoding `text`; `None` for blank input.
#[must_use]
pub fn qr_code_url(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(format!("{QR_ENDPOINT}?size=200x200&data={}", urlencoding::encode(text)))
}

// =============================================================================
// PASSWORDS
// =============================================================================

pub const PASSWORD_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 64;

/// Draw `length` characters uniformly from [`PASSWORD_CHARSET`].
///
/// # Errors
///
/// Returns [`ToolError::OutOfRange`] outside
/// `MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN`.
#[allow(clippy::cast_precision_loss)]
pub fn generate_password<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String, ToolError> {
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&length) {
        return Err(ToolError::OutOfRange {
            field: "Length",
            min: MIN_PASSWORD_LEN as f64,
            max: MAX_PASSWORD_LEN as f64,
        });
    }
    let charset = PASSWORD_CHARSET.as_bytes();
    Ok((0..length)
        .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
        .collect())
}

// =============================================================================
// COLOURS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Invalid`] for anything else.
    pub fn from_hex(raw: &str) -> Result<Self, ToolError> {
        let hex = raw.trim().trim_start_matches('#');
        let invalid = || ToolError::Invalid(format!("not a hex colour: {raw}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_owned(),
            _ => return Err(invalid()),
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// Upper-case `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(56, 189, 248)`.
    #[must_use]
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
