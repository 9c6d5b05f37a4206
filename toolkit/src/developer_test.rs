use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

// =============================================================================
// BASE64
// =============================================================================

#[test]
fn base64_encodes_utf8_text() {
    assert_eq!(base64_encode("hello"), "aGVsbG8=");
    assert_eq!(base64_decode("aGVsbG8=").unwrap(), "hello");
}

#[test]
fn base64_decode_handles_multibyte_text() {
    let encoded = base64_encode("नमस्ते");
    assert_eq!(base64_decode(&encoded).unwrap(), "नमस्ते");
}

#[test]
fn base64_decode_rejects_garbage() {
    assert!(matches!(base64_decode("not base64!"), Err(CodecError::Base64(_))));
    assert!(matches!(base64_decode("/w=="), Err(CodecError::Utf8(_))));
}

// =============================================================================
// REGEX
// =============================================================================

#[test]
fn regex_matches_anywhere() {
    assert!(regex_matches(r"\d{3}", "abc123").unwrap());
    assert!(!regex_matches(r"^\d+$", "abc123").unwrap());
}

#[test]
fn invalid_regex_is_an_error() {
    assert!(matches!(regex_matches("(unclosed", "text"), Err(CodecError::Regex(_))));
}

// =============================================================================
// JSON <> CSV
// =============================================================================

#[test]
fn json_to_csv_uses_first_object_keys_in_order() {
    let input = r#"[{"name":"Asha","age":21,"city":null},{"name":"Ravi","age":22}]"#;
    let csv = json_to_csv(input).unwrap();
    assert_eq!(csv, "name,age,city\r\n\"Asha\",21,\"\"\r\n\"Ravi\",22,");
}

#[test]
fn json_to_csv_rejects_non_arrays() {
    assert!(matches!(json_to_csv(r#"{"a":1}"#), Err(CodecError::Shape(_))));
    assert!(matches!(json_to_csv("[]"), Err(CodecError::Shape(_))));
    assert!(matches!(json_to_csv("nope"), Err(CodecError::Json(_))));
}

#[test]
fn csv_to_json_trims_cells_and_skips_blank_lines() {
    let json = csv_to_json("name, age\r\nAsha, 21\n\nRavi,22\n").unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "Asha");
    assert_eq!(parsed[0]["age"], "21");
    assert_eq!(parsed[1]["name"], "Ravi");
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn csv_to_json_requires_a_header() {
    assert!(csv_to_json("  \n").is_err());
}

#[test]
fn convert_data_folds_errors_into_message() {
    assert_eq!(convert_data(DataDirection::JsonToCsv, "{"), PARSE_FAILURE);
    assert_eq!(convert_data(DataDirection::JsonToCsv, r#"[{"a":1}]"#), "a\r\n1");
}

// =============================================================================
// QR, PASSWORDS, COLOURS
// =============================================================================

#[test]
fn qr_code_url_percent_encodes_payload() {
    assert_eq!(
        qr_code_url("a b&c").unwrap(),
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=a%20b%26c"
    );
    assert_eq!(qr_code_url(""), None);
}

#[test]
fn passwords_use_only_the_charset() {
    let mut rng = StdRng::seed_from_u64(7);
    let pass = generate_password(32, &mut rng).unwrap();
    assert_eq!(pass.len(), 32);
    assert!(pass.chars().all(|c| PASSWORD_CHARSET.contains(c)));
}

#[test]
fn password_length_is_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(generate_password(MIN_PASSWORD_LEN - 1, &mut rng).is_err());
    assert!(generate_password(MAX_PASSWORD_LEN + 1, &mut rng).is_err());
    assert!(generate_password(MAX_PASSWORD_LEN, &mut rng).is_ok());
}

#[test]
fn seeded_generators_are_deterministic() {
    let a = generate_password(16, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_password(16, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn colours_convert_between_hex_and_rgb() {
    let c = Rgb::from_hex("#38bdf8").unwrap();
    assert_eq!(c, Rgb { r: 0x38, g: 0xbd, b: 0xf8 });
    assert_eq!(c.to_hex(), "#38BDF8");
    assert_eq!(c.to_css_rgb(), "rgb(56, 189, 248)");
    assert_eq!(Rgb::from_hex("fff").unwrap().to_hex(), "#FFFFFF");
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#zzzzzz").is_err());
}
