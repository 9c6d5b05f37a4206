use super::*;

#[test]
fn parse_number_trims_and_parses() {
    assert_eq!(parse_number("Amount", " 42.5 "), Ok(42.5));
}

#[test]
fn parse_number_rejects_blank() {
    assert_eq!(parse_number("Amount", "   "), Err(ToolError::Missing { field: "Amount" }));
}

#[test]
fn parse_number_rejects_garbage() {
    assert_eq!(
        parse_number("Rate", "12%"),
        Err(ToolError::NotANumber { field: "Rate", raw: "12%".to_owned() })
    );
}

#[test]
fn parse_number_rejects_non_finite() {
    assert_eq!(parse_number("Rate", "inf"), Err(ToolError::NotFinite { field: "Rate" }));
    assert_eq!(parse_number("Rate", "NaN"), Err(ToolError::NotFinite { field: "Rate" }));
}

#[test]
fn validators_report_field_names() {
    assert_eq!(non_negative("Years", -1.0), Err(ToolError::Negative { field: "Years" }));
    assert_eq!(positive("People", 0.0), Err(ToolError::NotPositive { field: "People" }));
    assert_eq!(
        in_range("Progress", 120.0, 0.0, 100.0),
        Err(ToolError::OutOfRange { field: "Progress", min: 0.0, max: 100.0 })
    );
    assert_eq!(in_range("Progress", 40.0, 0.0, 100.0), Ok(40.0));
}

#[test]
fn tool_error_display_is_user_facing() {
    let err = ToolError::NotPositive { field: "Height (cm)" };
    assert_eq!(err.to_string(), "Height (cm) must be greater than zero");
}
