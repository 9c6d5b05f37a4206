use super::*;

#[test]
fn count_accepts_whole_numbers_only() {
    assert_eq!(count("People", "4"), Ok(4));
    assert_eq!(count("People", " 0 "), Ok(0));
    assert_eq!(count("People", "-1"), Err(ToolError::Negative { field: "People" }));
    assert!(count("People", "2.5").is_err());
    assert_eq!(count("People", ""), Err(ToolError::Missing { field: "People" }));
}

#[test]
fn shown_and_error_text_split_an_outcome() {
    let ok: Result<f64, ToolError> = Ok(2.0);
    let err: Result<f64, ToolError> = Err(ToolError::Missing { field: "Amount" });
    assert_eq!(shown(&ok, |v| format!("{v:.1}")), "2.0");
    assert_eq!(shown(&err, |v| format!("{v:.1}")), "");
    assert_eq!(error_text(&ok), None);
    assert_eq!(error_text(&err).as_deref(), Some("Amount is required"));
}

#[test]
fn number_reads_signal_text() {
    let owner = Owner::new();
    owner.with(|| {
        let value = RwSignal::new("12.5".to_owned());
        assert_eq!(number("Amount", value), Ok(12.5));
        value.set("abc".to_owned());
        assert!(number("Amount", value).is_err());
    });
}
