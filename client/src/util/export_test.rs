use super::*;

#[test]
fn mime_types_follow_extension() {
    assert_eq!(mime_for("EMI_Calculator_Report.pdf"), "application/pdf");
    assert_eq!(mime_for("expenses_INR.CSV"), "text/csv;charset=utf-8");
    assert_eq!(mime_for("notes"), "text/plain;charset=utf-8");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn downloads_are_unavailable_off_browser() {
    assert!(matches!(download("a.pdf", b"%PDF"), Err(ExportError::Unavailable)));
    assert_eq!(current_url(), "");
}

#[test]
fn share_notices_name_the_channel() {
    assert_eq!(ShareOutcome::Native.notice(), "Shared!");
    assert_eq!(ShareOutcome::Copied.notice(), "Copied to clipboard!");
}
