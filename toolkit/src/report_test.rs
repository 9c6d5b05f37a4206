use time::macros::datetime;

use super::*;

fn sample() -> ToolReport {
    ToolReport::new("SIP Calculator", "₹11,61,695.4", datetime!(2025-03-01 09:05:07 UTC))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn text_report_lists_tool_result_and_time() {
    assert_eq!(
        sample().to_text(),
        "WiseTools Hub Report\nTool: SIP Calculator\nResult: ₹11,61,695.4\nGenerated on: 2025-03-01 09:05:07"
    );
}

#[test]
fn file_name_replaces_whitespace() {
    assert_eq!(sample().file_name(), "SIP_Calculator_Report.pdf");
    let r = ToolReport::new("Day Wise  Savings", "1", datetime!(2025-03-01 0:00 UTC));
    assert_eq!(r.file_name(), "Day_Wise__Savings_Report.pdf");
}

#[test]
fn share_text_carries_link() {
    assert_eq!(
        share_text("BMI Calculator", "22.5", "https://example.test/daily"),
        "WiseTools Hub Report\nTool: BMI Calculator\nResult: 22.5\nLink: https://example.test/daily"
    );
}

#[test]
fn pdf_has_header_trailer_and_text() {
    let pdf = sample().to_pdf();
    assert!(pdf.starts_with(b"%PDF-1.4\n"));
    assert!(pdf.ends_with(b"%%EOF\n"));
    assert!(contains(&pdf, b"/BaseFont /Helvetica"));
    assert!(contains(&pdf, b"(Tool: SIP Calculator) Tj"));
    assert!(contains(&pdf, b"(Result: Rs.11,61,695.4) Tj"));
}

#[test]
fn pdf_xref_offsets_point_at_objects() {
    let pdf = listing_pdf("INVOICE", &["Client: Acme".to_owned(), "Total: $10".to_owned()]);
    let text = String::from_utf8_lossy(&pdf);
    let startxref: usize = text
        .rsplit("startxref\n")
        .next()
        .and_then(|tail| tail.lines().next())
        .and_then(|n| n.parse().ok())
        .unwrap();
    assert!(pdf[startxref..].starts_with(b"xref\n0 6\n"));

    let xref = String::from_utf8_lossy(&pdf[startxref..]).into_owned();
    let offsets: Vec<usize> = xref
        .lines()
        .skip(3)
        .take(5)
        .map(|l| l[..10].parse().unwrap())
        .collect();
    for (i, offset) in offsets.iter().enumerate() {
        let header = format!("{} 0 obj", i + 1);
        assert!(pdf[*offset..].starts_with(header.as_bytes()), "object {} misplaced", i + 1);
    }
}

#[test]
fn pdf_strings_escape_delimiters() {
    assert_eq!(encode_pdf_string("a(b)c\\"), b"a\\(b\\)c\\\\".to_vec());
    assert_eq!(encode_pdf_string("1.234,50\u{a0}€"), b"1.234,50 \x80".to_vec());
    assert_eq!(encode_pdf_string("नमस्ते"), b"??????".to_vec());
}
