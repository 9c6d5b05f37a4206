//! Shareable summaries of a tool result: plain text for the clipboard and a
//! single-page PDF for download.
//!
//! DESIGN
//! ======
//! The PDF writer emits the smallest valid PDF 1.4 file: one A4 page, the
//! built-in Helvetica font, and one text content stream. Positions are given
//! in millimetres from the top-left corner and converted to PDF points from
//! the bottom-left. Text is WinAnsi encoded; characters outside that set are
//! transliterated (`₹` becomes `Rs.`) or replaced with `?`.

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::macros::format_description;

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

pub const REPORT_TITLE: &str = "WiseTools Hub Report";

// =============================================================================
// TOOL REPORT
// =============================================================================

/// One tool result, stamped with when it was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolReport {
    pub tool_name: String,
    pub result: String,
    pub generated_at: OffsetDateTime,
}

impl ToolReport {
    #[must_use]
    pub fn new(tool_name: impl Into<String>, result: impl Into<String>, generated_at: OffsetDateTime) -> Self {
        Self { tool_name: tool_name.into(), result: result.into(), generated_at }
    }

    fn generated_on(&self) -> String {
        let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        self.generated_at.format(&fmt).unwrap_or_default()
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "{REPORT_TITLE}\nTool: {}\nResult: {}\nGenerated on: {}",
            self.tool_name,
            self.result,
            self.generated_on()
        )
    }

    /// `Tool_Name_Report.pdf`, with every whitespace character replaced.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self
            .tool_name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{stem}_Report.pdf")
    }

    #[must_use]
    pub fn to_pdf(&self) -> Vec<u8> {
        let mut doc = PdfDocument::new();
        doc.text(20.0, 10.0, 20.0, REPORT_TITLE);
        doc.text(14.0, 10.0, 40.0, &format!("Tool: {}", self.tool_name));
        doc.text(14.0, 10.0, 50.0, &format!("Result: {}", self.result));
        doc.text(10.0, 10.0, 70.0, &format!("Generated on: {}", self.generated_on()));
        doc.to_bytes()
    }
}

/// Text placed on the clipboard by the share action.
#[must_use]
pub fn share_text(tool_name: &str, result: &str, url: &str) -> String {
    format!("{REPORT_TITLE}\nTool: {tool_name}\nResult: {result}\nLink: {url}")
}

/// A titled list of lines laid out 10 mm apart, used for invoices and
/// checklists.
#[must_use]
pub fn listing_pdf(title: &str, lines: &[String]) -> Vec<u8> {
    let mut doc = PdfDocument::new();
    doc.text(20.0, 10.0, 20.0, title);
    let mut y = 40.0;
    for line in lines {
        doc.text(12.0, 10.0, y, line);
        y += 10.0;
    }
    doc.to_bytes()
}

// =============================================================================
// PDF WRITER
// =============================================================================

const PAGE_WIDTH_PT: f64 = 595.28;
const PAGE_HEIGHT_PT: f64 = 841.89;
const PT_PER_MM: f64 = 72.0 / 25.4;

#[derive(Clone, Debug, PartialEq)]
struct TextRun {
    size: f64,
    x_mm: f64,
    y_mm: f64,
    text: String,
}

/// Single-page document made of positioned text runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfDocument {
    runs: Vec<TextRun>,
}

impl PdfDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` with its baseline `y_mm` below the top edge.
    pub fn text(&mut self, size: f64, x_mm: f64, y_mm: f64, text: &str) -> &mut Self {
        self.runs.push(TextRun { size, x_mm, y_mm, text: text.to_owned() });
        self
    }

    fn content_stream(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for run in &self.runs {
            let x = run.x_mm * PT_PER_MM;
            let y = PAGE_HEIGHT_PT - run.y_mm * PT_PER_MM;
            out.extend_from_slice(format!("BT /F1 {:.1} Tf {x:.2} {y:.2} Td (", run.size).as_bytes());
            out.extend_from_slice(&encode_pdf_string(&run.text));
            out.extend_from_slice(b") Tj ET\n");
        }
        out
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let content = self.content_stream();
        let mut objects: Vec<Vec<u8>> = vec![
            b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
            b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH_PT} {PAGE_HEIGHT_PT}] \
                 /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            )
            .into_bytes(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_vec(),
        ];
        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend_from_slice(&content);
        stream.extend_from_slice(b"endstream");
        objects.push(stream);

        let mut out = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_at = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        );
        out.extend_from_slice(xref.as_bytes());
        out
    }
}

/// Escape and WinAnsi-encode text for a PDF literal string.
fn encode_pdf_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' | '\r' | '\t' | '\u{a0}' => out.push(b' '),
            '₹' => out.extend_from_slice(b"Rs."),
            '€' => out.push(0x80),
            c => match u8::try_from(c) {
                Ok(byte) if byte.is_ascii() || byte >= 0xA0 => out.push(byte),
                _ => out.push(b'?'),
            },
        }
    }
    out
}
