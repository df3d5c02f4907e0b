//! PDF text extraction using pdftotext (Poppler).

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

use super::{handle_cmd_output, ExtractError};

/// Extract text from PDF bytes with pdftotext in layout mode. The bytes are
/// staged to a temp file because pdftotext seeks within its input.
pub fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    let mut staged = NamedTempFile::with_suffix(".pdf")?;
    staged.write_all(data)?;
    staged.flush()?;

    let output = Command::new("pdftotext")
        .args(["-layout", "-enc", "UTF-8"])
        .arg(staged.path())
        .arg("-") // Output to stdout
        .output();

    handle_cmd_output(
        output,
        "pdftotext not found (install poppler-utils)",
        "pdftotext failed",
    )
}
