//! Image text extraction using Tesseract OCR.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

use super::{handle_cmd_output, ExtractError};

/// Run Tesseract OCR over raster image bytes. The original extension is
/// kept on the staged file so diagnostics stay readable; Tesseract itself
/// detects the format from the content.
pub fn extract_image(data: &[u8], extension: &str) -> Result<String, ExtractError> {
    let mut staged = NamedTempFile::with_suffix(format!(".{}", extension))?;
    staged.write_all(data)?;
    staged.flush()?;

    let output = Command::new("tesseract")
        .arg(staged.path())
        .arg("stdout")
        .args(["-l", "eng"])
        .output();

    handle_cmd_output(
        output,
        "tesseract not found (install tesseract-ocr)",
        "tesseract failed",
    )
}
