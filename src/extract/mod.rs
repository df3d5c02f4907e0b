//! Text extraction from document bytes.
//!
//! Dispatches on the filename extension:
//! - `.pdf` — pdftotext (Poppler) layout-aware extraction
//! - `.docx` — paragraph text from the OOXML archive (feature `docx`)
//! - `.png/.jpg/.jpeg/.tif/.tiff/.bmp` — Tesseract OCR
//! - `.txt`, no filename, or anything else — plain-text decode
//!
//! The typed paths fail hard when their capability is missing; only the
//! plain-text path is guaranteed non-failing (UTF-8 with a silent Latin-1
//! degradation for invalid input).

mod image;
mod pdf;

#[cfg(feature = "docx")]
mod docx;

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required engine (external binary or compiled-out feature) is not
    /// available. Not retried; the caller decides what to do.
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract plain text from raw document bytes, dispatching on the filename
/// extension (case-insensitive). Absent or unrecognized extensions route to
/// the plain-text decode path, which never fails.
pub fn extract(data: &[u8], filename: Option<&str>) -> Result<String, ExtractError> {
    let extension = filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => pdf::extract_pdf(data),
        "docx" => extract_docx(data),
        "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" => {
            image::extract_image(data, &extension)
        }
        _ => Ok(decode_text(data)),
    }
}

#[cfg(feature = "docx")]
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    docx::extract_docx(data)
}

#[cfg(not(feature = "docx"))]
fn extract_docx(_data: &[u8]) -> Result<String, ExtractError> {
    Err(ExtractError::MissingCapability(
        "DOCX support not compiled in (enable the docx feature)".to_string(),
    ))
}

/// Decode bytes as UTF-8, degrading to Latin-1 on invalid input. Total:
/// every byte sequence produces a string.
pub fn decode_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(s) => s.to_string(),
        // Latin-1: each byte maps directly to the code point of equal value.
        Err(_) => data.iter().map(|&b| b as char).collect(),
    }
}

/// Check if a binary is available in PATH.
pub(crate) fn check_binary(name: &str) -> bool {
    std::process::Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Report availability of the external extraction tools.
pub fn check_tools() -> Vec<(String, bool)> {
    ["pdftotext", "tesseract"]
        .iter()
        .map(|tool| (tool.to_string(), check_binary(tool)))
        .collect()
}

/// Handle command output, extracting stdout on success or returning the
/// appropriate error. A missing binary surfaces as MissingCapability.
pub(crate) fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_hint: &str,
    error_prefix: &str,
) -> Result<String, ExtractError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractError::MissingCapability(tool_hint.to_string()))
        }
        Err(e) => Err(ExtractError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_utf8() {
        let text = extract("hello world".as_bytes(), Some("notes.txt")).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_plain_text_invalid_utf8_never_fails() {
        // 0xE9 is 'é' in Latin-1 but invalid as a lone UTF-8 byte.
        let data = [b'c', b'a', b'f', 0xE9];
        let text = extract(&data, Some("notes.txt")).unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn test_no_filename_routes_to_text_decode() {
        let text = extract(b"raw bytes", None).unwrap();
        assert_eq!(text, "raw bytes");
    }

    #[test]
    fn test_unknown_extension_routes_to_text_decode() {
        let text = extract(b"some log line", Some("server.log")).unwrap();
        assert_eq!(text, "some log line");
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        // A .PDF upload must hit the PDF path, which fails on garbage input
        // rather than silently decoding it as text.
        let result = extract(b"not a pdf", Some("scan.PDF"));
        assert!(result.is_err());
    }

    #[test]
    fn test_check_tools_reports_both() {
        let tools = check_tools();
        assert_eq!(tools.len(), 2);
    }
}
