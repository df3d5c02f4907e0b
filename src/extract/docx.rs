//! DOCX paragraph extraction.
//!
//! A DOCX file is a zip archive; the body lives in `word/document.xml` as
//! WordprocessingML. Paragraphs (`<w:p>`) are emitted in document order,
//! joined by newlines, with each paragraph's text runs (`<w:t>`)
//! concatenated.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;

use super::ExtractError;

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>|<w:p/>").unwrap());

static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:t(?: [^>]*)?>(.*?)</w:t>").unwrap());

/// Extract paragraph text from DOCX bytes, joined by newlines in document
/// order.
pub fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::ExtractionFailed(format!("not a DOCX archive: {}", e)))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::ExtractionFailed(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable document.xml: {}", e)))?;

    let paragraphs: Vec<String> = PARAGRAPH
        .find_iter(&document_xml)
        .map(|p| {
            TEXT_RUN
                .captures_iter(p.as_str())
                .map(|c| unescape_xml(&c[1]))
                .collect::<Vec<_>>()
                .concat()
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Resolve the five predefined XML entities.
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
            <w:p><w:r><w:t xml:space="preserve">Second </w:t></w:r><w:r><w:t>paragraph.</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_docx(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = r#"<w:p><w:r><w:t>a &amp; b &lt; c</w:t></w:r></w:p>"#;
        let text = extract_docx(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "a & b < c");
    }

    #[test]
    fn test_garbage_bytes_fail_explicitly() {
        let result = extract_docx(b"definitely not a zip archive");
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[test]
    fn test_empty_paragraph_keeps_blank_line() {
        let xml = r#"<w:p><w:r><w:t>above</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>below</w:t></w:r></w:p>"#;
        let text = extract_docx(&docx_bytes(xml)).unwrap();
        assert_eq!(text, "above\n\nbelow");
    }
}
