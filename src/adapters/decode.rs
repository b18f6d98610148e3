use crate::core::DocumentDecoder;
use crate::utils::error::{Result, TimetableError};
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &str = "\u{feff}";

fn looks_like_pdf(source_name: &str, bytes: &[u8]) -> bool {
    let by_extension = Path::new(source_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    by_extension || bytes.starts_with(PDF_MAGIC)
}

/// UTF-8 text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl DocumentDecoder for PlainTextDecoder {
    fn decode(&self, source_name: &str, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| TimetableError::DecodeError {
            source_name: source_name.to_string(),
            message: format!("input is not valid UTF-8 text: {}", e),
        })?;
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
    }
}

/// Text layer of a PDF, all pages concatenated.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextDecoder;

#[cfg(feature = "pdf")]
impl DocumentDecoder for PdfTextDecoder {
    fn decode(&self, source_name: &str, bytes: &[u8]) -> Result<String> {
        let text =
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| TimetableError::DecodeError {
                source_name: source_name.to_string(),
                message: format!("PDF text extraction failed: {}", e),
            })?;
        // Page breaks come through as form feeds.
        Ok(text.replace('\x0C', "\n"))
    }
}

/// Picks the PDF or plain text decoder from the file name and content.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecoder;

impl DocumentDecoder for AutoDecoder {
    fn decode(&self, source_name: &str, bytes: &[u8]) -> Result<String> {
        if looks_like_pdf(source_name, bytes) {
            return decode_pdf(source_name, bytes);
        }
        PlainTextDecoder.decode(source_name, bytes)
    }
}

#[cfg(feature = "pdf")]
fn decode_pdf(source_name: &str, bytes: &[u8]) -> Result<String> {
    PdfTextDecoder.decode(source_name, bytes)
}

#[cfg(not(feature = "pdf"))]
fn decode_pdf(source_name: &str, _bytes: &[u8]) -> Result<String> {
    Err(TimetableError::UnsupportedFormatError {
        format: "pdf".to_string(),
        reason: format!(
            "'{}' is a PDF but this build has no PDF support (enable the `pdf` feature)",
            source_name
        ),
    })
}
