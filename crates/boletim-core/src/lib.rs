pub mod error;
pub mod extraction;
pub mod layouts;
pub mod model;
pub mod parsing;
pub mod store;

use error::BoletimError;
use extraction::PdfExtractor;
use model::Extraction;

/// MIME type accepted at the upload boundary.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Main API entry point: extract line items from a bulletin PDF.
///
/// Acquires the text through the given backend and runs the full
/// pipeline. The result is a pending, unsaved batch; persist it with
/// [`store::save_batch`] once the user confirms a week label.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    source_filename: Option<&str>,
) -> Result<Extraction, BoletimError> {
    if pdf_bytes.is_empty() {
        return Err(BoletimError::Validation("no file content received".into()));
    }

    let text = extractor.extract_text(pdf_bytes)?;
    parsing::extract_document(&text, source_filename)
}

/// Extract from already-acquired text, bypassing the PDF backend.
pub fn extract_text(text: &str, source_filename: Option<&str>) -> Result<Extraction, BoletimError> {
    parsing::extract_document(text, source_filename)
}

/// Upload-boundary validation shared by every surface that accepts a
/// file: only PDF payloads, and never empty ones.
pub fn validate_upload(content_type: &str, pdf_bytes: &[u8]) -> Result<(), BoletimError> {
    if content_type != PDF_CONTENT_TYPE {
        return Err(BoletimError::Validation(format!(
            "only PDF files are supported, got '{content_type}'"
        )));
    }
    if pdf_bytes.is_empty() {
        return Err(BoletimError::Validation("no file content received".into()));
    }
    Ok(())
}
