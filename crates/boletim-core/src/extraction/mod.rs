pub mod pdftotext;

use crate::error::BoletimError;

/// Trait for PDF text extraction backends.
///
/// The core never decodes PDF binary itself; it consumes the plain text
/// a backend recovers from the document.
pub trait PdfExtractor: Send + Sync {
    /// Extract the plain text content of a PDF document.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, BoletimError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
