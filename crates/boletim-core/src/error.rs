#[derive(Debug, thiserror::Error)]
pub enum BoletimError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no items found in the document. Check that the bulletin matches a supported layout.")]
    NoItemsFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("corrupt stored value: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
