pub mod numeric;
pub mod rows;
pub mod segment;

use crate::error::BoletimError;
use crate::layouts::{self, Layout};
use crate::model::{Extraction, ExtractionSummary};

/// Run the full extraction pipeline over a document's text using the
/// builtin layout registry.
pub fn extract_document(
    text: &str,
    source_filename: Option<&str>,
) -> Result<Extraction, BoletimError> {
    extract_with_layouts(text, layouts::builtin(), source_filename)
}

/// Segment the text by solicitation, extract item rows per section, and
/// compute the document summary.
///
/// Single pass, no shared state: all accumulation is local, so a reused
/// pipeline can never leak sequence counters or seen-code sets between
/// documents, and identical input always yields identical output. The
/// only fatal condition is an empty item list; every per-row anomaly is
/// absorbed into `skipped`.
pub fn extract_with_layouts(
    text: &str,
    layouts: &[Layout],
    source_filename: Option<&str>,
) -> Result<Extraction, BoletimError> {
    let sections = segment::segment(text);

    let mut items = Vec::new();
    let mut skipped = Vec::new();
    for section in &sections {
        let outcome = rows::extract_items(&section.text, &section.solicitation_number, layouts);
        items.extend(outcome.items);
        skipped.extend(outcome.skipped);
    }

    if items.is_empty() {
        return Err(BoletimError::NoItemsFound);
    }

    let summary = ExtractionSummary::compute(&items, source_filename);
    Ok(Extraction {
        items,
        summary,
        skipped,
    })
}
