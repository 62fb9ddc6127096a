use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One billed line item belonging to a solicitation.
///
/// Immutable once produced by the pipeline: `total_value` has already
/// been reconciled against `quantity * unit_value` by that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Solicitation number, digits only (thousands dots stripped).
    pub solicitation_number: String,
    /// Position within the solicitation, starting at 1.
    pub sequence: u32,
    /// Fixed-format numeric product code (7-12 digits depending on layout).
    pub product_code: String,
    pub quantity: Decimal,
    pub unit_value: Decimal,
    pub total_value: Decimal,
}

/// A candidate row that was dropped during extraction, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub solicitation_number: String,
    pub line: String,
    pub reason: String,
}

/// Summary figures derived from an item list. Never stored on its own;
/// always recomputed from the items it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_item_count: usize,
    pub total_value: Decimal,
    pub distinct_solicitation_count: usize,
    /// (min, max) of solicitation numbers read as integers. Non-numeric
    /// identifiers (e.g. the no-marker sentinel) are left out of the
    /// range but not out of the item list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitation_range: Option<(i64, i64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
}

impl ExtractionSummary {
    pub fn compute(items: &[ExtractedItem], source_filename: Option<&str>) -> Self {
        let total_value = items.iter().map(|i| i.total_value).sum();

        let distinct: HashSet<&str> = items
            .iter()
            .map(|i| i.solicitation_number.as_str())
            .collect();

        let numbers: Vec<i64> = distinct.iter().filter_map(|n| n.parse().ok()).collect();
        let solicitation_range = match (numbers.iter().min(), numbers.iter().max()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        };

        ExtractionSummary {
            total_item_count: items.len(),
            total_value,
            distinct_solicitation_count: distinct.len(),
            solicitation_range,
            source_filename: source_filename.map(str::to_string),
        }
    }
}

/// The full result of running the pipeline over one document: a pending,
/// unsaved batch. Nothing is persisted until the user confirms it with a
/// week label via `store::save_batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub items: Vec<ExtractedItem>,
    pub summary: ExtractionSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}
