pub mod sqlite;

use crate::error::BoletimError;
use crate::model::ExtractedItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate figures over the entire persisted store, across all weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub total_item_count: usize,
    pub total_value: Decimal,
    pub distinct_solicitation_count: usize,
}

/// Key-based persistence boundary for confirmed batches. The week label
/// is the replace-on-save key.
pub trait ItemStore {
    /// Remove every item stored under `week_label`. Idempotent.
    fn delete_week(&mut self, week_label: &str) -> Result<(), BoletimError>;

    /// Bulk-insert a batch tagged with `week_label`.
    fn insert_batch(
        &mut self,
        week_label: &str,
        items: &[ExtractedItem],
    ) -> Result<(), BoletimError>;

    /// Recompute the aggregate over all stored weeks.
    fn aggregate_summary(&self) -> Result<StoreSummary, BoletimError>;
}

/// Persist a confirmed batch under `week_label`, replacing any batch
/// previously saved with the same label.
///
/// Validation happens before any store mutation. The returned summary is
/// recomputed over the entire store, not just this batch: the running
/// totals intentionally span every saved week. Persistence errors abort
/// and propagate verbatim; there is no retry.
pub fn save_batch(
    store: &mut dyn ItemStore,
    items: &[ExtractedItem],
    week_label: &str,
) -> Result<StoreSummary, BoletimError> {
    let week_label = week_label.trim();
    if week_label.is_empty() {
        return Err(BoletimError::Validation("the week label is required".into()));
    }
    if items.is_empty() {
        return Err(BoletimError::Validation(
            "no items provided to save".into(),
        ));
    }

    store.delete_week(week_label)?;
    store.insert_batch(week_label, items)?;
    store.aggregate_summary()
}
