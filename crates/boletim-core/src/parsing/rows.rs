use crate::layouts::{Layout, SequenceSource};
use crate::model::{ExtractedItem, SkippedRow};
use crate::parsing::numeric::{self, NumericConvention};
use regex::Captures;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Items accepted from one section, plus the rows dropped along the way.
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub items: Vec<ExtractedItem>,
    pub skipped: Vec<SkippedRow>,
}

/// Extract the item rows of one solicitation section.
///
/// Layouts are tried in priority order and the first whose pattern
/// matches anything in the section is used exclusively for it. Accepted
/// items get contiguous sequence numbers (or the captured ones, per the
/// layout's discipline); duplicate product codes keep the first
/// occurrence; rows with unusable figures are dropped and recorded.
pub fn extract_items(
    section_text: &str,
    solicitation_number: &str,
    layouts: &[Layout],
) -> RowOutcome {
    let layout = match layouts.iter().find(|l| l.row.is_match(section_text)) {
        Some(layout) => layout,
        None => return RowOutcome::default(),
    };

    let mut outcome = RowOutcome::default();
    let mut accepted_codes: HashSet<String> = HashSet::new();
    let mut next_sequence: u32 = 1;

    for caps in layout.row.captures_iter(section_text) {
        let line = caps.get(0).map(|m| m.as_str().trim()).unwrap_or_default();
        let skip = |reason: String| SkippedRow {
            solicitation_number: solicitation_number.to_string(),
            line: line.to_string(),
            reason,
        };

        let code = caps["code"].to_string();
        if accepted_codes.contains(&code) {
            outcome
                .skipped
                .push(skip(format!("duplicate product code {code}")));
            continue;
        }

        let qty = positive_field(&caps, "qty", layout.quantity_convention);
        let unit = positive_field(&caps, "unit", layout.value_convention);
        let total = positive_field(&caps, "total", layout.value_convention);
        let (qty, unit, total) = match (qty, unit, total) {
            (Ok(q), Ok(u), Ok(t)) => (q, u, t),
            (Err(reason), _, _) | (_, Err(reason), _) | (_, _, Err(reason)) => {
                outcome.skipped.push(skip(reason));
                continue;
            }
        };

        let Some((quantity, unit_value, total_value)) =
            numeric::reconcile(qty, unit, total, layout.trusted, layout.tolerance)
        else {
            outcome
                .skipped
                .push(skip("unreconcilable quantity/value figures".to_string()));
            continue;
        };

        let sequence = match layout.sequence {
            SequenceSource::AssignedInOrder => next_sequence,
            SequenceSource::FromCapture => caps["seq"].parse().unwrap_or(next_sequence),
        };

        accepted_codes.insert(code.clone());
        next_sequence += 1;
        outcome.items.push(ExtractedItem {
            solicitation_number: solicitation_number.to_string(),
            sequence,
            product_code: code,
            quantity,
            unit_value,
            total_value,
        });
    }

    outcome
}

/// Read a named capture under the given convention.
///
/// A group absent from the layout's pattern yields `Ok(None)` (the field
/// will be derived); a group that is present but normalizes to zero or
/// garbage rejects the whole row.
fn positive_field(
    caps: &Captures<'_>,
    name: &str,
    convention: NumericConvention,
) -> Result<Option<Decimal>, String> {
    match caps.name(name) {
        None => Ok(None),
        Some(m) => match numeric::parse_decimal(m.as_str(), convention) {
            Some(v) if v > Decimal::ZERO => Ok(Some(v)),
            Some(_) => Err(format!("non-positive {name} '{}'", m.as_str())),
            None => Err(format!("unparseable {name} '{}'", m.as_str())),
        },
    }
}
