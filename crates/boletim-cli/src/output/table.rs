use boletim_core::model::Extraction;
use boletim_core::store::StoreSummary;
use std::fmt::Write;

pub fn format_extraction(extraction: &Extraction) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for item in &extraction.items {
        if current != Some(item.solicitation_number.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "=== Solicitação {} ===", item.solicitation_number);
            let _ = writeln!(
                out,
                "  {:<4} {:<12} {:>14} {:>14} {:>14}",
                "Seq", "Produto", "Qtd", "Vl. Unit.", "Vl. Total"
            );
            current = Some(item.solicitation_number.as_str());
        }
        let _ = writeln!(
            out,
            "  {:<4} {:<12} {:>14} {:>14} {:>14}",
            item.sequence, item.product_code, item.quantity, item.unit_value, item.total_value
        );
    }

    let s = &extraction.summary;
    out.push('\n');
    let _ = writeln!(
        out,
        "Items: {}   Solicitations: {}   Total value: {}",
        s.total_item_count, s.distinct_solicitation_count, s.total_value
    );
    if let Some((min, max)) = s.solicitation_range {
        let _ = writeln!(out, "Solicitation range: {min}-{max}");
    }

    out
}

pub fn format_store_summary(summary: &StoreSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Stored items: {}   Solicitations: {}   Total value: {}",
        summary.total_item_count, summary.distinct_solicitation_count, summary.total_value
    );
    out
}
