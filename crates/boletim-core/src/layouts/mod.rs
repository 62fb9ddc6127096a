use crate::parsing::numeric::{NumericConvention, TrustedPair};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// How the per-solicitation sequence number is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSource {
    /// Ignore the captured digits; number accepted items 1..n in
    /// discovery order. Used where the printed counter is unreliable.
    AssignedInOrder,
    /// The format's own counter is faithful; use the captured value.
    FromCapture,
}

/// One row-extraction strategy, described as data: a single row pattern
/// with named captures (`seq`, `code`, `qty`, and `unit` and/or `total`)
/// plus the numeric profile needed to interpret them.
///
/// Layouts are tried in registry order per section; the first whose
/// pattern matches anything in a section claims that section outright,
/// so a looser fallback never double-counts rows a stricter layout
/// already recognized.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: &'static str,
    pub row: Regex,
    pub quantity_convention: NumericConvention,
    pub value_convention: NumericConvention,
    pub sequence: SequenceSource,
    pub trusted: TrustedPair,
    pub tolerance: Decimal,
}

/// Builtin layouts in priority order.
pub fn builtin() -> &'static [Layout] {
    BUILTIN.as_slice()
}

static BUILTIN: LazyLock<Vec<Layout>> = LazyLock::new(|| {
    vec![
        // Standard bulletin: whitespace-separated columns
        // "seq  code  description  uni  qty  unit-value  total-value",
        // all figures in Brazilian comma-decimal notation. The printed
        // sequence column restarts unpredictably across pages, so items
        // are renumbered in discovery order. Quantity and unit value are
        // printed at full precision; the total is the rounded one.
        Layout {
            name: "padrao",
            row: Regex::new(
                r"(?m)^\s*(?P<seq>\d{1,3})\s+(?P<code>\d{7,12})\s+(?P<desc>.*?\S)\s+(?:R\$\s*)?(?P<qty>[\d.]+,\d+)\s+(?:R\$\s*)?(?P<unit>[\d.]+,\d+)\s+(?:R\$\s*)?(?P<total>[\d.]+,\d+)\s*$",
            )
            .unwrap(),
            quantity_convention: NumericConvention::CommaDecimal,
            value_convention: NumericConvention::CommaDecimal,
            sequence: SequenceSource::AssignedInOrder,
            trusted: TrustedPair::QuantityAndUnit,
            tolerance: Decimal::new(1, 1),
        },
        // "PICK LOJA" export: fixed-width digit runs, 9-digit product
        // codes, no unit-value column. Quantity carries five implied
        // decimals and the total six; the unit value is derived as
        // total / quantity. This format's sequence counter is faithful.
        Layout {
            name: "pick-loja",
            row: Regex::new(
                r"(?m)^\s*(?P<seq>\d{1,3})\s+(?P<code>\d{9})\s+(?P<desc>.*?\S)\s+(?P<qty>\d{6,9})\s+(?P<total>\d{7,12})\s*$",
            )
            .unwrap(),
            quantity_convention: NumericConvention::Implied(5),
            value_convention: NumericConvention::Implied(6),
            sequence: SequenceSource::FromCapture,
            trusted: TrustedPair::QuantityAndTotal,
            tolerance: Decimal::new(2, 1),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_priority_order() {
        let names: Vec<&str> = builtin().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["padrao", "pick-loja"]);
    }

    #[test]
    fn test_padrao_row_captures() {
        let layout = &builtin()[0];
        let line = "  1     242401223   LUVA DE SEGURANCA   UN   30,00000   12,081300   362,439000";
        let caps = layout.row.captures(line).unwrap();
        assert_eq!(&caps["seq"], "1");
        assert_eq!(&caps["code"], "242401223");
        assert_eq!(&caps["qty"], "30,00000");
        assert_eq!(&caps["unit"], "12,081300");
        assert_eq!(&caps["total"], "362,439000");
    }

    #[test]
    fn test_padrao_tolerates_currency_prefix() {
        let layout = &builtin()[0];
        let line = "2  242401312  MANGUEIRA 3/4  UN  10,00000  R$ 17,879400  R$ 178,794000";
        let caps = layout.row.captures(line).unwrap();
        assert_eq!(&caps["unit"], "17,879400");
        assert_eq!(&caps["total"], "178,794000");
    }

    #[test]
    fn test_padrao_description_may_contain_digits() {
        let layout = &builtin()[0];
        let line = "1  242401223  LUVA TAM 7 NITRILICA  UN  30,00000  12,081300  362,439000";
        let caps = layout.row.captures(line).unwrap();
        assert_eq!(&caps["desc"], "LUVA TAM 7 NITRILICA  UN");
        assert_eq!(&caps["qty"], "30,00000");
    }

    #[test]
    fn test_padrao_skips_header_line() {
        let layout = &builtin()[0];
        let line = "Seq.  PRODUTO  DESCRIÇÃO  UNI MED.  QTD  VALOR UNIT.  VALOR TOTAL";
        assert!(layout.row.captures(line).is_none());
    }

    #[test]
    fn test_pick_loja_row_captures() {
        let layout = &builtin()[1];
        let line = "  3  201500065  PARAFUSO SEXTAVADO M8  200000  56456400";
        let caps = layout.row.captures(line).unwrap();
        assert_eq!(&caps["seq"], "3");
        assert_eq!(&caps["code"], "201500065");
        assert_eq!(&caps["qty"], "200000");
        assert_eq!(&caps["total"], "56456400");
        assert!(caps.name("unit").is_none());
    }

    #[test]
    fn test_pick_loja_rows_do_not_match_padrao() {
        let padrao = &builtin()[0];
        let line = "  3  201500065  PARAFUSO SEXTAVADO M8  200000  56456400";
        assert!(padrao.row.captures(line).is_none());
    }
}
