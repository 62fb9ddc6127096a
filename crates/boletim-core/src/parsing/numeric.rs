use rust_decimal::Decimal;
use std::str::FromStr;

/// How a captured numeric token should be read.
///
/// The convention is an explicit per-field setting on each layout. Some
/// bulletin layouts use Brazilian comma-decimal notation, others print
/// dot decimals, and the fixed-width export writes bare digit runs with
/// an implied decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericConvention {
    /// Brazilian notation: dot as thousands separator, comma as decimal
    /// separator ("1.234,56" -> 1234.56).
    CommaDecimal,
    /// Plain decimal point; commas treated as thousands separators.
    DotDecimal,
    /// All-digits token divided by a fixed power of ten
    /// (`Implied(5)` reads "3000000" as 30.00000).
    Implied(u32),
}

/// Which two of the quantity/unit/total triple the layout considers
/// reliable when the three figures disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustedPair {
    QuantityAndUnit,
    QuantityAndTotal,
}

/// Parse a numeric token under the given convention.
///
/// Returns `None` for tokens with no digits and for malformed
/// numeric-looking tokens; the caller drops the candidate row. Never
/// panics on bad input.
pub fn parse_decimal(token: &str, convention: NumericConvention) -> Option<Decimal> {
    let token = token.trim();
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    match convention {
        NumericConvention::CommaDecimal => {
            let normalized = token.replace('.', "").replace(',', ".");
            Decimal::from_str(&normalized).ok()
        }
        NumericConvention::DotDecimal => {
            let normalized = token.replace(',', "");
            Decimal::from_str(&normalized).ok()
        }
        NumericConvention::Implied(scale) => {
            if !token.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let digits: i64 = token.parse().ok()?;
            Some(Decimal::new(digits, scale))
        }
    }
}

/// Complete and validate a (quantity, unit value, total value) triple.
///
/// At least two of the three must be present and positive; the missing
/// one is derived arithmetically. When all three are present they must
/// satisfy `|qty * unit - total| <= max(total * tolerance, 0.01)`; on
/// violation the field outside the layout's trusted pair is recomputed.
/// Returns `None` when no consistent positive assignment exists.
pub fn reconcile(
    quantity: Option<Decimal>,
    unit_value: Option<Decimal>,
    total_value: Option<Decimal>,
    trusted: TrustedPair,
    tolerance: Decimal,
) -> Option<(Decimal, Decimal, Decimal)> {
    let positive = |v: Option<Decimal>| v.filter(|v| *v > Decimal::ZERO);
    let qty = positive(quantity);
    let unit = positive(unit_value);
    let total = positive(total_value);

    match (qty, unit, total) {
        (Some(q), Some(u), None) => Some((q, u, q * u)),
        (Some(q), None, Some(t)) => Some((q, t / q, t)),
        (None, Some(u), Some(t)) => Some((t / u, u, t)),
        (Some(q), Some(u), Some(t)) => {
            let drift = (q * u - t).abs();
            if drift <= (t * tolerance).max(Decimal::new(1, 2)) {
                Some((q, u, t))
            } else {
                match trusted {
                    TrustedPair::QuantityAndUnit => Some((q, u, q * u)),
                    TrustedPair::QuantityAndTotal => Some((q, t / q, t)),
                }
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_comma_decimal_with_thousands() {
        assert_eq!(
            parse_decimal("1.234,56", NumericConvention::CommaDecimal),
            Some(dec!(1234.56))
        );
    }

    #[test]
    fn test_comma_decimal_quantity() {
        assert_eq!(
            parse_decimal("30,00000", NumericConvention::CommaDecimal),
            Some(dec!(30.00000))
        );
    }

    #[test]
    fn test_comma_decimal_plain_integer() {
        assert_eq!(
            parse_decimal("286344", NumericConvention::CommaDecimal),
            Some(dec!(286344))
        );
    }

    #[test]
    fn test_dot_decimal() {
        assert_eq!(
            parse_decimal("12.0813", NumericConvention::DotDecimal),
            Some(dec!(12.0813))
        );
        assert_eq!(
            parse_decimal("1,234.56", NumericConvention::DotDecimal),
            Some(dec!(1234.56))
        );
    }

    #[test]
    fn test_implied_scale() {
        assert_eq!(
            parse_decimal("3000000", NumericConvention::Implied(5)),
            Some(dec!(30.00000))
        );
        assert_eq!(
            parse_decimal("56456400", NumericConvention::Implied(6)),
            Some(dec!(56.456400))
        );
    }

    #[test]
    fn test_implied_rejects_separators() {
        assert_eq!(parse_decimal("30,00000", NumericConvention::Implied(5)), None);
    }

    #[test]
    fn test_no_digits_is_unparseable() {
        assert_eq!(parse_decimal("UN", NumericConvention::CommaDecimal), None);
        assert_eq!(parse_decimal("", NumericConvention::CommaDecimal), None);
    }

    #[test]
    fn test_malformed_token_degrades_to_none() {
        assert_eq!(
            parse_decimal("12,34,56", NumericConvention::CommaDecimal),
            None
        );
    }

    #[test]
    fn test_reconcile_derives_total() {
        let (q, u, t) = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            None,
            TrustedPair::QuantityAndUnit,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(q, dec!(30));
        assert_eq!(u, dec!(12.0813));
        assert_eq!(t, dec!(362.439));
    }

    #[test]
    fn test_reconcile_derives_unit() {
        let (_, u, _) = reconcile(
            Some(dec!(2)),
            None,
            Some(dec!(56.4564)),
            TrustedPair::QuantityAndTotal,
            dec!(0.2),
        )
        .unwrap();
        assert_eq!(u, dec!(28.2282));
    }

    #[test]
    fn test_reconcile_derives_quantity() {
        let (q, _, _) = reconcile(
            None,
            Some(dec!(75.45)),
            Some(dec!(603.60)),
            TrustedPair::QuantityAndTotal,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(q, dec!(8));
    }

    #[test]
    fn test_reconcile_consistent_triple_kept_verbatim() {
        let (q, u, t) = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(362.44)),
            TrustedPair::QuantityAndUnit,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!((q, u, t), (dec!(30), dec!(12.0813), dec!(362.44)));
    }

    #[test]
    fn test_reconcile_inconsistent_triple_recomputes_from_trusted_pair() {
        // Total is off by far more than 10%: quantity and unit win.
        let (_, _, t) = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(999)),
            TrustedPair::QuantityAndUnit,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(t, dec!(362.439));

        // Same figures, but a layout that trusts quantity and total.
        let (_, u, t) = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(999)),
            TrustedPair::QuantityAndTotal,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(t, dec!(999));
        assert_eq!(u, dec!(33.3));
    }

    #[test]
    fn test_reconcile_tolerance_bounds() {
        // 30 * 12.0813 = 362.439. A reported total of 398 is within 10%
        // of itself (drift 35.561 <= 39.8) and is kept.
        let within = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(398)),
            TrustedPair::QuantityAndUnit,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(within.2, dec!(398));

        // 450 drifts by 87.561 > 45: recomputed at 10%, kept at 20%.
        let strict = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(450)),
            TrustedPair::QuantityAndUnit,
            dec!(0.1),
        )
        .unwrap();
        assert_eq!(strict.2, dec!(362.439));

        let loose = reconcile(
            Some(dec!(30)),
            Some(dec!(12.0813)),
            Some(dec!(450)),
            TrustedPair::QuantityAndUnit,
            dec!(0.2),
        )
        .unwrap();
        assert_eq!(loose.2, dec!(450));
    }

    #[test]
    fn test_reconcile_needs_two_figures() {
        assert!(reconcile(
            Some(dec!(30)),
            None,
            None,
            TrustedPair::QuantityAndUnit,
            dec!(0.1)
        )
        .is_none());
        assert!(reconcile(None, None, None, TrustedPair::QuantityAndUnit, dec!(0.1)).is_none());
    }

    #[test]
    fn test_reconcile_rejects_non_positive() {
        assert!(reconcile(
            Some(dec!(0)),
            Some(dec!(12.0813)),
            None,
            TrustedPair::QuantityAndUnit,
            dec!(0.1)
        )
        .is_none());
    }
}
