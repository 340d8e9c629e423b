//! Conversions between Shopify decimal amounts and integer minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert a decimal amount such as `19.99` into cents.
///
/// Digits beyond the second decimal place are rounded half away from zero.
/// Returns `None` when the amount does not fit in an `i64` of cents.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Convert cents back into major units.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).expect("valid decimal")
    }

    #[test]
    fn converts_common_shopify_amounts() {
        assert_eq!(to_cents(dec("19.99")), Some(1999));
        assert_eq!(to_cents(dec("10.00")), Some(1000));
        assert_eq!(to_cents(dec("0.5")), Some(50));
        assert_eq!(to_cents(dec("42")), Some(4200));
        assert_eq!(to_cents(dec("-3.20")), Some(-320));
    }

    #[test]
    fn rounds_extra_precision_half_away_from_zero() {
        assert_eq!(to_cents(dec("1.005")), Some(101));
        assert_eq!(to_cents(dec("1.004")), Some(100));
        assert_eq!(to_cents(dec("-1.005")), Some(-101));
    }

    #[test]
    fn rejects_amounts_outside_cent_range() {
        assert_eq!(to_cents(Decimal::MAX), None);
    }

    #[test]
    fn converts_to_major_units() {
        assert_eq!(from_cents(3000), dec("30"));
        assert_eq!(from_cents(1999), dec("19.99"));
        assert_eq!(from_cents(0), Decimal::ZERO);
        assert_eq!(from_cents(1999).to_string(), "19.99");
    }
}
