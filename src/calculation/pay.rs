//! Pay computation at the configured hourly rates.

use rust_decimal::Decimal;

use crate::config::RatesConfig;
use crate::models::ClaimAmounts;

/// Pay for one entry at both configured rates, claims included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayBreakdown {
    /// Pay at the standard hourly rate.
    pub standard: Decimal,
    /// Pay at the premium hourly rate.
    pub premium: Decimal,
}

/// Rounds a monetary or hour value to 2 decimal places.
///
/// Uses `Decimal::round_dp`, which applies banker's rounding
/// (round-half-to-even). This is the single rounding policy for the
/// whole engine.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Computes pay at both rates for the given worked hours.
///
/// Claims are flat additions independent of hours: each pay figure is
/// `round(hours × rate + cash_card + taxi, 2)`.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::compute_pay;
/// use timesheet_engine::config::RatesConfig;
/// use timesheet_engine::models::ClaimAmounts;
///
/// let pay = compute_pay(
///     Decimal::new(8, 0),
///     &RatesConfig::default(),
///     &ClaimAmounts {
///         cash_card: Decimal::new(10, 0),
///         taxi: Decimal::new(5, 0),
///     },
/// );
/// assert_eq!(pay.standard, Decimal::new(135, 0)); // 8 * 15 + 15
/// assert_eq!(pay.premium, Decimal::new(159, 0)); // 8 * 18 + 15
/// ```
pub fn compute_pay(hours: Decimal, rates: &RatesConfig, claims: &ClaimAmounts) -> PayBreakdown {
    let extras = claims.total();
    PayBreakdown {
        standard: round_currency(hours * rates.standard + extras),
        premium: round_currency(hours * rates.premium + extras),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pay_without_claims() {
        let pay = compute_pay(
            decimal("8"),
            &RatesConfig::default(),
            &ClaimAmounts::default(),
        );
        assert_eq!(pay.standard, decimal("120"));
        assert_eq!(pay.premium, decimal("144"));
    }

    #[test]
    fn test_claims_are_flat_additions() {
        let claims = ClaimAmounts {
            cash_card: decimal("10"),
            taxi: decimal("5"),
        };
        let pay = compute_pay(decimal("8"), &RatesConfig::default(), &claims);
        assert_eq!(pay.standard, decimal("135"));
        assert_eq!(pay.premium, decimal("159"));
    }

    #[test]
    fn test_claims_apply_even_at_zero_hours() {
        let claims = ClaimAmounts {
            cash_card: decimal("12.30"),
            taxi: decimal("0.20"),
        };
        let pay = compute_pay(Decimal::ZERO, &RatesConfig::default(), &claims);
        assert_eq!(pay.standard, decimal("12.50"));
        assert_eq!(pay.premium, decimal("12.50"));
    }

    #[test]
    fn test_fractional_hours_rounded() {
        // 7.37 * 15 = 110.55, 7.37 * 18 = 132.66
        let pay = compute_pay(
            decimal("7.37"),
            &RatesConfig::default(),
            &ClaimAmounts::default(),
        );
        assert_eq!(pay.standard, decimal("110.55"));
        assert_eq!(pay.premium, decimal("132.66"));
    }

    #[test]
    fn test_round_currency_is_half_to_even() {
        assert_eq!(round_currency(decimal("2.125")), decimal("2.12"));
        assert_eq!(round_currency(decimal("2.135")), decimal("2.14"));
    }
}
