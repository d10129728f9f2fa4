//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in Brazilian reais.
///
/// Displays in the pt-BR convention: `R$ 1.234,56`, negatives as `-R$ 30,00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// The amount in reais (not centavos).
    pub amount: Decimal,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{:.2}", rounded.abs());
        let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}R$ {},{cents}", group_thousands(units))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_zero() {
        let money = Money::zero();
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::new(dec!(-10)).is_negative());
        assert!(!Money::new(dec!(10)).is_negative());
        assert!(!Money::new(dec!(-0.00)).is_negative());
    }

    #[rstest]
    #[case(dec!(0), "R$ 0,00")]
    #[case(dec!(5), "R$ 5,00")]
    #[case(dec!(999.9), "R$ 999,90")]
    #[case(dec!(1000), "R$ 1.000,00")]
    #[case(dec!(1234.56), "R$ 1.234,56")]
    #[case(dec!(1234567.891), "R$ 1.234.567,89")]
    #[case(dec!(0.005), "R$ 0,01")]
    #[case(dec!(-30), "-R$ 30,00")]
    #[case(dec!(-0.001), "R$ 0,00")]
    fn test_money_display_pt_br(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount).to_string(), expected);
    }
}
