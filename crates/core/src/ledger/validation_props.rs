//! Property-based tests for journal draft validation.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validation::{validate_draft, DraftLine, JournalDraft, LedgerValidationError};

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a list of positive amounts.
fn amounts(max: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(positive_amount(), 1..max)
}

/// Builds draft lines with distinct codes, numbered from `offset`.
fn lines(amounts: &[Decimal], offset: usize) -> Vec<DraftLine> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| DraftLine::new(format!("1.0.{}", offset + i + 1), *amount))
        .collect()
}

fn make_draft(debits: Vec<DraftLine>, credits: Vec<DraftLine>) -> JournalDraft {
    JournalDraft {
        date: Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap(),
        description: "Lançamento".into(),
        reference_number: None,
        debits,
        credits,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A draft whose single credit mirrors the debit sum validates.
    #[test]
    fn prop_mirrored_draft_is_valid(debits in amounts(10)) {
        let total: Decimal = debits.iter().copied().sum();
        let draft = make_draft(lines(&debits, 0), lines(&[total], debits.len()));

        let totals = validate_draft(&draft).unwrap();

        prop_assert!(totals.is_balanced);
        prop_assert_eq!(totals.debit, total);
        prop_assert_eq!(totals.credit, total);
    }

    /// Any difference between the sides is reported with both sums.
    #[test]
    fn prop_unbalanced_draft_rejected(
        debits in amounts(10),
        credits in amounts(10),
    ) {
        let debit_total: Decimal = debits.iter().copied().sum();
        let credit_total: Decimal = credits.iter().copied().sum();
        prop_assume!(debit_total != credit_total);

        let draft = make_draft(lines(&debits, 0), lines(&credits, debits.len()));

        prop_assert_eq!(
            validate_draft(&draft),
            Err(LedgerValidationError::Unbalanced {
                debits: debit_total,
                credits: credit_total,
            })
        );
    }

    /// A non-positive line fails whatever else the draft holds.
    #[test]
    fn prop_non_positive_amount_rejected(
        debits in amounts(5),
        bad in -1_000_000i64..=0,
        position in any::<prop::sample::Index>(),
    ) {
        let mut debit_lines = lines(&debits, 0);
        let at = position.index(debit_lines.len());
        debit_lines[at].amount = Decimal::new(bad, 2);
        let draft = make_draft(debit_lines, lines(&[Decimal::ONE], debits.len()));

        let is_non_positive = matches!(
            validate_draft(&draft),
            Err(LedgerValidationError::NonPositiveAmount { .. })
        );
        prop_assert!(is_non_positive);
    }

    /// Reusing an account code on any line is rejected.
    #[test]
    fn prop_duplicate_account_rejected(amount in positive_amount()) {
        let draft = make_draft(
            vec![DraftLine::new("1.0.1", amount), DraftLine::new("1.0.1", amount)],
            vec![DraftLine::new("3.0.1", amount + amount)],
        );

        prop_assert_eq!(
            validate_draft(&draft),
            Err(LedgerValidationError::DuplicateAccount("1.0.1".into()))
        );
    }
}
