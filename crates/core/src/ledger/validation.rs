//! Business rule validation for journal transactions.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use razao_shared::AppError;
use razao_shared::types::{JournalLineId, TransactionId};

use super::entry::JournalLine;
use crate::accounts::Account;

/// Validation errors for journal transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerValidationError {
    /// Description is empty or only whitespace.
    #[error("Transaction description is required")]
    EmptyDescription,

    /// No debit lines.
    #[error("Transaction must have at least one debit")]
    NoDebits,

    /// No credit lines.
    #[error("Transaction must have at least one credit")]
    NoCredits,

    /// A line has no account selected.
    #[error("Every line must reference an account")]
    MissingAccount,

    /// A line amount is zero or negative.
    #[error("Amount for account {account_code} must be positive, got {amount}")]
    NonPositiveAmount {
        /// Account code of the offending line.
        account_code: String,
        /// The amount supplied.
        amount: Decimal,
    },

    /// The same account appears on more than one line.
    #[error("Account {0} is used more than once")]
    DuplicateAccount(String),

    /// Debits and credits differ.
    #[error("Transaction is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// A line references a code missing from the chart.
    #[error("Account not found: {0}")]
    UnknownAccount(String),
}

impl From<LedgerValidationError> for AppError {
    fn from(err: LedgerValidationError) -> Self {
        match err {
            LedgerValidationError::UnknownAccount(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

/// A line of a draft transaction, keyed by account code as picked in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    /// Code of the account to post to.
    pub account_code: String,
    /// Amount, must be positive.
    pub amount: Decimal,
}

impl DraftLine {
    /// Creates a draft line.
    #[must_use]
    pub fn new(account_code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account_code: account_code.into(),
            amount,
        }
    }
}

/// A transaction as entered, before it is posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDraft {
    /// Transaction date.
    pub date: DateTime<Utc>,
    /// Description shared by every line.
    pub description: String,
    /// Optional external reference (invoice number, receipt).
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Debit lines.
    pub debits: Vec<DraftLine>,
    /// Credit lines.
    pub credits: Vec<DraftLine>,
}

/// Debit and credit sums of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTotals {
    /// Sum of debit amounts.
    pub debit: Decimal,
    /// Sum of credit amounts.
    pub credit: Decimal,
    /// Equal and non-zero.
    pub is_balanced: bool,
}

impl DraftTotals {
    /// Sums the draft's lines.
    #[must_use]
    pub fn of(draft: &JournalDraft) -> Self {
        let debit: Decimal = draft.debits.iter().map(|l| l.amount).sum();
        let credit: Decimal = draft.credits.iter().map(|l| l.amount).sum();
        Self {
            debit,
            credit,
            is_balanced: debit == credit && !debit.is_zero(),
        }
    }

    /// Returns debits minus credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Validates a draft transaction.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_draft(draft: &JournalDraft) -> Result<DraftTotals, LedgerValidationError> {
    if draft.description.trim().is_empty() {
        return Err(LedgerValidationError::EmptyDescription);
    }
    if draft.debits.is_empty() {
        return Err(LedgerValidationError::NoDebits);
    }
    if draft.credits.is_empty() {
        return Err(LedgerValidationError::NoCredits);
    }

    let all_lines = || draft.debits.iter().chain(&draft.credits);

    if all_lines().any(|l| l.account_code.trim().is_empty()) {
        return Err(LedgerValidationError::MissingAccount);
    }

    if let Some(line) = all_lines().find(|l| l.amount <= Decimal::ZERO) {
        return Err(LedgerValidationError::NonPositiveAmount {
            account_code: line.account_code.clone(),
            amount: line.amount,
        });
    }

    let mut seen = HashSet::new();
    if let Some(line) = all_lines().find(|l| !seen.insert(l.account_code.trim())) {
        return Err(LedgerValidationError::DuplicateAccount(line.account_code.trim().to_string()));
    }

    let totals = DraftTotals::of(draft);
    if !totals.is_balanced {
        return Err(LedgerValidationError::Unbalanced {
            debits: totals.debit,
            credits: totals.credit,
        });
    }

    Ok(totals)
}

impl JournalDraft {
    /// Validates the draft and expands it into journal lines.
    ///
    /// Debit lines come first, then credit lines, each in entry order.
    pub fn into_lines(
        self,
        accounts: &[Account],
        transaction_id: TransactionId,
        transaction_number: u64,
    ) -> Result<Vec<JournalLine>, LedgerValidationError> {
        validate_draft(&self)?;

        let by_code: HashMap<&str, &Account> = accounts.iter().map(|a| (a.code.as_str(), a)).collect();
        let description = self.description.trim().to_string();
        let date = self.date;

        let debits = self.debits.into_iter().map(|l| (l, true));
        let credits = self.credits.into_iter().map(|l| (l, false));

        debits
            .chain(credits)
            .map(|(line, is_debit)| {
                let code = line.account_code.trim();
                let account = by_code
                    .get(code)
                    .ok_or_else(|| LedgerValidationError::UnknownAccount(code.to_string()))?;
                let (debit, credit) = if is_debit {
                    (line.amount, Decimal::ZERO)
                } else {
                    (Decimal::ZERO, line.amount)
                };
                Ok(JournalLine {
                    id: JournalLineId::new(),
                    transaction_id,
                    transaction_number,
                    account_id: account.id,
                    date,
                    description: description.clone(),
                    debit,
                    credit,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use razao_shared::types::AccountId;
    use rust_decimal_macros::dec;

    fn draft(debits: Vec<DraftLine>, credits: Vec<DraftLine>) -> JournalDraft {
        JournalDraft {
            date: Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap(),
            description: "Venda à vista".into(),
            reference_number: Some("NF-001".into()),
            debits,
            credits,
        }
    }

    #[test]
    fn test_balanced_draft() {
        let d = draft(
            vec![DraftLine::new("1.0.1", dec!(100.00))],
            vec![DraftLine::new("6.0.1", dec!(60.00)), DraftLine::new("3.0.3", dec!(40.00))],
        );
        let totals = validate_draft(&d).unwrap();
        assert!(totals.is_balanced);
        assert_eq!(totals.difference(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_description() {
        let mut d = draft(vec![DraftLine::new("1.0.1", dec!(1))], vec![DraftLine::new("6.0.1", dec!(1))]);
        d.description = "  ".into();
        assert_eq!(validate_draft(&d), Err(LedgerValidationError::EmptyDescription));
    }

    #[test]
    fn test_one_sided_drafts() {
        let no_debit = draft(vec![], vec![DraftLine::new("6.0.1", dec!(1))]);
        let no_credit = draft(vec![DraftLine::new("1.0.1", dec!(1))], vec![]);
        assert_eq!(validate_draft(&no_debit), Err(LedgerValidationError::NoDebits));
        assert_eq!(validate_draft(&no_credit), Err(LedgerValidationError::NoCredits));
    }

    #[test]
    fn test_missing_account() {
        let d = draft(vec![DraftLine::new("", dec!(1))], vec![DraftLine::new("6.0.1", dec!(1))]);
        assert_eq!(validate_draft(&d), Err(LedgerValidationError::MissingAccount));
    }

    #[test]
    fn test_zero_amount() {
        let d = draft(vec![DraftLine::new("1.0.1", Decimal::ZERO)], vec![DraftLine::new("6.0.1", dec!(1))]);
        assert_eq!(
            validate_draft(&d),
            Err(LedgerValidationError::NonPositiveAmount {
                account_code: "1.0.1".into(),
                amount: Decimal::ZERO,
            })
        );
    }

    #[test]
    fn test_duplicate_account_across_sides() {
        let d = draft(vec![DraftLine::new("1.0.1", dec!(5))], vec![DraftLine::new("1.0.1", dec!(5))]);
        assert_eq!(
            validate_draft(&d),
            Err(LedgerValidationError::DuplicateAccount("1.0.1".into()))
        );
    }

    #[test]
    fn test_unbalanced() {
        let d = draft(vec![DraftLine::new("1.0.1", dec!(100))], vec![DraftLine::new("6.0.1", dec!(50))]);
        assert_eq!(
            validate_draft(&d),
            Err(LedgerValidationError::Unbalanced {
                debits: dec!(100),
                credits: dec!(50),
            })
        );
    }

    #[test]
    fn test_into_lines() {
        let caixa = Account::new(AccountId::new(), "1.0.1", "Caixa", "Ativo", "Ativo Circulante", "", Decimal::ZERO);
        let vendas = Account::new(AccountId::new(), "6.0.1", "Receita de Vendas", "Receitas", "", "", Decimal::ZERO);
        let transaction_id = TransactionId::new();

        let lines = draft(vec![DraftLine::new("1.0.1", dec!(250))], vec![DraftLine::new("6.0.1", dec!(250))])
            .into_lines(&[caixa.clone(), vendas.clone()], transaction_id, 12)
            .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].account_id, caixa.id);
        assert_eq!(lines[0].debit, dec!(250));
        assert_eq!(lines[0].credit, Decimal::ZERO);
        assert_eq!(lines[1].account_id, vendas.id);
        assert_eq!(lines[1].credit, dec!(250));
        assert!(lines.iter().all(|l| l.transaction_id == transaction_id && l.transaction_number == 12));
    }

    #[test]
    fn test_into_lines_unknown_account() {
        let caixa = Account::new(AccountId::new(), "1.0.1", "Caixa", "Ativo", "Ativo Circulante", "", Decimal::ZERO);
        let result = draft(vec![DraftLine::new("1.0.1", dec!(1))], vec![DraftLine::new("9.9.9", dec!(1))])
            .into_lines(&[caixa], TransactionId::new(), 1);
        assert_eq!(result, Err(LedgerValidationError::UnknownAccount("9.9.9".into())));
    }

    #[test]
    fn test_error_maps_into_app_error() {
        assert_eq!(AppError::from(LedgerValidationError::NoDebits).status_code(), 400);
        assert_eq!(
            AppError::from(LedgerValidationError::UnknownAccount("9.9.9".into())).status_code(),
            404
        );
    }
}
