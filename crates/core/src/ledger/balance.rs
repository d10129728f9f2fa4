//! Natural-side balance calculations.
//!
//! - Ativo/Despesas: balance += debit - credit (debit-natured)
//! - Passivo/Patrimônio Líquido/Receitas: balance += credit - debit (credit-natured)
//!
//! Accounts whose group has no natural side keep a zero balance.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use razao_shared::types::AccountId;

use super::entry::JournalLine;
use crate::accounts::Account;

/// Side on which an account's balance grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaturalSide {
    /// Debit-natured accounts (Ativo, Despesas).
    Debit,
    /// Credit-natured accounts (Passivo, Patrimônio Líquido, Receitas).
    Credit,
}

impl NaturalSide {
    /// Calculates the balance change for a line.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }

    /// Natural side of the account's group, if any.
    #[must_use]
    pub fn of(account: &Account) -> Option<Self> {
        account.group().and_then(|g| g.natural_side())
    }
}

/// Inclusive date window over journal lines. Open bounds are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day included.
    pub start: Option<NaiveDate>,
    /// Last day included.
    pub end: Option<NaiveDate>,
}

impl Period {
    /// Every line, regardless of date.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Every line up to and including `end`.
    #[must_use]
    pub const fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Whether a line dated `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        let day = date.date_naive();
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}

/// Recomputes every account's balance from its journal lines inside `period`.
///
/// Returns new accounts in input order; stored balances are ignored.
#[must_use]
pub fn compute_balances(accounts: &[Account], lines: &[JournalLine], period: Period) -> Vec<Account> {
    let mut sums: HashMap<AccountId, (Decimal, Decimal)> = HashMap::new();
    for line in lines.iter().filter(|l| period.contains(l.date)) {
        let entry = sums.entry(line.account_id).or_default();
        entry.0 += line.debit;
        entry.1 += line.credit;
    }

    accounts
        .iter()
        .map(|account| {
            let balance = match (NaturalSide::of(account), sums.get(&account.id)) {
                (Some(side), Some(&(debit, credit))) => side.balance_change(debit, credit),
                _ => Decimal::ZERO,
            };
            account.with_balance(balance)
        })
        .collect()
}

/// One row of an account's ledger ("livro razão").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    /// Line date.
    pub date: DateTime<Utc>,
    /// Transaction number.
    pub transaction_number: u64,
    /// Transaction description.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Natural-side balance after this line.
    pub balance: Decimal,
}

/// Builds the chronological ledger of one account with a running balance.
///
/// Lines on the same date keep their input order.
#[must_use]
pub fn account_ledger(account: &Account, lines: &[JournalLine]) -> Vec<LedgerRow> {
    let side = NaturalSide::of(account);
    let mut own: Vec<&JournalLine> = lines.iter().filter(|l| l.account_id == account.id).collect();
    own.sort_by_key(|l| l.date);

    let mut running = Decimal::ZERO;
    own.into_iter()
        .map(|line| {
            if let Some(side) = side {
                running += side.balance_change(line.debit, line.credit);
            }
            LedgerRow {
                date: line.date,
                transaction_number: line.transaction_number,
                description: line.description.clone(),
                debit: line.debit,
                credit: line.credit,
                balance: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::types::{ATIVO_CIRCULANTE, PASSIVO_CIRCULANTE};
    use chrono::TimeZone;
    use razao_shared::types::{JournalLineId, TransactionId};
    use rust_decimal_macros::dec;

    fn account(code: &str, group: &str, subgroup1: &str) -> Account {
        Account::new(AccountId::new(), code, code, group, subgroup1, "", dec!(999))
    }

    fn line(account: &Account, day: u32, debit: Decimal, credit: Decimal, number: u64) -> JournalLine {
        JournalLine {
            id: JournalLineId::new(),
            transaction_id: TransactionId::new(),
            transaction_number: number,
            account_id: account.id,
            date: Utc.with_ymd_and_hms(2025, 1, day, 15, 0, 0).unwrap(),
            description: format!("Lançamento {number}"),
            debit,
            credit,
        }
    }

    #[test]
    fn test_balance_change_by_side() {
        assert_eq!(NaturalSide::Debit.balance_change(dec!(100), dec!(30)), dec!(70));
        assert_eq!(NaturalSide::Credit.balance_change(dec!(100), dec!(30)), dec!(-70));
    }

    #[test]
    fn test_period_bounds_are_inclusive() {
        let period = Period {
            start: NaiveDate::from_ymd_opt(2025, 1, 10),
            end: NaiveDate::from_ymd_opt(2025, 1, 20),
        };
        let at = |d| Utc.with_ymd_and_hms(2025, 1, d, 23, 59, 59).unwrap();
        assert!(!period.contains(at(9)));
        assert!(period.contains(at(10)));
        assert!(period.contains(at(20)));
        assert!(!period.contains(at(21)));
        assert!(Period::all().contains(at(1)));
    }

    #[test]
    fn test_compute_balances_natural_side() {
        let caixa = account("1.0.1", "Ativo", ATIVO_CIRCULANTE);
        let fornecedores = account("3.0.1", "Passivo", PASSIVO_CIRCULANTE);
        let resultado = account("7.0.1", "Apuração do Resultado", "");
        let lines = vec![
            line(&caixa, 2, dec!(1000), Decimal::ZERO, 1),
            line(&fornecedores, 2, Decimal::ZERO, dec!(1000), 1),
            line(&caixa, 5, Decimal::ZERO, dec!(200), 2),
            line(&fornecedores, 5, dec!(200), Decimal::ZERO, 2),
            line(&resultado, 5, dec!(50), Decimal::ZERO, 3),
        ];

        let balances = compute_balances(
            &[caixa.clone(), fornecedores.clone(), resultado.clone()],
            &lines,
            Period::all(),
        );

        assert_eq!(balances[0].balance, dec!(800));
        assert_eq!(balances[1].balance, dec!(800));
        assert_eq!(balances[2].balance, Decimal::ZERO);
        // Input untouched.
        assert_eq!(caixa.balance, dec!(999));
    }

    #[test]
    fn test_compute_balances_respects_period() {
        let caixa = account("1.0.1", "Ativo", ATIVO_CIRCULANTE);
        let lines = vec![
            line(&caixa, 2, dec!(10), Decimal::ZERO, 1),
            line(&caixa, 15, dec!(20), Decimal::ZERO, 2),
            line(&caixa, 28, dec!(40), Decimal::ZERO, 3),
        ];

        let until_mid = compute_balances(
            std::slice::from_ref(&caixa),
            &lines,
            Period::until(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()),
        );
        assert_eq!(until_mid[0].balance, dec!(30));
    }

    #[test]
    fn test_accounts_without_lines_are_zeroed() {
        let caixa = account("1.0.1", "Ativo", ATIVO_CIRCULANTE);
        let balances = compute_balances(&[caixa], &[], Period::all());
        assert_eq!(balances[0].balance, Decimal::ZERO);
    }

    #[test]
    fn test_account_ledger_running_balance() {
        let fornecedores = account("3.0.1", "Passivo", PASSIVO_CIRCULANTE);
        let other = account("1.0.1", "Ativo", ATIVO_CIRCULANTE);
        let lines = vec![
            line(&fornecedores, 9, dec!(300), Decimal::ZERO, 3),
            line(&other, 1, dec!(5), Decimal::ZERO, 1),
            line(&fornecedores, 3, Decimal::ZERO, dec!(1000), 1),
            line(&fornecedores, 3, Decimal::ZERO, dec!(50), 2),
        ];

        let rows = account_ledger(&fornecedores, &lines);

        let numbers: Vec<_> = rows.iter().map(|r| r.transaction_number).collect();
        let balances: Vec<_> = rows.iter().map(|r| r.balance).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(balances, vec![dec!(1000), dec!(1050), dec!(750)]);
    }
}
