//! Account management service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use razao_shared::types::AccountId;
use tracing::debug;

use super::classification::Classification;
use super::code::{self, CodeAllocation};
use super::error::AccountError;
use super::types::{code_and_name, Account};
use crate::ledger::JournalLine;

/// An account ready to be inserted by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Freshly generated code.
    pub code: String,
    /// Trimmed account name.
    pub name: String,
    /// Canonical group label.
    pub account_group: String,
    /// Canonical first-level subgroup label.
    pub subgroup1: String,
    /// Canonical second-level subgroup label.
    pub subgroup2: String,
    /// `"<code> - <name>"`.
    pub code_and_name: String,
    /// Always zero for a new account.
    pub balance: Decimal,
}

impl NewAccount {
    /// Attaches the identifier assigned by storage.
    #[must_use]
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            code: self.code,
            name: self.name,
            account_group: self.account_group,
            subgroup1: self.subgroup1,
            subgroup2: self.subgroup2,
            code_and_name: self.code_and_name,
            balance: self.balance,
        }
    }
}

/// Service for chart of accounts maintenance.
pub struct AccountService;

impl AccountService {
    /// Generates the next code for a classification using max-based allocation.
    ///
    /// Returns [`AccountError::InvalidClassification`] when the triple is not
    /// one of the table rows.
    pub fn generate_next_code(
        group: &str,
        subgroup1: &str,
        subgroup2: &str,
        existing: &[Account],
    ) -> Result<String, AccountError> {
        Self::generate_next_code_with(group, subgroup1, subgroup2, existing, CodeAllocation::default())
    }

    /// Generates the next code with an explicit allocation strategy.
    ///
    /// [`CodeAllocation::LastInOrder`] requires `existing` sorted ascending by code.
    pub fn generate_next_code_with(
        group: &str,
        subgroup1: &str,
        subgroup2: &str,
        existing: &[Account],
        allocation: CodeAllocation,
    ) -> Result<String, AccountError> {
        let classification = Self::resolve(group, subgroup1, subgroup2)?;
        let code = code::next_code(
            classification,
            existing.iter().map(|a| a.code.as_str()),
            allocation,
        )?;
        debug!(%code, ?classification, ?allocation, "Generated account code");
        Ok(code)
    }

    /// Builds the insert payload for a new account.
    ///
    /// Subgroup labels are normalised to the classification's canonical
    /// values, so `subgroup2` is only ever set under `Ativo Não Circulante`.
    pub fn new_account(
        name: &str,
        group: &str,
        subgroup1: &str,
        subgroup2: &str,
        existing: &[Account],
    ) -> Result<NewAccount, AccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::EmptyName);
        }

        let classification = Self::resolve(group, subgroup1, subgroup2)?;
        let code = code::next_code(
            classification,
            existing.iter().map(|a| a.code.as_str()),
            CodeAllocation::default(),
        )?;

        Ok(NewAccount {
            code_and_name: code_and_name(&code, name),
            code,
            name: name.to_string(),
            account_group: classification.group().as_str().to_string(),
            subgroup1: classification.subgroup1().to_string(),
            subgroup2: classification.subgroup2().to_string(),
            balance: Decimal::ZERO,
        })
    }

    fn resolve(group: &str, subgroup1: &str, subgroup2: &str) -> Result<Classification, AccountError> {
        Classification::resolve(group, subgroup1, subgroup2).ok_or_else(|| {
            AccountError::InvalidClassification {
                group: group.to_string(),
                subgroup1: subgroup1.to_string(),
                subgroup2: subgroup2.to_string(),
            }
        })
    }

    /// Checks that no journal line references the account.
    pub fn ensure_deletable(account: &Account, lines: &[JournalLine]) -> Result<(), AccountError> {
        let references = lines.iter().filter(|l| l.account_id == account.id).count();
        if references > 0 {
            return Err(AccountError::AccountInUse {
                code: account.code.clone(),
                references,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::types::{ATIVO_CIRCULANTE, ATIVO_NAO_CIRCULANTE, IMOBILIZADO};
    use chrono::{TimeZone, Utc};
    use razao_shared::types::{JournalLineId, TransactionId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn account(code: &str, group: &str, subgroup1: &str, subgroup2: &str) -> Account {
        Account::new(AccountId::new(), code, format!("Conta {code}"), group, subgroup1, subgroup2, Decimal::ZERO)
    }

    #[rstest]
    #[case("Ativo", "Ativo Circulante", "", "1.0.1")]
    #[case("Ativo", "Ativo Não Circulante", "Realizável a Longo Prazo", "2.0.1")]
    #[case("Ativo", "Ativo Não Circulante", "Investimentos", "2.1.1")]
    #[case("Ativo", "Ativo Não Circulante", "Imobilizado", "2.2.1")]
    #[case("Ativo", "Ativo Não Circulante", "Intangível", "2.3.1")]
    #[case("Passivo", "Passivo Circulante", "", "3.0.1")]
    #[case("Passivo", "Passivo Não Circulante", "", "3.1.1")]
    #[case("Patrimônio Líquido", "", "", "4.0.1")]
    #[case("Despesas", "", "", "5.1.1")]
    #[case("Receitas", "", "", "6.0.1")]
    fn test_first_code_per_classification(
        #[case] group: &str,
        #[case] subgroup1: &str,
        #[case] subgroup2: &str,
        #[case] expected: &str,
    ) {
        let code = AccountService::generate_next_code(group, subgroup1, subgroup2, &[]).unwrap();
        assert_eq!(code, expected);
    }

    #[test]
    fn test_next_imobilizado_code() {
        let existing = vec![
            account("2.2.1", "Ativo", ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
            account("2.2.2", "Ativo", ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
        ];
        let code =
            AccountService::generate_next_code("Ativo", ATIVO_NAO_CIRCULANTE, IMOBILIZADO, &existing).unwrap();
        assert_eq!(code, "2.2.3");
    }

    #[test]
    fn test_despesas_double_level() {
        let existing = vec![
            account("5.1.1", "Despesas", "", ""),
            account("5.1.2", "Despesas", "", ""),
            account("5.2.1", "Despesas", "", ""),
        ];
        let code = AccountService::generate_next_code("Despesas", "", "", &existing).unwrap();
        assert_eq!(code, "5.3.1");
    }

    #[test]
    fn test_missing_subgroup1_is_invalid() {
        let result = AccountService::generate_next_code("Ativo", "", "", &[]);
        assert_eq!(
            result,
            Err(AccountError::InvalidClassification {
                group: "Ativo".into(),
                subgroup1: String::new(),
                subgroup2: String::new(),
            })
        );
    }

    #[test]
    fn test_legacy_allocation_follows_input_order() {
        let existing = vec![
            account("1.0.5", "Ativo", ATIVO_CIRCULANTE, ""),
            account("1.0.2", "Ativo", ATIVO_CIRCULANTE, ""),
        ];
        let legacy = AccountService::generate_next_code_with(
            "Ativo",
            ATIVO_CIRCULANTE,
            "",
            &existing,
            CodeAllocation::LastInOrder,
        )
        .unwrap();
        let max = AccountService::generate_next_code("Ativo", ATIVO_CIRCULANTE, "", &existing).unwrap();
        assert_eq!(legacy, "1.0.3");
        assert_eq!(max, "1.0.6");
    }

    #[test]
    fn test_new_account_payload() {
        let existing = vec![account("1.0.1", "Ativo", ATIVO_CIRCULANTE, "")];
        let new = AccountService::new_account("  Caixa Pequeno ", "Ativo", ATIVO_CIRCULANTE, IMOBILIZADO, &existing)
            .unwrap();

        assert_eq!(new.code, "1.0.2");
        assert_eq!(new.name, "Caixa Pequeno");
        assert_eq!(new.code_and_name, "1.0.2 - Caixa Pequeno");
        assert_eq!(new.subgroup1, ATIVO_CIRCULANTE);
        assert_eq!(new.subgroup2, "");
        assert_eq!(new.balance, Decimal::ZERO);

        let id = AccountId::new();
        let stored = new.into_account(id);
        assert_eq!(stored.id, id);
        assert_eq!(stored.code, "1.0.2");
    }

    #[test]
    fn test_new_account_rejects_blank_name() {
        let result = AccountService::new_account("   ", "Receitas", "", "", &[]);
        assert_eq!(result, Err(AccountError::EmptyName));
    }

    #[test]
    fn test_new_account_rejects_invalid_classification() {
        let result = AccountService::new_account("Algo", "Passivo", "Passivo Exigível", "", &[]);
        assert!(matches!(result, Err(AccountError::InvalidClassification { .. })));
    }

    #[test]
    fn test_new_account_reports_exhausted_prefix() {
        let existing = vec![account("4.0.18446744073709551615", "Patrimônio Líquido", "", "")];
        let result = AccountService::new_account("Reserva", "Patrimônio Líquido", "", "", &existing);
        assert_eq!(result, Err(AccountError::SequenceExhausted { prefix: "4.0".into() }));
    }

    #[test]
    fn test_ensure_deletable() {
        let caixa = account("1.0.1", "Ativo", ATIVO_CIRCULANTE, "");
        let bancos = account("1.0.2", "Ativo", ATIVO_CIRCULANTE, "");
        let line = JournalLine {
            id: JournalLineId::new(),
            transaction_id: TransactionId::new(),
            transaction_number: 1,
            account_id: caixa.id,
            date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            description: "Aporte".into(),
            debit: dec!(100),
            credit: Decimal::ZERO,
        };

        assert_eq!(
            AccountService::ensure_deletable(&caixa, std::slice::from_ref(&line)),
            Err(AccountError::AccountInUse {
                code: "1.0.1".into(),
                references: 1,
            })
        );
        assert!(AccountService::ensure_deletable(&bancos, &[line]).is_ok());
    }
}
