//! Balance sheet data types.
//!
//! Field names serialise in camelCase and form the contract consumed by
//! renderers (`ativo.naoCirculante.realizavelLongoPrazo`, ...).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::types::{
    ATIVO_CIRCULANTE, ATIVO_NAO_CIRCULANTE, IMOBILIZADO, INTANGIVEL, INVESTIMENTOS,
    PASSIVO_CIRCULANTE, PASSIVO_NAO_CIRCULANTE, REALIZAVEL_LONGO_PRAZO,
};
use crate::accounts::Account;

/// An account as shown on the statement, classification fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetLine {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Natural-side balance.
    pub balance: Decimal,
}

impl From<&Account> for BalanceSheetLine {
    fn from(account: &Account) -> Self {
        Self {
            code: account.code.clone(),
            name: account.name.clone(),
            balance: account.balance,
        }
    }
}

/// A leaf section of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Display title.
    pub title: String,
    /// Accounts in input order.
    pub accounts: Vec<BalanceSheetLine>,
    /// Sum of the accounts' balances.
    pub total: Decimal,
}

impl BalanceSheetSection {
    /// Creates an empty section.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            accounts: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub(crate) fn push(&mut self, line: BalanceSheetLine) {
        self.total += line.balance;
        self.accounts.push(line);
    }
}

/// Ativo Não Circulante and its four subgroups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCurrentAssets {
    /// Display title.
    pub title: String,
    /// Realizável a Longo Prazo.
    pub realizavel_longo_prazo: BalanceSheetSection,
    /// Investimentos.
    pub investimentos: BalanceSheetSection,
    /// Imobilizado.
    pub imobilizado: BalanceSheetSection,
    /// Intangível.
    pub intangivel: BalanceSheetSection,
    /// Sum of the four subgroups.
    pub total: Decimal,
}

impl Default for NonCurrentAssets {
    fn default() -> Self {
        Self {
            title: ATIVO_NAO_CIRCULANTE.to_string(),
            realizavel_longo_prazo: BalanceSheetSection::new(REALIZAVEL_LONGO_PRAZO),
            investimentos: BalanceSheetSection::new(INVESTIMENTOS),
            imobilizado: BalanceSheetSection::new(IMOBILIZADO),
            intangivel: BalanceSheetSection::new(INTANGIVEL),
            total: Decimal::ZERO,
        }
    }
}

/// Ativo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsSection {
    /// Ativo Circulante.
    pub circulante: BalanceSheetSection,
    /// Ativo Não Circulante.
    pub nao_circulante: NonCurrentAssets,
    /// Circulante plus não circulante.
    pub total: Decimal,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            circulante: BalanceSheetSection::new(ATIVO_CIRCULANTE),
            nao_circulante: NonCurrentAssets::default(),
            total: Decimal::ZERO,
        }
    }
}

/// Passivo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilitiesSection {
    /// Passivo Circulante.
    pub circulante: BalanceSheetSection,
    /// Passivo Não Circulante.
    pub nao_circulante: BalanceSheetSection,
    /// Circulante plus não circulante.
    pub total: Decimal,
}

impl Default for LiabilitiesSection {
    fn default() -> Self {
        Self {
            circulante: BalanceSheetSection::new(PASSIVO_CIRCULANTE),
            nao_circulante: BalanceSheetSection::new(PASSIVO_NAO_CIRCULANTE),
            total: Decimal::ZERO,
        }
    }
}

/// Balance sheet ("Balanço Patrimonial") as of a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Reference date, informational only.
    pub date: NaiveDate,
    /// Assets.
    pub ativo: AssetsSection,
    /// Liabilities.
    pub passivo: LiabilitiesSection,
    /// Equity, not split further.
    pub patrimonio_liquido: BalanceSheetSection,
}

impl BalanceSheet {
    /// Passivo total plus Patrimônio Líquido total.
    #[must_use]
    pub fn liabilities_and_equity(&self) -> Decimal {
        self.passivo.total + self.patrimonio_liquido.total
    }

    /// Whether Ativo equals Passivo plus Patrimônio Líquido.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.ativo.total == self.liabilities_and_equity()
    }
}
