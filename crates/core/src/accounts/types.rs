//! Chart of accounts domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use razao_shared::types::AccountId;
use uuid::Uuid;

use super::classification::Classification;
use crate::ledger::NaturalSide;

/// Label of the `Ativo Circulante` first-level subgroup.
pub const ATIVO_CIRCULANTE: &str = "Ativo Circulante";
/// Label of the `Ativo Não Circulante` first-level subgroup.
pub const ATIVO_NAO_CIRCULANTE: &str = "Ativo Não Circulante";
/// Label of the `Passivo Circulante` first-level subgroup.
pub const PASSIVO_CIRCULANTE: &str = "Passivo Circulante";
/// Label of the `Passivo Não Circulante` first-level subgroup.
pub const PASSIVO_NAO_CIRCULANTE: &str = "Passivo Não Circulante";
/// Label of the `Realizável a Longo Prazo` second-level subgroup.
pub const REALIZAVEL_LONGO_PRAZO: &str = "Realizável a Longo Prazo";
/// Label of the `Investimentos` second-level subgroup.
pub const INVESTIMENTOS: &str = "Investimentos";
/// Label of the `Imobilizado` second-level subgroup.
pub const IMOBILIZADO: &str = "Imobilizado";
/// Label of the `Intangível` second-level subgroup.
pub const INTANGIVEL: &str = "Intangível";

/// Top-level account group.
///
/// Accounts store the group as its label so rows with an unrecognised group
/// survive the storage adapter; this enum is the closed set the core knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountGroup {
    /// Assets.
    #[serde(rename = "Ativo")]
    Ativo,
    /// Liabilities.
    #[serde(rename = "Passivo")]
    Passivo,
    /// Equity.
    #[serde(rename = "Patrimônio Líquido")]
    PatrimonioLiquido,
    /// Revenue.
    #[serde(rename = "Receitas")]
    Receitas,
    /// Expenses.
    #[serde(rename = "Despesas")]
    Despesas,
    /// Legacy closing-entry group, only present in seed data.
    #[serde(rename = "Apuração do Resultado")]
    ApuracaoDoResultado,
}

impl AccountGroup {
    /// Returns the Portuguese label stored on account rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Passivo => "Passivo",
            Self::PatrimonioLiquido => "Patrimônio Líquido",
            Self::Receitas => "Receitas",
            Self::Despesas => "Despesas",
            Self::ApuracaoDoResultado => "Apuração do Resultado",
        }
    }

    /// Returns the side on which accounts of this group grow.
    ///
    /// `Apuração do Resultado` has none; its balance is never derived.
    #[must_use]
    pub const fn natural_side(self) -> Option<NaturalSide> {
        match self {
            Self::Ativo | Self::Despesas => Some(NaturalSide::Debit),
            Self::Passivo | Self::PatrimonioLiquido | Self::Receitas => Some(NaturalSide::Credit),
            Self::ApuracaoDoResultado => None,
        }
    }

    /// Returns the first-level subgroups offered for this group.
    #[must_use]
    pub const fn subgroup1_options(self) -> &'static [&'static str] {
        match self {
            Self::Ativo => &[ATIVO_CIRCULANTE, ATIVO_NAO_CIRCULANTE],
            Self::Passivo => &[PASSIVO_CIRCULANTE, PASSIVO_NAO_CIRCULANTE],
            _ => &[],
        }
    }
}

impl std::fmt::Display for AccountGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ativo" => Ok(Self::Ativo),
            "Passivo" => Ok(Self::Passivo),
            "Patrimônio Líquido" => Ok(Self::PatrimonioLiquido),
            "Receitas" => Ok(Self::Receitas),
            "Despesas" => Ok(Self::Despesas),
            "Apuração do Resultado" => Ok(Self::ApuracaoDoResultado),
            _ => Err(format!("Unknown account group: {s}")),
        }
    }
}

/// Second-level subgroups offered under `Ativo Não Circulante`.
#[must_use]
pub fn subgroup2_options(subgroup1: &str) -> &'static [&'static str] {
    if subgroup1 == ATIVO_NAO_CIRCULANTE {
        &[REALIZAVEL_LONGO_PRAZO, INVESTIMENTOS, IMOBILIZADO, INTANGIVEL]
    } else {
        &[]
    }
}

/// An account of the chart of accounts, as snapshotted from storage.
///
/// The core never mutates an `Account` in place; derived balances produce new
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable identifier.
    pub id: AccountId,
    /// Hierarchical code, e.g. `2.2.3`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Group label (see [`AccountGroup`]).
    pub account_group: String,
    /// First-level subgroup label, empty when the group has no split.
    pub subgroup1: String,
    /// Second-level subgroup label, only set under `Ativo Não Circulante`.
    pub subgroup2: String,
    /// `"<code> - <name>"`.
    pub code_and_name: String,
    /// Balance on the account's natural side.
    pub balance: Decimal,
}

impl Account {
    /// Creates an account, deriving `code_and_name`.
    #[must_use]
    pub fn new(
        id: AccountId,
        code: impl Into<String>,
        name: impl Into<String>,
        account_group: impl Into<String>,
        subgroup1: impl Into<String>,
        subgroup2: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        let code = code.into();
        let name = name.into();
        Self {
            id,
            code_and_name: code_and_name(&code, &name),
            code,
            name,
            account_group: account_group.into(),
            subgroup1: subgroup1.into(),
            subgroup2: subgroup2.into(),
            balance,
        }
    }

    /// Parses the group label, `None` for labels outside [`AccountGroup`].
    #[must_use]
    pub fn group(&self) -> Option<AccountGroup> {
        self.account_group.parse().ok()
    }

    /// Resolves the account's classification bucket.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        Classification::resolve(&self.account_group, &self.subgroup1, &self.subgroup2)
    }

    /// Returns a copy carrying a different balance.
    #[must_use]
    pub fn with_balance(&self, balance: Decimal) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}

/// Builds the `"<code> - <name>"` display label.
#[must_use]
pub fn code_and_name(code: &str, name: &str) -> String {
    format!("{code} - {name}")
}

/// An account row exactly as exported by the storage layer.
///
/// Column names are snake_case and the subgroup columns are nullable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAccount {
    /// Row identifier.
    pub id: Uuid,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Group label.
    pub account_group: String,
    /// First-level subgroup, `NULL` when absent.
    #[serde(default)]
    pub subgroup1: Option<String>,
    /// Second-level subgroup, `NULL` when absent.
    #[serde(default)]
    pub subgroup2: Option<String>,
    /// Stored balance, `NULL` for freshly created rows.
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl From<RawAccount> for Account {
    fn from(raw: RawAccount) -> Self {
        Self::new(
            AccountId::from_uuid(raw.id),
            raw.code,
            raw.name,
            raw.account_group,
            raw.subgroup1.unwrap_or_default(),
            raw.subgroup2.unwrap_or_default(),
            raw.balance.unwrap_or_default(),
        )
    }
}

/// Converts exported rows into accounts, preserving order.
#[must_use]
pub fn normalize_accounts(rows: Vec<RawAccount>) -> Vec<Account> {
    rows.into_iter().map(Account::from).collect()
}
