//! The closed classification table shared by code generation and the balance sheet.

use serde::{Deserialize, Serialize};

use super::types::{
    AccountGroup, ATIVO_CIRCULANTE, ATIVO_NAO_CIRCULANTE, IMOBILIZADO, INTANGIVEL, INVESTIMENTOS,
    PASSIVO_CIRCULANTE, PASSIVO_NAO_CIRCULANTE, REALIZAVEL_LONGO_PRAZO,
};

/// A leaf of the chart of accounts classification.
///
/// | classification | prefix |
/// |---|---|
/// | Ativo / Ativo Circulante | `1.0` |
/// | Ativo / Ativo Não Circulante / Realizável a Longo Prazo | `2.0` |
/// | Ativo / Ativo Não Circulante / Investimentos | `2.1` |
/// | Ativo / Ativo Não Circulante / Imobilizado | `2.2` |
/// | Ativo / Ativo Não Circulante / Intangível | `2.3` |
/// | Passivo / Passivo Circulante | `3.0` |
/// | Passivo / Passivo Não Circulante | `3.1` |
/// | Patrimônio Líquido | `4.0` |
/// | Despesas | `5` |
/// | Receitas | `6.0` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Current assets.
    AtivoCirculante,
    /// Long-term receivables.
    RealizavelLongoPrazo,
    /// Long-term investments.
    Investimentos,
    /// Property, plant and equipment.
    Imobilizado,
    /// Intangible assets.
    Intangivel,
    /// Current liabilities.
    PassivoCirculante,
    /// Non-current liabilities.
    PassivoNaoCirculante,
    /// Equity, no further split.
    PatrimonioLiquido,
    /// Expenses.
    Despesas,
    /// Revenue.
    Receitas,
}

impl Classification {
    /// Every classification, in code order.
    pub const ALL: [Self; 10] = [
        Self::AtivoCirculante,
        Self::RealizavelLongoPrazo,
        Self::Investimentos,
        Self::Imobilizado,
        Self::Intangivel,
        Self::PassivoCirculante,
        Self::PassivoNaoCirculante,
        Self::PatrimonioLiquido,
        Self::Despesas,
        Self::Receitas,
    ];

    /// Resolves a `(group, subgroup1, subgroup2)` triple by exact label match.
    ///
    /// Fields a row does not split on are ignored: Circulante rows ignore
    /// `subgroup2`, and the unsplit groups ignore both subgroups.
    #[must_use]
    pub fn resolve(group: &str, subgroup1: &str, subgroup2: &str) -> Option<Self> {
        let group: AccountGroup = group.parse().ok()?;
        match group {
            AccountGroup::Ativo => match subgroup1 {
                ATIVO_CIRCULANTE => Some(Self::AtivoCirculante),
                ATIVO_NAO_CIRCULANTE => match subgroup2 {
                    REALIZAVEL_LONGO_PRAZO => Some(Self::RealizavelLongoPrazo),
                    INVESTIMENTOS => Some(Self::Investimentos),
                    IMOBILIZADO => Some(Self::Imobilizado),
                    INTANGIVEL => Some(Self::Intangivel),
                    _ => None,
                },
                _ => None,
            },
            AccountGroup::Passivo => match subgroup1 {
                PASSIVO_CIRCULANTE => Some(Self::PassivoCirculante),
                PASSIVO_NAO_CIRCULANTE => Some(Self::PassivoNaoCirculante),
                _ => None,
            },
            AccountGroup::PatrimonioLiquido => Some(Self::PatrimonioLiquido),
            AccountGroup::Despesas => Some(Self::Despesas),
            AccountGroup::Receitas => Some(Self::Receitas),
            AccountGroup::ApuracaoDoResultado => None,
        }
    }

    /// Returns the code prefix of this classification.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::AtivoCirculante => "1.0",
            Self::RealizavelLongoPrazo => "2.0",
            Self::Investimentos => "2.1",
            Self::Imobilizado => "2.2",
            Self::Intangivel => "2.3",
            Self::PassivoCirculante => "3.0",
            Self::PassivoNaoCirculante => "3.1",
            Self::PatrimonioLiquido => "4.0",
            Self::Despesas => "5",
            Self::Receitas => "6.0",
        }
    }

    /// Returns the top-level group.
    #[must_use]
    pub const fn group(self) -> AccountGroup {
        match self {
            Self::AtivoCirculante
            | Self::RealizavelLongoPrazo
            | Self::Investimentos
            | Self::Imobilizado
            | Self::Intangivel => AccountGroup::Ativo,
            Self::PassivoCirculante | Self::PassivoNaoCirculante => AccountGroup::Passivo,
            Self::PatrimonioLiquido => AccountGroup::PatrimonioLiquido,
            Self::Despesas => AccountGroup::Despesas,
            Self::Receitas => AccountGroup::Receitas,
        }
    }

    /// Canonical `subgroup1` label, empty for unsplit groups.
    #[must_use]
    pub const fn subgroup1(self) -> &'static str {
        match self {
            Self::AtivoCirculante => ATIVO_CIRCULANTE,
            Self::RealizavelLongoPrazo | Self::Investimentos | Self::Imobilizado | Self::Intangivel => {
                ATIVO_NAO_CIRCULANTE
            }
            Self::PassivoCirculante => PASSIVO_CIRCULANTE,
            Self::PassivoNaoCirculante => PASSIVO_NAO_CIRCULANTE,
            Self::PatrimonioLiquido | Self::Despesas | Self::Receitas => "",
        }
    }

    /// Canonical `subgroup2` label, empty outside `Ativo Não Circulante`.
    #[must_use]
    pub const fn subgroup2(self) -> &'static str {
        match self {
            Self::RealizavelLongoPrazo => REALIZAVEL_LONGO_PRAZO,
            Self::Investimentos => INVESTIMENTOS,
            Self::Imobilizado => IMOBILIZADO,
            Self::Intangivel => INTANGIVEL,
            _ => "",
        }
    }

    /// Section heading used on the balance sheet.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AtivoCirculante => ATIVO_CIRCULANTE,
            Self::RealizavelLongoPrazo => REALIZAVEL_LONGO_PRAZO,
            Self::Investimentos => INVESTIMENTOS,
            Self::Imobilizado => IMOBILIZADO,
            Self::Intangivel => INTANGIVEL,
            Self::PassivoCirculante => PASSIVO_CIRCULANTE,
            Self::PassivoNaoCirculante => PASSIVO_NAO_CIRCULANTE,
            Self::PatrimonioLiquido => "Patrimônio Líquido",
            Self::Despesas => "Despesas",
            Self::Receitas => "Receitas",
        }
    }

    /// Whether accounts of this classification appear on the balance sheet.
    #[must_use]
    pub const fn is_balance_sheet(self) -> bool {
        !matches!(self, Self::Despesas | Self::Receitas)
    }
}
