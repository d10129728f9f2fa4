//! Report generation service.

use chrono::{NaiveDate, Utc};
use tracing::trace;

use super::types::{AssetsSection, BalanceSheet, BalanceSheetLine, BalanceSheetSection, LiabilitiesSection};
use crate::accounts::{Account, Classification};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a balance sheet from accounts whose balances are already
    /// computed for the reference date.
    ///
    /// `reference_date` defaults to today and is only carried as a label.
    /// Accounts outside the balance-sheet classifications (Despesas,
    /// Receitas, Apuração do Resultado, unknown groups) are left out.
    /// No balancing check is made here; see [`BalanceSheet::is_balanced`].
    #[must_use]
    pub fn calculate_balance_sheet(accounts: &[Account], reference_date: Option<NaiveDate>) -> BalanceSheet {
        let mut ativo = AssetsSection::default();
        let mut passivo = LiabilitiesSection::default();
        let mut patrimonio_liquido = BalanceSheetSection::new(Classification::PatrimonioLiquido.title());

        for account in accounts {
            let section = match account.classification() {
                Some(Classification::AtivoCirculante) => &mut ativo.circulante,
                Some(Classification::RealizavelLongoPrazo) => &mut ativo.nao_circulante.realizavel_longo_prazo,
                Some(Classification::Investimentos) => &mut ativo.nao_circulante.investimentos,
                Some(Classification::Imobilizado) => &mut ativo.nao_circulante.imobilizado,
                Some(Classification::Intangivel) => &mut ativo.nao_circulante.intangivel,
                Some(Classification::PassivoCirculante) => &mut passivo.circulante,
                Some(Classification::PassivoNaoCirculante) => &mut passivo.nao_circulante,
                Some(Classification::PatrimonioLiquido) => &mut patrimonio_liquido,
                Some(Classification::Despesas | Classification::Receitas) | None => {
                    trace!(code = %account.code, group = %account.account_group, "not a balance sheet account");
                    continue;
                }
            };
            section.push(BalanceSheetLine::from(account));
        }

        let nao_circulante = &mut ativo.nao_circulante;
        nao_circulante.total = nao_circulante.realizavel_longo_prazo.total
            + nao_circulante.investimentos.total
            + nao_circulante.imobilizado.total
            + nao_circulante.intangivel.total;
        ativo.total = ativo.circulante.total + ativo.nao_circulante.total;
        passivo.total = passivo.circulante.total + passivo.nao_circulante.total;

        BalanceSheet {
            date: reference_date.unwrap_or_else(|| Utc::now().date_naive()),
            ativo,
            passivo,
            patrimonio_liquido,
        }
    }
}
