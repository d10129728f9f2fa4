//! Plain-text rendering of the balance sheet.

use std::fmt::{self, Write};

use razao_core::reports::{BalanceSheet, BalanceSheetSection, NonCurrentAssets};
use razao_shared::types::Money;
use rust_decimal::Decimal;

const WIDTH: usize = 64;

/// Renders the statement with BRL amounts and a closing balance check.
pub fn balance_sheet(sheet: &BalanceSheet, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Balanço Patrimonial em {}", sheet.date.format("%d/%m/%Y"))?;
    writeln!(out)?;

    writeln!(out, "ATIVO")?;
    section(out, &sheet.ativo.circulante, 1)?;
    non_current(out, &sheet.ativo.nao_circulante)?;
    row(out, "Total do Ativo", sheet.ativo.total, 0)?;
    writeln!(out)?;

    writeln!(out, "PASSIVO")?;
    section(out, &sheet.passivo.circulante, 1)?;
    section(out, &sheet.passivo.nao_circulante, 1)?;
    row(out, "Total do Passivo", sheet.passivo.total, 0)?;
    writeln!(out)?;

    writeln!(out, "PATRIMÔNIO LÍQUIDO")?;
    for line in &sheet.patrimonio_liquido.accounts {
        row(out, &format!("{} - {}", line.code, line.name), line.balance, 1)?;
    }
    row(out, "Total do Patrimônio Líquido", sheet.patrimonio_liquido.total, 0)?;
    writeln!(out)?;

    row(out, "Passivo + Patrimônio Líquido", sheet.liabilities_and_equity(), 0)?;
    if sheet.is_balanced() {
        writeln!(out, "Situação: balanço fechado")
    } else {
        let difference = sheet.ativo.total - sheet.liabilities_and_equity();
        writeln!(out, "Situação: diferença de {}", Money::new(difference))
    }
}

fn non_current(out: &mut impl Write, assets: &NonCurrentAssets) -> fmt::Result {
    writeln!(out, "  {}", assets.title)?;
    for leaf in [
        &assets.realizavel_longo_prazo,
        &assets.investimentos,
        &assets.imobilizado,
        &assets.intangivel,
    ] {
        section(out, leaf, 2)?;
    }
    row(out, &format!("Total {}", assets.title), assets.total, 1)
}

fn section(out: &mut impl Write, section: &BalanceSheetSection, depth: usize) -> fmt::Result {
    writeln!(out, "{}{}", indent(depth), section.title)?;
    for line in &section.accounts {
        row(out, &format!("{} - {}", line.code, line.name), line.balance, depth + 1)?;
    }
    row(out, &format!("Total {}", section.title), section.total, depth)
}

fn row(out: &mut impl Write, label: &str, amount: Decimal, depth: usize) -> fmt::Result {
    let label = format!("{}{label}", indent(depth));
    let amount = Money::new(amount).to_string();
    let pad = WIDTH.saturating_sub(label.chars().count() + amount.chars().count()).max(1);
    writeln!(out, "{label}{}{amount}", " ".repeat(pad))
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
