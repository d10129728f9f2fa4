//! Seed chart of accounts.
//!
//! The starter chart shipped with the application. It is fixture data for
//! seeding storage and for tests; no computation reads it implicitly.

use rust_decimal::Decimal;
use razao_shared::types::AccountId;
use uuid::Uuid;

use super::types::{
    Account, AccountGroup, ATIVO_CIRCULANTE, ATIVO_NAO_CIRCULANTE, IMOBILIZADO, INTANGIVEL,
    INVESTIMENTOS, PASSIVO_CIRCULANTE, PASSIVO_NAO_CIRCULANTE, REALIZAVEL_LONGO_PRAZO,
};

type SeedRow = (&'static str, &'static str, AccountGroup, &'static str, &'static str);

const SEED: &[SeedRow] = &[
    ("1.0.1", "Caixa", AccountGroup::Ativo, ATIVO_CIRCULANTE, ""),
    ("1.0.2", "Bancos Conta Movimento", AccountGroup::Ativo, ATIVO_CIRCULANTE, ""),
    ("1.0.3", "Clientes", AccountGroup::Ativo, ATIVO_CIRCULANTE, ""),
    ("1.0.4", "Estoques", AccountGroup::Ativo, ATIVO_CIRCULANTE, ""),
    ("1.0.5", "Despesas Antecipadas", AccountGroup::Ativo, ATIVO_CIRCULANTE, ""),
    ("2.0.1", "Clientes - Longo Prazo", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, REALIZAVEL_LONGO_PRAZO),
    ("2.0.2", "Depósitos Judiciais", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, REALIZAVEL_LONGO_PRAZO),
    ("2.1.1", "Participações Societárias", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, INVESTIMENTOS),
    ("2.1.2", "Imóveis para Renda", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, INVESTIMENTOS),
    ("2.2.1", "Máquinas e Equipamentos", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
    ("2.2.2", "Veículos", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
    ("2.2.3", "Móveis e Utensílios", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
    ("2.2.4", "Depreciação Acumulada", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, IMOBILIZADO),
    ("2.3.1", "Softwares", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, INTANGIVEL),
    ("2.3.2", "Marcas e Patentes", AccountGroup::Ativo, ATIVO_NAO_CIRCULANTE, INTANGIVEL),
    ("3.0.1", "Fornecedores", AccountGroup::Passivo, PASSIVO_CIRCULANTE, ""),
    ("3.0.2", "Salários a Pagar", AccountGroup::Passivo, PASSIVO_CIRCULANTE, ""),
    ("3.0.3", "Impostos a Recolher", AccountGroup::Passivo, PASSIVO_CIRCULANTE, ""),
    ("3.0.4", "Empréstimos Bancários CP", AccountGroup::Passivo, PASSIVO_CIRCULANTE, ""),
    ("3.0.5", "Contas a Pagar", AccountGroup::Passivo, PASSIVO_CIRCULANTE, ""),
    ("3.1.1", "Empréstimos Bancários LP", AccountGroup::Passivo, PASSIVO_NAO_CIRCULANTE, ""),
    ("3.1.2", "Provisões Trabalhistas", AccountGroup::Passivo, PASSIVO_NAO_CIRCULANTE, ""),
    ("3.1.3", "Contas a Pagar LP", AccountGroup::Passivo, PASSIVO_NAO_CIRCULANTE, ""),
    ("4.0.1", "Capital Social", AccountGroup::PatrimonioLiquido, "", ""),
    ("4.0.2", "Reservas de Lucros", AccountGroup::PatrimonioLiquido, "", ""),
    ("4.0.3", "Lucros Acumulados", AccountGroup::PatrimonioLiquido, "", ""),
    ("5.0.1", "CMV", AccountGroup::Despesas, "", ""),
    ("5.0.2", "CPV", AccountGroup::Despesas, "", ""),
    ("5.0.3", "CSP", AccountGroup::Despesas, "", ""),
    ("5.1.1", "Despesa com Salários", AccountGroup::Despesas, "", ""),
    ("5.1.2", "Despesa com Aluguel", AccountGroup::Despesas, "", ""),
    ("5.1.3", "Despesa com Energia Elétrica", AccountGroup::Despesas, "", ""),
    ("5.1.4", "Despesa Financeira", AccountGroup::Despesas, "", ""),
    ("5.1.5", "Despesa com Material de Escritório", AccountGroup::Despesas, "", ""),
    ("5.2.1", "Despesa com Depreciação", AccountGroup::Despesas, "", ""),
    ("5.3.0", "Despesa com IRPJ", AccountGroup::Despesas, "", ""),
    ("6.0.1", "Receita de Vendas", AccountGroup::Receitas, "", ""),
    ("6.0.2", "Receita de Serviços", AccountGroup::Receitas, "", ""),
    ("6.0.3", "Receita Financeira", AccountGroup::Receitas, "", ""),
    ("7.0.1", "Resultado do Exercício", AccountGroup::ApuracaoDoResultado, "", ""),
];

/// Returns the seed chart sorted by code, with zero balances.
///
/// Identifiers are deterministic (`Uuid::from_u128(position + 1)`), so two
/// calls produce equal charts.
#[must_use]
pub fn default_chart() -> Vec<Account> {
    SEED.iter()
        .zip(1u128..)
        .map(|(&(code, name, group, subgroup1, subgroup2), n)| {
            Account::new(
                AccountId::from_uuid(Uuid::from_u128(n)),
                code,
                name,
                group.as_str(),
                subgroup1,
                subgroup2,
                Decimal::ZERO,
            )
        })
        .collect()
}

/// Looks up a seed account by code.
#[must_use]
pub fn find_by_code<'a>(chart: &'a [Account], code: &str) -> Option<&'a Account> {
    chart.iter().find(|a| a.code == code)
}

/// Seed accounts belonging to `group`, in chart order.
#[must_use]
pub fn accounts_in_group(chart: &[Account], group: AccountGroup) -> Vec<&Account> {
    chart
        .iter()
        .filter(|a| a.account_group == group.as_str())
        .collect()
}
