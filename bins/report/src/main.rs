//! Razao balance sheet report.
//!
//! Reads exported account rows (and optionally journal lines), builds the
//! balance sheet and prints it as text or JSON.

mod render;

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use razao_core::accounts::{normalize_accounts, Account, RawAccount};
use razao_core::ledger::{compute_balances, JournalLine, Period};
use razao_core::reports::ReportService;
use razao_shared::{AppConfig, LogConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log);

    let report = &config.report;
    let rows: Vec<RawAccount> = read_json(&report.accounts_path)?;
    let mut accounts = normalize_accounts(rows);
    info!(count = accounts.len(), path = %report.accounts_path.display(), "Loaded accounts");

    if let Some(journal_path) = &report.journal_path {
        let lines: Vec<JournalLine> = read_json(journal_path)?;
        let period = Period {
            start: report.period_start,
            end: report.as_of,
        };
        info!(count = lines.len(), ?period, "Recomputing balances from journal");
        warn_unknown_accounts(&accounts, &lines);
        accounts = compute_balances(&accounts, &lines, period);
    } else if report.period_start.is_some() {
        warn!("period_start is ignored without a journal_path");
    }

    let sheet = ReportService::calculate_balance_sheet(&accounts, report.as_of);
    info!(
        date = %sheet.date,
        ativo = %sheet.ativo.total,
        passivo = %sheet.passivo.total,
        patrimonio_liquido = %sheet.patrimonio_liquido.total,
        balanced = sheet.is_balanced(),
        "Balance sheet computed"
    );

    let output = match report.format {
        OutputFormat::Json => serde_json::to_string_pretty(&sheet)?,
        OutputFormat::Text => {
            let mut out = String::new();
            render::balance_sheet(&sheet, &mut out)?;
            out
        }
    };
    println!("{output}");

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.filter.as_str().into());

    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!log.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "Read input file");
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn warn_unknown_accounts(accounts: &[Account], lines: &[JournalLine]) {
    let orphans = lines
        .iter()
        .filter(|line| accounts.iter().all(|a| a.id != line.account_id))
        .count();
    if orphans > 0 {
        warn!(orphans, "Journal lines reference accounts missing from the chart");
    }
}
