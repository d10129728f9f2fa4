//! Chronological journal ("livro diário").

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalLine;
use crate::accounts::Account;

/// One line of the journal listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRow {
    /// Line date.
    pub date: DateTime<Utc>,
    /// Transaction number.
    pub transaction_number: u64,
    /// `"<code> - <name>"` of the account, or its raw id when unknown.
    pub account_code_and_name: String,
    /// Transaction description.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

/// Lists every line ordered by date, then transaction number.
///
/// Within a transaction, lines keep their input order.
#[must_use]
pub fn journal(accounts: &[Account], lines: &[JournalLine]) -> Vec<JournalRow> {
    let labels: HashMap<_, _> = accounts
        .iter()
        .map(|a| (a.id, a.code_and_name.as_str()))
        .collect();

    let mut ordered: Vec<&JournalLine> = lines.iter().collect();
    ordered.sort_by_key(|l| (l.date, l.transaction_number));

    ordered
        .into_iter()
        .map(|line| JournalRow {
            date: line.date,
            transaction_number: line.transaction_number,
            account_code_and_name: labels
                .get(&line.account_id)
                .map_or_else(|| line.account_id.to_string(), |label| (*label).to_string()),
            description: line.description.clone(),
            debit: line.debit,
            credit: line.credit,
        })
        .collect()
}
