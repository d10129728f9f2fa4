//! Journal line domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use razao_shared::types::{AccountId, JournalLineId, TransactionId};

/// Type of journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit line (increases Ativo/Despesas, decreases Passivo/Patrimônio Líquido/Receitas).
    Debit,
    /// Credit line (decreases Ativo/Despesas, increases Passivo/Patrimônio Líquido/Receitas).
    Credit,
}

/// A single debit or credit line of a journal transaction.
///
/// Storage keeps both columns; exactly one of them is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier for this line.
    pub id: JournalLineId,
    /// The transaction this line belongs to.
    pub transaction_id: TransactionId,
    /// Sequential, human-facing transaction number.
    pub transaction_number: u64,
    /// The account affected by this line.
    pub account_id: AccountId,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
    /// Transaction description, repeated on every line.
    pub description: String,
    /// Debit amount (zero on credit lines).
    #[serde(alias = "debito", default)]
    pub debit: Decimal,
    /// Credit amount (zero on debit lines).
    #[serde(alias = "credito", default)]
    pub credit: Decimal,
}

impl JournalLine {
    /// Returns which side the line posts to.
    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        if self.debit.is_zero() && !self.credit.is_zero() {
            EntryType::Credit
        } else {
            EntryType::Debit
        }
    }

    /// Returns the posted amount, regardless of side.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self.entry_type() {
            EntryType::Debit => self.debit,
            EntryType::Credit => self.credit,
        }
    }
}
