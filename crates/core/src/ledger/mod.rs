//! Double-entry bookkeeping logic.
//!
//! - Journal lines (debits and credits)
//! - Natural-side balance calculations over a period
//! - Account ledger and chronological journal listings
//! - Draft transaction validation

pub mod balance;
pub mod entry;
pub mod journal;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{account_ledger, compute_balances, LedgerRow, NaturalSide, Period};
pub use entry::{EntryType, JournalLine};
pub use journal::{journal, JournalRow};
pub use validation::{validate_draft, DraftLine, DraftTotals, JournalDraft, LedgerValidationError};
