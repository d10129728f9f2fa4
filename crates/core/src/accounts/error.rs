//! Account error types.

use razao_shared::AppError;
use thiserror::Error;

/// Errors that can occur while creating or removing accounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The `(group, subgroup1, subgroup2)` triple is not in the classification table.
    #[error("Invalid classification: group '{group}', subgroup1 '{subgroup1}', subgroup2 '{subgroup2}'")]
    InvalidClassification {
        /// Group label as supplied.
        group: String,
        /// First-level subgroup as supplied.
        subgroup1: String,
        /// Second-level subgroup as supplied.
        subgroup2: String,
    },

    /// Account name is empty or only whitespace.
    #[error("Account name cannot be empty")]
    EmptyName,

    /// Account is referenced by journal lines and cannot be removed.
    #[error("Account {code} has {references} journal lines and cannot be removed")]
    AccountInUse {
        /// Code of the account.
        code: String,
        /// Number of referencing journal lines.
        references: usize,
    },

    /// The number to increment under a prefix has no successor.
    #[error("No codes left under prefix {prefix}")]
    SequenceExhausted {
        /// Classification prefix.
        prefix: String,
    },
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidClassification { .. } | AccountError::EmptyName => {
                Self::Validation(err.to_string())
            }
            AccountError::AccountInUse { .. } => Self::BusinessRule(err.to_string()),
            AccountError::SequenceExhausted { .. } => Self::Conflict(err.to_string()),
        }
    }
}
