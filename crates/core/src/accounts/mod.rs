//! Chart of accounts.
//!
//! This module provides pure business logic for account maintenance:
//! - Account model and the storage row adapter
//! - The closed classification table (group, subgroups, code prefix)
//! - Hierarchical code generation
//! - Creation payloads and the deletion guard
//! - The seed chart of accounts

pub mod chart;
pub mod classification;
pub mod code;
pub mod error;
pub mod service;
pub mod types;


pub use classification::Classification;
pub use code::CodeAllocation;
pub use error::AccountError;
pub use service::{AccountService, NewAccount};
pub use types::{normalize_accounts, Account, AccountGroup, RawAccount};
