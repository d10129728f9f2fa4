//! Core business logic for Razão.
//!
//! This crate contains pure business logic with no storage or web dependencies.
//! It receives account and journal snapshots and never mutates them in place.
//!
//! # Modules
//!
//! - `accounts` - Chart of accounts, classification and code generation
//! - `ledger` - Journal lines, natural-side balances and draft validation
//! - `reports` - Balance sheet aggregation

pub mod accounts;
pub mod ledger;
pub mod reports;
