//! Financial report generation.
//!
//! Pure aggregation of account balances into the balance sheet
//! ("Balanço Patrimonial").

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
