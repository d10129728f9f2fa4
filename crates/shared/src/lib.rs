//! Shared types, errors, and configuration for Razao.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and pt-BR formatting
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig, OutputFormat, ReportConfig};
pub use error::AppError;
