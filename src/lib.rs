//! MoneyCount - household budget tracking from the terminal
//!
//! This library provides the core functionality of the MoneyCount budget
//! tracker. A household keeps one record per calendar month holding its
//! income and expenses. Recurring expenses are copied into each new month
//! unpaid and only count toward a month's total once marked paid; the
//! balances of all months add up to accumulated savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (months, money, expenses, records, ledger)
//! - `services`: Month navigation, propagation and cross-month figures
//! - `storage`: JSON file storage and the per-command ledger session
//! - `backup`: Rolling backups of the ledger file
//! - `export`: CSV, JSON and YAML exports
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use moneycount::models::{Ledger, Money, Month};
//! use moneycount::services::BudgetService;
//!
//! let mut ledger = Ledger::new();
//! let mut service = BudgetService::open(&mut ledger, Month::new(2025, 1).unwrap());
//! service.set_income(Money::from_units(2000)).unwrap();
//! service.add_expense("Rent", Money::from_units(700), false).unwrap();
//! assert_eq!(service.balance().unwrap(), Money::from_units(1300));
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MoneyCountError, MoneyCountResult};
