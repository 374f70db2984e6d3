//! Spendwise - local personal finance tracking
//!
//! Users sign up and sign in locally, record income and expense
//! transactions, set per-category budgets and track savings goals. Every
//! user's data lives in its own partition of a key/value store.
//!
//! # Architecture
//!
//! - `config`: path resolution and `config.json` settings
//! - `error`: the `LedgerError` type
//! - `models`: users, transactions, budgets, goals and the `Money` type
//! - `crypto`: Argon2id password hashing and the legacy password decoder
//! - `storage`: key/value stores and the repositories built on them
//! - `audit`: append-only audit log
//! - `state`: the signed-in user and their resident collections
//! - `services`: sign-up/sign-in, ledger mutations, preferences
//! - `reports`: totals, category and date breakdowns, budget/goal progress
//! - `display`: currency formatting and terminal output
//! - `export`: JSON, CSV and YAML export
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::config::{AppPaths, Settings};
//! use spendwise::state::AppState;
//! use spendwise::storage::Storage;
//!
//! let paths = AppPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths, settings.audit_enabled)?;
//! let state = AppState::init(&storage);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
