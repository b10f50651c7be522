//! kakeibo-plan - 50/30/20 budget planning engine
//!
//! Turns a monthly income into recommended category budgets, measures
//! spending against targets, and summarizes ledger snapshots supplied by the
//! app backend. The engine is pure: no persistence, no networking.
//!
//! # Architecture
//!
//! - `models`: allocation table, plans, progress bands, ledger data
//! - `services`: plan calculator, progress evaluator, analytics
//! - `display`: currency formatting and terminal tables
//! - `export`: plan export to JSON, YAML and CSV
//! - `config`: settings and config paths
//! - `cli`: command handlers for the `kakeibo` binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use kakeibo_plan::models::{Money, ProgressStatus};
//! use kakeibo_plan::services::{calculate_plan, calculate_progress, progress_status};
//! use kakeibo_plan::display::format_currency;
//!
//! let plan = calculate_plan(Money::from_units(300_000));
//! assert_eq!(plan.fixed_total.units(), 150_000);
//! assert_eq!(format_currency(plan.savings_target), "￥60,000");
//!
//! let pct = calculate_progress(Money::from_units(70), Money::from_units(100));
//! assert_eq!(progress_status(pct), ProgressStatus::Warning);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{PlannerError, PlannerResult};
