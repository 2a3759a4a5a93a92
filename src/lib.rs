//! Flux Finance is a web app for tracking personal income and expenses.
//!
//! This library is the app's financial analytics core: pure, deterministic
//! functions that derive dashboard metrics, chart series, rule-based insights
//! and a financial health score from a raw transaction list, a category list
//! and a caller-supplied reference date.
//!
//! The surrounding application (authentication, the real-time data layer,
//! chart rendering, CSV export) owns all I/O and asynchrony. Every function
//! here is a side-effect-free transform of its inputs: it never mutates the
//! collections it is given and holds no state across calls, so it is safe to
//! invoke repeatedly and concurrently.
//!
//! Malformed-but-well-typed data degrades gracefully rather than failing:
//! transactions with unparseable dates are excluded from date-bucketed
//! aggregates (but still count towards the all-time balance), dangling
//! category references resolve to a fallback label, and an unparseable
//! reference date (`None`) yields the documented zero/empty results.

#![warn(missing_docs)]

mod category;
mod charts;
mod currency;
mod dates;
mod health;
mod insights;
mod metrics;
mod transaction;

pub use category::Category;
pub use charts::{
    CategorySlice, ExpenseBreakdownPoint, IncomeSource, MonthlyPoint, category_distribution_data,
    expense_breakdown_data, income_sources_data, monthly_chart_data, palette_color,
};
pub use currency::format_currency;
pub use dates::RawDate;
pub use health::{FinancialHealth, financial_health_score};
pub use insights::{RuleBasedInsights, generate_rule_based_insights};
pub use metrics::{FinancialMetrics, calculate_metrics};
pub use transaction::{ExpenseType, Transaction, TransactionKind};

/// The errors that may occur in the analytics module.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A raw date could not be normalized to a calendar date.
    ///
    /// The data layer stores dates as ISO-8601 strings, timestamp objects or
    /// plain dates; anything that does not resolve to a real calendar date
    /// ends up here. Date-bucketed aggregates treat this as "exclude from
    /// the period", never as a hard failure.
    #[error("could not parse transaction date \"{0}\"")]
    UnparseableDate(String),
}
