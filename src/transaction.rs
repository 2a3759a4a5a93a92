//! The transaction model shared by all analytics functions.
//!
//! Transactions are created, updated and deleted by the external data layer;
//! this crate only ever reads them.

use serde::{Deserialize, Serialize};

use crate::dates::RawDate;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Amounts are stored as non-negative values; the sign is derived from
/// [Transaction::kind], never stored. Use [Transaction::signed_amount] when a
/// signed value is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction document.
    pub id: String,

    /// When the transaction happened, in whichever of the three raw shapes
    /// the data layer stored it. See [RawDate].
    pub date: RawDate,

    /// A text description of what the transaction was for.
    pub description: String,

    /// The amount of money spent or earned. Always non-negative.
    pub amount: f64,

    /// Whether money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// The ID of the category this transaction belongs to.
    ///
    /// May refer to a category that has since been deleted; lookups fall
    /// back to a placeholder label in that case.
    pub category_id: String,

    /// Whether an expense is a recurring obligation or discretionary
    /// spending. Only meaningful when [Transaction::kind] is
    /// [TransactionKind::Expense].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<ExpenseType>,
}

impl Transaction {
    /// The amount signed by kind: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money flowing in, e.g. wages.
    Income,
    /// Money flowing out, e.g. rent or groceries.
    Expense,
}

/// A user-assigned tag distinguishing recurring obligatory costs from
/// discretionary spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    /// A recurring obligation, e.g. rent or an insurance premium.
    Fixed,
    /// Discretionary spending, e.g. eating out.
    Variable,
}
