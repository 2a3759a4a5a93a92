//! Account-wide and month-over-month totals for the dashboard summary cards.

use serde::Serialize;
use time::Date;

use crate::{
    dates::{month_window, months_back},
    transaction::{Transaction, TransactionKind},
};

/// Aggregate totals derived from the full transaction list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FinancialMetrics {
    /// All-time balance: the sum of income amounts minus the sum of expense
    /// amounts over every transaction, regardless of date.
    pub balance: f64,
    /// Income recorded in the month containing the reference date.
    pub monthly_income: f64,
    /// Expenses recorded in the month containing the reference date.
    pub monthly_expenses: f64,
    /// Income recorded in the month immediately before the reference month.
    pub previous_monthly_income: f64,
    /// Expenses recorded in the month immediately before the reference month.
    pub previous_monthly_expenses: f64,
}

/// Computes the balance and current/previous month income and expense totals.
///
/// Transactions whose date cannot be normalized are excluded from the monthly
/// windows but still contribute to `balance`. A `None` reference date leaves
/// every window-dependent field at zero; `balance` is computed regardless.
///
/// # Arguments
/// * `transactions` - The full transaction list
/// * `reference` - The date anchoring the current-month window, or `None`
///   when the caller's reference date failed to normalize
pub fn calculate_metrics(transactions: &[Transaction], reference: Option<Date>) -> FinancialMetrics {
    let balance = transactions
        .iter()
        .map(Transaction::signed_amount)
        .sum();

    let mut metrics = FinancialMetrics {
        balance,
        ..Default::default()
    };

    let Some(reference) = reference else {
        return metrics;
    };

    let current_window = month_window(reference);
    let previous_window = month_window(months_back(reference, 1));

    for transaction in transactions {
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };

        if current_window.contains(&date) {
            match transaction.kind {
                TransactionKind::Income => metrics.monthly_income += transaction.amount,
                TransactionKind::Expense => metrics.monthly_expenses += transaction.amount,
            }
        } else if previous_window.contains(&date) {
            match transaction.kind {
                TransactionKind::Income => metrics.previous_monthly_income += transaction.amount,
                TransactionKind::Expense => {
                    metrics.previous_monthly_expenses += transaction.amount
                }
            }
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use super::calculate_metrics;
    use crate::{
        dates::RawDate,
        transaction::{Transaction, TransactionKind},
    };

    fn create_test_transaction(amount: f64, kind: TransactionKind, date: Date) -> Transaction {
        Transaction {
            id: "txn".to_owned(),
            date: RawDate::Date(date),
            description: "test".to_owned(),
            amount,
            kind,
            category_id: "cat".to_owned(),
            expense_type: None,
        }
    }

    #[test]
    fn empty_list_returns_zeroed_metrics() {
        let metrics = calculate_metrics(&[], Some(date!(2024 - 07 - 15)));

        assert_eq!(metrics.balance, 0.0);
        assert_eq!(metrics.monthly_income, 0.0);
        assert_eq!(metrics.monthly_expenses, 0.0);
        assert_eq!(metrics.previous_monthly_income, 0.0);
        assert_eq!(metrics.previous_monthly_expenses, 0.0);
    }

    #[test]
    fn sums_current_month_income_and_expenses() {
        let transactions = vec![
            create_test_transaction(5000.0, TransactionKind::Income, date!(2024 - 07 - 01)),
            create_test_transaction(1200.0, TransactionKind::Expense, date!(2024 - 07 - 22)),
        ];

        let metrics = calculate_metrics(&transactions, Some(date!(2024 - 07 - 15)));

        assert_eq!(metrics.monthly_income, 5000.0);
        assert_eq!(metrics.monthly_expenses, 1200.0);
        assert_eq!(metrics.balance, 3800.0);
    }

    #[test]
    fn balance_ignores_dates() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, date!(2020 - 01 - 01)),
            create_test_transaction(40.0, TransactionKind::Expense, date!(2022 - 06 - 15)),
            create_test_transaction(10.0, TransactionKind::Expense, date!(2024 - 07 - 15)),
        ];

        let metrics = calculate_metrics(&transactions, Some(date!(2024 - 07 - 15)));

        assert_eq!(metrics.balance, 50.0);
        assert_eq!(metrics.monthly_expenses, 10.0);
    }

    #[test]
    fn splits_previous_month_from_current_month() {
        let transactions = vec![
            create_test_transaction(3000.0, TransactionKind::Income, date!(2024 - 06 - 28)),
            create_test_transaction(500.0, TransactionKind::Expense, date!(2024 - 06 - 30)),
            create_test_transaction(3200.0, TransactionKind::Income, date!(2024 - 07 - 01)),
        ];

        let metrics = calculate_metrics(&transactions, Some(date!(2024 - 07 - 15)));

        assert_eq!(metrics.previous_monthly_income, 3000.0);
        assert_eq!(metrics.previous_monthly_expenses, 500.0);
        assert_eq!(metrics.monthly_income, 3200.0);
        assert_eq!(metrics.monthly_expenses, 0.0);
    }

    #[test]
    fn previous_month_crosses_year_boundary() {
        let transactions = vec![create_test_transaction(
            250.0,
            TransactionKind::Income,
            date!(2023 - 12 - 31),
        )];

        let metrics = calculate_metrics(&transactions, Some(date!(2024 - 01 - 10)));

        assert_eq!(metrics.previous_monthly_income, 250.0);
    }

    #[test]
    fn unparseable_date_counts_toward_balance_only() {
        let mut transaction =
            create_test_transaction(75.0, TransactionKind::Expense, date!(2024 - 07 - 10));
        transaction.date = RawDate::Iso(String::new());

        let metrics = calculate_metrics(&[transaction], Some(date!(2024 - 07 - 15)));

        assert_eq!(metrics.balance, -75.0);
        assert_eq!(metrics.monthly_expenses, 0.0);
    }

    #[test]
    fn invalid_reference_zeroes_window_fields_but_keeps_balance() {
        let transactions = vec![
            create_test_transaction(5000.0, TransactionKind::Income, date!(2024 - 07 - 01)),
            create_test_transaction(1200.0, TransactionKind::Expense, date!(2024 - 07 - 22)),
        ];

        let metrics = calculate_metrics(&transactions, None);

        assert_eq!(metrics.balance, 3800.0);
        assert_eq!(metrics.monthly_income, 0.0);
        assert_eq!(metrics.monthly_expenses, 0.0);
        assert_eq!(metrics.previous_monthly_income, 0.0);
        assert_eq!(metrics.previous_monthly_expenses, 0.0);
    }
}
