//! Transaction data aggregation and transformation for charts.
//!
//! Provides functions to bucket transactions by month, group expenses by
//! category, break expenses down into fixed and variable, and group income by
//! source, all as plain data for the chart-rendering layer.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    category::Category,
    dates::{month_label, month_window, months_back},
    transaction::{ExpenseType, Transaction, TransactionKind},
};

/// How many months the monthly chart spans, including the reference month.
const MONTHLY_CHART_MONTHS: u32 = 6;

/// Fallback colors for chart entries whose category has no stored color.
const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF"];

/// Label shown for expenses whose category no longer exists.
const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Label shown for income transactions with a blank description.
const UNKNOWN_SOURCE_LABEL: &str = "Unknown Source";

/// Returns the palette color for the entry at `index`, cycling through the
/// fixed palette.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One month's bucket in the income/fixed/variable bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// Abbreviated month label, e.g. "Jul".
    pub month: String,
    /// Total income recorded in the month.
    pub income: f64,
    /// Total fixed expenses recorded in the month.
    pub fixed: f64,
    /// Total variable expenses recorded in the month.
    pub variable: f64,
}

/// Buckets transactions into the six calendar months ending at `reference`.
///
/// Always returns exactly six buckets in chronological order (oldest first),
/// or an empty vector when `reference` is `None`. Transactions outside the
/// window or with unparseable dates are ignored. Expenses without an expense
/// type are counted in neither the fixed nor the variable series.
pub fn monthly_chart_data(
    transactions: &[Transaction],
    reference: Option<Date>,
) -> Vec<MonthlyPoint> {
    let Some(reference) = reference else {
        return Vec::new();
    };

    let bucket_months: Vec<Date> = (0..MONTHLY_CHART_MONTHS)
        .rev()
        .map(|offset| months_back(reference, offset))
        .collect();

    let index_by_month: HashMap<Date, usize> = bucket_months
        .iter()
        .enumerate()
        .map(|(index, &month)| (month, index))
        .collect();

    let mut points: Vec<MonthlyPoint> = bucket_months
        .iter()
        .map(|&month| MonthlyPoint {
            month: month_label(month),
            income: 0.0,
            fixed: 0.0,
            variable: 0.0,
        })
        .collect();

    for transaction in transactions {
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };
        let month = date.replace_day(1).unwrap();
        let Some(&index) = index_by_month.get(&month) else {
            continue;
        };

        let point = &mut points[index];
        match transaction.kind {
            TransactionKind::Income => point.income += transaction.amount,
            TransactionKind::Expense => match transaction.expense_type {
                Some(ExpenseType::Fixed) => point.fixed += transaction.amount,
                Some(ExpenseType::Variable) => point.variable += transaction.amount,
                None => {}
            },
        }
    }

    points
}

/// One slice of the current-month expense distribution pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    /// The category's display name, or "Uncategorized" when the category no
    /// longer exists.
    pub name: String,
    /// Total expenses attributed to the category this month.
    pub value: f64,
    /// The slice's display color.
    pub fill: String,
}

/// Groups the current month's expenses by category, summing amounts.
///
/// Returns an empty vector when there are no categories, no matching
/// expenses, or `reference` is `None`. Colors come from the category's
/// stored color, falling back to the palette indexed by grouping order.
/// Slices are sorted in non-increasing order of value.
pub fn category_distribution_data(
    transactions: &[Transaction],
    categories: &[Category],
    reference: Option<Date>,
) -> Vec<CategorySlice> {
    let Some(reference) = reference else {
        return Vec::new();
    };
    if categories.is_empty() {
        return Vec::new();
    }

    let window = month_window(reference);

    // Group in first-seen order so palette assignment is deterministic.
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };
        if !window.contains(&date) {
            continue;
        }

        match index_by_category.get(transaction.category_id.as_str()) {
            Some(&index) => totals[index].1 += transaction.amount,
            None => {
                index_by_category.insert(transaction.category_id.as_str(), totals.len());
                totals.push((transaction.category_id.as_str(), transaction.amount));
            }
        }
    }

    let mut slices: Vec<CategorySlice> = totals
        .iter()
        .enumerate()
        .map(|(position, &(category_id, value))| {
            let category = categories.iter().find(|category| category.id == category_id);
            let name = category
                .map(|category| category.name.clone())
                .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_owned());
            let fill = category
                .and_then(|category| category.color.clone())
                .unwrap_or_else(|| palette_color(position).to_owned());

            CategorySlice { name, value, fill }
        })
        .collect();

    slices.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    slices
}

/// The current month's expenses split into fixed and variable totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdownPoint {
    /// Abbreviated label of the current month.
    pub month: String,
    /// Total fixed expenses.
    pub fixed: f64,
    /// Total variable expenses.
    pub variable: f64,
}

/// Sums the current month's expenses by expense type.
///
/// Returns a single-element vector labelled with the current month, or an
/// empty vector when no current-month expenses exist or `reference` is
/// `None`. Expenses without an expense type keep the result non-empty but
/// are added to neither total.
pub fn expense_breakdown_data(
    transactions: &[Transaction],
    reference: Option<Date>,
) -> Vec<ExpenseBreakdownPoint> {
    let Some(reference) = reference else {
        return Vec::new();
    };

    let window = month_window(reference);

    let mut fixed = 0.0;
    let mut variable = 0.0;
    let mut any_expense = false;

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };
        if !window.contains(&date) {
            continue;
        }

        any_expense = true;
        match transaction.expense_type {
            Some(ExpenseType::Fixed) => fixed += transaction.amount,
            Some(ExpenseType::Variable) => variable += transaction.amount,
            None => {}
        }
    }

    if !any_expense {
        return Vec::new();
    }

    vec![ExpenseBreakdownPoint {
        month: month_label(reference),
        fixed,
        variable,
    }]
}

/// One source in the current-month income breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSource {
    /// The transaction description the income was grouped under, or
    /// "Unknown Source" for blank descriptions.
    pub name: String,
    /// Total income from the source this month.
    pub value: f64,
    /// The entry's display color, assigned from the palette.
    pub fill: String,
}

/// Groups the current month's income by description, summing amounts.
///
/// Blank descriptions group under "Unknown Source". Palette colors are
/// assigned by grouping order; entries are sorted in non-increasing order of
/// value. Returns an empty vector when `reference` is `None`.
pub fn income_sources_data(
    transactions: &[Transaction],
    reference: Option<Date>,
) -> Vec<IncomeSource> {
    let Some(reference) = reference else {
        return Vec::new();
    };

    let window = month_window(reference);

    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut index_by_source: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Income {
            continue;
        }
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };
        if !window.contains(&date) {
            continue;
        }

        let source = transaction.description.trim();
        let source = if source.is_empty() {
            UNKNOWN_SOURCE_LABEL
        } else {
            source
        };

        match index_by_source.get(source) {
            Some(&index) => totals[index].1 += transaction.amount,
            None => {
                index_by_source.insert(source.to_owned(), totals.len());
                totals.push((source.to_owned(), transaction.amount));
            }
        }
    }

    let mut sources: Vec<IncomeSource> = totals
        .into_iter()
        .enumerate()
        .map(|(position, (name, value))| IncomeSource {
            name,
            value,
            fill: palette_color(position).to_owned(),
        })
        .collect();

    sources.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    sources
}
