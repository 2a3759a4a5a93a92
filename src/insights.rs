//! Rule-based textual insights derived from the current month's transactions.
//!
//! Each rule is a simple threshold check; the thresholds are tunable
//! heuristics, not derived values. Rules are evaluated in a fixed order and
//! the output lists preserve insertion order.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    category::Category,
    currency::{format_currency, format_percentage},
    dates::month_window,
    transaction::{Transaction, TransactionKind},
};

/// Expense-to-income ratio above which a high-spending warning is raised.
const EXPENSE_RATIO_WARNING: f64 = 0.8;

/// Share of total expenses above which a single category is flagged.
const CATEGORY_CONCENTRATION_WARNING: f64 = 0.3;

/// Monthly savings above which an investment opportunity is suggested.
const SAVINGS_OPPORTUNITY_MINIMUM: f64 = 250.0;

/// Human-readable findings about the current month, grouped by tone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleBasedInsights {
    /// Things that need the user's attention, e.g. overspending.
    pub warnings: Vec<String>,
    /// Positive findings and suggestions, e.g. savings to put to work.
    pub opportunities: Vec<String>,
    /// Investment suggestions matching the month's financial situation.
    pub investment_ideas: Vec<String>,
}

/// Applies the threshold rules to the current month's transactions.
///
/// When no current-month transactions exist (including when `reference` is
/// `None`), returns a single "no data" warning and empty other lists. When
/// transactions exist, `warnings` and `opportunities` are never empty:
/// fallback messages fill in when no rule fired.
pub fn generate_rule_based_insights(
    transactions: &[Transaction],
    categories: &[Category],
    reference: Option<Date>,
) -> RuleBasedInsights {
    let current_month: Vec<&Transaction> = match reference {
        Some(reference) => {
            let window = month_window(reference);
            transactions
                .iter()
                .filter(|transaction| {
                    transaction
                        .date
                        .normalize()
                        .map(|date| window.contains(&date))
                        .unwrap_or(false)
                })
                .collect()
        }
        None => Vec::new(),
    };

    if current_month.is_empty() {
        return RuleBasedInsights {
            warnings: vec![
                "No transactions recorded this month yet. Add your income and expenses to \
                 start receiving insights."
                    .to_owned(),
            ],
            ..Default::default()
        };
    }

    let mut insights = RuleBasedInsights::default();

    let total_income: f64 = current_month
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Income)
        .map(|transaction| transaction.amount)
        .sum();
    let total_expenses: f64 = current_month
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
        .map(|transaction| transaction.amount)
        .sum();

    if total_income > 0.0 && total_expenses / total_income > EXPENSE_RATIO_WARNING {
        let percentage = format_percentage(total_expenses / total_income * 100.0);
        insights.warnings.push(format!(
            "Your expenses consumed {percentage}% of your income this month. Consider \
             reviewing your spending."
        ));
    }

    for (category_name, share) in concentrated_categories(&current_month, categories, total_expenses)
    {
        let percentage = format_percentage(share * 100.0);
        insights.warnings.push(format!(
            "{percentage}% of your monthly expenses are concentrated in \"{category_name}\"."
        ));
    }

    let savings = total_income - total_expenses;
    if savings > SAVINGS_OPPORTUNITY_MINIMUM {
        insights.opportunities.push(format!(
            "You saved {} this month. Congratulations!",
            format_currency(savings)
        ));
        insights.investment_ideas.push(
            "With your spending under control, consider investing your monthly surplus in \
             index funds or broad-market ETFs on a regular schedule."
                .to_owned(),
        );
    } else if total_income > 0.0 && savings <= 0.0 {
        insights
            .warnings
            .push("Your expenses exceeded your income this month.".to_owned());
    }

    insights.investment_ideas.push(
        "Consider setting long-term goals and keeping an emergency fund covering 3-6 months \
         of expenses."
            .to_owned(),
    );

    if insights.warnings.is_empty() {
        insights
            .warnings
            .push("No critical warnings this month. Excellent financial control!".to_owned());
    }

    if insights.opportunities.is_empty() {
        insights.opportunities.push(
            "Keep adding your transactions to receive increasingly accurate insights about \
             your financial habits."
                .to_owned(),
        );
    }

    insights
}

/// Finds categories whose share of total expenses exceeds the concentration
/// threshold, in first-seen order. Categories that no longer resolve to a
/// name are skipped.
fn concentrated_categories<'a>(
    current_month: &[&Transaction],
    categories: &'a [Category],
    total_expenses: f64,
) -> Vec<(&'a str, f64)> {
    if total_expenses <= 0.0 {
        return Vec::new();
    }

    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for transaction in current_month {
        if transaction.kind != TransactionKind::Expense {
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

    totals
        .into_iter()
        .filter(|(_, total)| total / total_expenses > CATEGORY_CONCENTRATION_WARNING)
        .filter_map(|(category_id, total)| {
            categories
                .iter()
                .find(|category| category.id == category_id)
                .map(|category| (category.name.as_str(), total / total_expenses))
        })
        .collect()
}
