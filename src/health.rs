//! The financial health score shown on the dashboard.
//!
//! Maps the current month's savings ratio onto a descending band table;
//! bands are evaluated top-down and the first match wins, so the score is
//! monotonic in the ratio by construction.

use serde::Serialize;
use time::Date;

use crate::{
    dates::month_window,
    transaction::{Transaction, TransactionKind},
};

/// One row of the savings-ratio score table.
struct ScoreBand {
    /// Lowest savings ratio that still falls in this band.
    minimum_ratio: f64,
    score: u8,
    description: &'static str,
    emoji: &'static str,
}

/// Score bands in descending order of savings ratio.
const SCORE_BANDS: [ScoreBand; 6] = [
    ScoreBand {
        minimum_ratio: 0.5,
        score: 100,
        description: "Excellent",
        emoji: "🏆",
    },
    ScoreBand {
        minimum_ratio: 0.2,
        score: 80,
        description: "Very Good",
        emoji: "😄",
    },
    ScoreBand {
        minimum_ratio: 0.1,
        score: 60,
        description: "Good",
        emoji: "👍",
    },
    ScoreBand {
        minimum_ratio: 0.0,
        score: 40,
        description: "Fair",
        emoji: "😐",
    },
    ScoreBand {
        minimum_ratio: -0.1,
        score: 20,
        description: "Needs Attention",
        emoji: "😟",
    },
    ScoreBand {
        minimum_ratio: f64::NEG_INFINITY,
        score: 10,
        description: "Critical",
        emoji: "🚨",
    },
];

/// A summary of how healthy the current month's finances look.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialHealth {
    /// Score from 0 to 100; higher is better. Zero means the score could
    /// not be computed.
    pub score: u8,
    /// Short description of the score band.
    pub description: String,
    /// Emoji matching the score band, for the dashboard card.
    pub emoji: String,
}

impl FinancialHealth {
    fn fixed(description: &str, emoji: &str) -> Self {
        Self {
            score: 0,
            description: description.to_owned(),
            emoji: emoji.to_owned(),
        }
    }
}

/// Scores the current month's savings ratio.
///
/// Returns a fixed zero-score result when `reference` is `None` ("score
/// unavailable") or when the current month has no income ("no income data"),
/// rather than dividing by zero.
pub fn financial_health_score(
    transactions: &[Transaction],
    reference: Option<Date>,
) -> FinancialHealth {
    let Some(reference) = reference else {
        return FinancialHealth::fixed("Score unavailable", "❔");
    };

    let window = month_window(reference);

    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        let Ok(date) = transaction.date.normalize() else {
            continue;
        };
        if !window.contains(&date) {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount,
        }
    }

    if income <= 0.0 {
        return FinancialHealth::fixed("No income data this month", "🤷");
    }

    let savings_ratio = (income - expenses) / income;

    for band in &SCORE_BANDS {
        if savings_ratio >= band.minimum_ratio {
            return FinancialHealth {
                score: band.score,
                description: band.description.to_owned(),
                emoji: band.emoji.to_owned(),
            };
        }
    }

    // NEG_INFINITY band matches every finite ratio; this is unreachable for
    // well-typed input but keeps the function total.
    FinancialHealth::fixed("Score unavailable", "❔")
}
