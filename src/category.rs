//! The category model used to group transactions, e.g. 'Groceries', 'Rent',
//! 'Wages'. Categories are owned by the external data layer.

use serde::{Deserialize, Serialize};

/// A user-defined grouping for transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category document.
    pub id: String,

    /// The display name of the category.
    pub name: String,

    /// Symbolic icon name rendered by the UI. Not used by analytics.
    pub icon: String,

    /// Display color for chart slices. When absent, charts fall back to a
    /// fixed palette indexed by grouping position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
