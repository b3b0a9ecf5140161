//! The monthly summary returned by the backend.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The expenses of a single month, aggregated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAggregate {
    pub year: i32,
    /// The month number, 1 for January through 12 for December.
    pub month: u8,
    pub total: f64,
    /// Subtotals per category, in the order the backend listed them.
    pub categories: IndexMap<String, f64>,
}

/// Month label (e.g. "January 2024") to the aggregate for that month.
pub type MonthlySummary = IndexMap<String, MonthAggregate>;

/// The labels and aggregates of `summary`, most recent month first.
///
/// Months are compared by their `(year, month)` pair, never by the label,
/// since labels such as "April 2024" and "March 2024" do not sort by date.
/// Months with the same pair keep their source order.
pub fn months_newest_first(summary: &MonthlySummary) -> Vec<(&str, &MonthAggregate)> {
    let mut months: Vec<_> = summary
        .iter()
        .map(|(label, month)| (label.as_str(), month))
        .collect();
    months.sort_by(|(_, a), (_, b)| (b.year, b.month).cmp(&(a.year, a.month)));
    months
}
