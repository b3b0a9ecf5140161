//! Renders a monthly summary for the previous months modal.

use maud::{Markup, html};

use crate::{
    html::format_currency,
    monthly_summary::{MonthAggregate, MonthlySummary, months_newest_first},
};

pub(crate) const NO_DATA_MESSAGE: &str = "No expense data available for previous months.";
pub(crate) const NO_EXPENSES_MESSAGE: &str = "No expenses for this month";

/// The content of the monthly expenses container, most recent month first.
///
/// The output only depends on `summary`.
pub(crate) fn monthly_expenses_view(summary: &MonthlySummary) -> Markup {
    if summary.is_empty() {
        return html! {
            p class="text-gray-500 text-center" { (NO_DATA_MESSAGE) }
        };
    }

    html! {
        @for (label, month) in months_newest_first(summary) {
            (month_view(label, month))
        }
    }
}

fn month_view(label: &str, month: &MonthAggregate) -> Markup {
    html! {
        div
            class="border rounded-lg p-4 bg-gray-50 dark:bg-gray-700 dark:border-gray-600"
            data-month=(label)
        {
            div class="flex justify-between items-center mb-3"
            {
                h4 class="text-xl font-semibold text-gray-800 dark:text-white" { (label) }
                span class="month-total text-lg font-bold text-blue-600 dark:text-blue-400"
                {
                    "Total: " (format_currency(month.total))
                }
            }

            @if month.categories.is_empty() {
                p class="text-gray-500 text-sm" { (NO_EXPENSES_MESSAGE) }
            } @else {
                div class="space-y-2"
                {
                    @for (category, amount) in month.categories.iter() {
                        div class="flex justify-between text-sm" data-category=(category)
                        {
                            span class="text-gray-600 dark:text-gray-300" { (category) }
                            span class="font-medium" { (format_currency(*amount)) }
                        }
                    }
                }
            }
        }
    }
}
