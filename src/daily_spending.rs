//! Spending per day, derived from the expense listing.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    alert::Alert,
    endpoints,
    expense::{EXPENSES_CHANGED_EVENT, Expense},
    gateway::ExpenseBackend,
    html::{CARD_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

const SECTION_ID: &str = "daily-spending";
pub(crate) const NO_SPENDING_MESSAGE: &str = "No expenses recorded.";
pub(crate) const DAILY_UNAVAILABLE_MESSAGE: &str = "Could not load daily spending";

/// The total spent on each date, oldest date first.
pub fn daily_totals(expenses: &[Expense]) -> Vec<(&str, f64)> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.date.as_str()).or_insert(0.0) += expense.amount;
    }

    totals.into_iter().collect()
}

/// The state needed for the daily spending section.
#[derive(Debug, Clone)]
pub struct DailySpendingState {
    pub backend: Arc<dyn ExpenseBackend>,
}

impl FromRef<AppState> for DailySpendingState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

/// Render the daily spending section from a fresh expense listing.
pub async fn get_daily_spending_endpoint(State(state): State<DailySpendingState>) -> Response {
    match state.backend.list_expenses().await {
        Ok(expenses) => daily_spending_view(&daily_totals(&expenses)).into_response(),
        Err(error) => {
            tracing::error!("Could not load daily spending: {error}");
            html! {
                (daily_spending_section(false, html! {
                    h2 class="text-xl font-bold" { "Spending by day" }
                    p class="text-red-600 dark:text-red-400" { (DAILY_UNAVAILABLE_MESSAGE) }
                }))
                (Alert::Error {
                    message: "Error loading daily spending".to_owned(),
                    details: error.to_string(),
                }
                .into_oob_html())
            }
            .into_response()
        }
    }
}

fn daily_spending_section(load: bool, content: Markup) -> Markup {
    let trigger = if load {
        format!("load, {EXPENSES_CHANGED_EVENT} from:body")
    } else {
        format!("{EXPENSES_CHANGED_EVENT} from:body")
    };

    html! {
        section
            id=(SECTION_ID)
            class=(CARD_STYLE)
            hx-get=(endpoints::DAILY_SPENDING)
            hx-trigger=(trigger)
            hx-swap="outerHTML"
        {
            (content)
        }
    }
}

/// The section as first rendered with the page, it loads itself once shown.
pub(crate) fn daily_spending_placeholder() -> Markup {
    daily_spending_section(
        true,
        html! {
            h2 class="text-xl font-bold" { "Spending by day" }
            p class="text-gray-500" { "Loading…" }
        },
    )
}

pub(crate) fn daily_spending_view(totals: &[(&str, f64)]) -> Markup {
    let largest = totals
        .iter()
        .map(|(_, total)| *total)
        .fold(0.0, f64::max);

    // Bar widths are relative to the largest day, in whole percent.
    let bar_width = |total: f64| {
        if largest > 0.0 {
            (total / largest * 100.0).round().clamp(0.0, 100.0)
        } else {
            0.0
        }
    };

    daily_spending_section(
        false,
        html! {
            h2 class="text-xl font-bold" { "Spending by day" }

            @if totals.is_empty() {
                p class="text-gray-500" { (NO_SPENDING_MESSAGE) }
            } @else {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                span class="sr-only" { "Share of largest day" }
                            }
                        }
                    }

                    tbody
                    {
                        @for (date, total) in totals {
                            tr class=(TABLE_ROW_STYLE) data-date=(date)
                            {
                                td class=(TABLE_CELL_STYLE) { (date) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(*total)) }
                                td class={ (TABLE_CELL_STYLE) " w-1/2" }
                                {
                                    div
                                        class="h-2 rounded bg-blue-500"
                                        style={ "width: " (bar_width(*total)) "%" } {}
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
