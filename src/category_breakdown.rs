//! Spending per category, over all dates or for a single date.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use indexmap::IndexMap;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    alert::Alert,
    endpoints,
    expense::EXPENSES_CHANGED_EVENT,
    gateway::ExpenseBackend,
    html::{
        CARD_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

const ALL_DATES: &str = "all";
const SECTION_ID: &str = "category-breakdown";
const DATE_SELECT_ID: &str = "breakdown-date";
pub(crate) const BREAKDOWN_UNAVAILABLE_MESSAGE: &str = "Could not load spending by category";

/// Category totals as reported by the backend's chart data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Total per category, in the order the backend listed them.
    pub expenses_by_category: IndexMap<String, f64>,
    /// Every date that has at least one expense, newest first.
    pub all_dates: Vec<String>,
    /// Either "all" or the ISO date the totals are for.
    pub selected_date: String,
}

/// Which expenses the breakdown covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    All,
    Date(String),
}

impl DateSelection {
    /// Interpret the `date` query parameter. Missing, blank and "all" select every date.
    pub fn from_query(date: Option<&str>) -> Self {
        match date.map(str::trim) {
            None | Some("") | Some(ALL_DATES) => DateSelection::All,
            Some(date) => DateSelection::Date(date.to_owned()),
        }
    }

    /// The path segment the backend expects for this selection.
    pub fn as_path_segment(&self) -> &str {
        match self {
            DateSelection::All => ALL_DATES,
            DateSelection::Date(date) => date,
        }
    }
}

/// The state needed for the category breakdown.
#[derive(Debug, Clone)]
pub struct CategoryBreakdownState {
    pub backend: Arc<dyn ExpenseBackend>,
}

impl FromRef<AppState> for CategoryBreakdownState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Render the category breakdown section for the requested date.
///
/// If the expense API cannot be reached the section is replaced with a
/// notice and the error is shown as an alert.
pub async fn get_category_breakdown_endpoint(
    State(state): State<CategoryBreakdownState>,
    Query(query): Query<DateQuery>,
) -> Response {
    let selection = DateSelection::from_query(query.date.as_deref());

    match state.backend.fetch_category_breakdown(&selection).await {
        Ok(breakdown) => category_breakdown_view(&breakdown).into_response(),
        Err(error) => {
            tracing::error!("Could not load category breakdown for {selection:?}: {error}");
            html! {
                (category_breakdown_unavailable_view())
                (Alert::Error {
                    message: "Error loading category breakdown".to_owned(),
                    details: error.to_string(),
                }
                .into_oob_html())
            }
            .into_response()
        }
    }
}

fn refresh_trigger(load: bool) -> String {
    let changed = format!("{EXPENSES_CHANGED_EVENT} from:body");

    if load {
        format!("load, {changed}")
    } else {
        changed
    }
}

/// The section element, reloading itself with the current date selection
/// whenever the expenses change.
fn breakdown_section(load: bool, content: Markup) -> Markup {
    html! {
        section
            id=(SECTION_ID)
            class=(CARD_STYLE)
            hx-get=(endpoints::CATEGORY_BREAKDOWN)
            hx-trigger=(refresh_trigger(load))
            hx-include={ "#" (DATE_SELECT_ID) }
            hx-swap="outerHTML"
        {
            (content)
        }
    }
}

/// The section as first rendered with the page, it loads itself once shown.
pub(crate) fn category_breakdown_placeholder() -> Markup {
    breakdown_section(
        true,
        html! {
            h2 class="text-xl font-bold" { "Spending by category" }
            p class="text-gray-500" { "Loading…" }
        },
    )
}

/// Shown in place of the breakdown when the expense API could not be reached.
pub(crate) fn category_breakdown_unavailable_view() -> Markup {
    breakdown_section(
        false,
        html! {
            h2 class="text-xl font-bold" { "Spending by category" }
            p class="text-red-600 dark:text-red-400" { (BREAKDOWN_UNAVAILABLE_MESSAGE) }
        },
    )
}

pub(crate) fn category_breakdown_view(breakdown: &CategoryBreakdown) -> Markup {
    let is_selected = |date: &str| breakdown.selected_date == date;

    let content = html! {
        header class="flex justify-between flex-wrap items-end gap-4"
        {
            h2 class="text-xl font-bold" { "Spending by category" }

            select
                id=(DATE_SELECT_ID)
                name="date"
                aria-label="Date"
                class={ (FORM_TEXT_INPUT_STYLE) " max-w-xs" }
                hx-get=(endpoints::CATEGORY_BREAKDOWN)
                hx-trigger="change"
                hx-target={ "#" (SECTION_ID) }
                hx-swap="outerHTML"
            {
                option value=(ALL_DATES) selected[is_selected(ALL_DATES)] { "All dates" }

                @for date in &breakdown.all_dates {
                    option value=(date) selected[is_selected(date.as_str())] { (date) }
                }
            }
        }

        @if breakdown.expenses_by_category.is_empty() {
            p class="text-gray-500" { "No expenses recorded." }
        } @else {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    }
                }

                tbody
                {
                    @for (category, amount) in &breakdown.expenses_by_category {
                        tr class=(TABLE_ROW_STYLE) data-category=(category)
                        {
                            td class=(TABLE_CELL_STYLE) { (category) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(*amount)) }
                        }
                    }
                }
            }
        }
    };

    breakdown_section(false, content)
}
