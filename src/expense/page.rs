//! The expense tracker page: the add expense form, the expense list, the
//! category and daily breakdowns and the previous months modal.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error,
    category_breakdown::category_breakdown_placeholder,
    daily_spending::daily_spending_placeholder,
    endpoints,
    expense::{
        ExpenseStore,
        list::{EXPENSE_LIST_ID, expense_list_unavailable_view, expense_list_view},
    },
    gateway::ExpenseBackend,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base,
    },
    monthly_summary::{
        ClientId, ModalState, RequestGeneration, monthly_summary_modal, previous_months_button,
    },
    timezone::local_today,
};

pub(crate) const EXPENSE_FORM_ID: &str = "expense-form";

/// The state needed for the expense tracker page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub backend: Arc<dyn ExpenseBackend>,
    pub expense_store: ExpenseStore,
    pub local_timezone: String,
    pub summary_requests: RequestGeneration,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            expense_store: state.expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
            summary_requests: state.summary_requests.clone(),
        }
    }
}

/// Render the expense tracker page.
///
/// The expense list is loaded fresh from the expense API. If that fails the
/// page is still rendered, with a notice in place of the list.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let expense_list = match state.expense_store.refresh(state.backend.as_ref()).await {
        Ok(expenses) => expense_list_view(&expenses),
        Err(error) => {
            tracing::error!("Could not load expenses: {error}");
            expense_list_unavailable_view()
        }
    };

    let client = state.summary_requests.register_client();

    Ok(expenses_page_view(today, expense_list, client).into_response())
}

fn expenses_page_view(today: Date, expense_list: Markup, client: ClientId) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-3xl space-y-6"
            {
                header class="flex justify-between flex-wrap items-center gap-4"
                {
                    h1 class="text-3xl font-bold" { "Expense Tracker" }
                    (previous_months_button(client))
                }

                section class=(CARD_STYLE)
                {
                    h2 class="text-xl font-bold" { "Add expense" }
                    (expense_form_view(today, false))
                }

                (expense_list)

                (category_breakdown_placeholder())

                (daily_spending_placeholder())
            }
        }

        (monthly_summary_modal(ModalState::default(), html! {}))
    };

    base("Expenses", &content)
}

/// The add expense form with empty fields and the date set to `today`.
///
/// With `out_of_band` set the form replaces the one on the page as an
/// out-of-band swap, which resets it after a successful submission.
pub(crate) fn expense_form_view(today: Date, out_of_band: bool) -> Markup {
    html! {
        form
            id=(EXPENSE_FORM_ID)
            class="grid gap-4 md:grid-cols-4 items-end"
            hx-post=(endpoints::EXPENSES_API)
            hx-target={ "#" (EXPENSE_LIST_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="e.g. Groceries"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="date"
                    type="date"
                    name="date"
                    value=(today.to_string())
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button id="add-expense" type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add expense" }
        }
    }
}
