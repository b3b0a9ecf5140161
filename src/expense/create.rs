//! Expense creation endpoint.

use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_htmx::{HxRefresh, HxResponseTrigger};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{
        EXPENSES_CHANGED_EVENT, ExpenseForm, ExpenseStore, NewExpense, list::expense_list_view,
        page::expense_form_view,
    },
    gateway::ExpenseBackend,
    timezone::local_today,
};

pub(crate) const ADD_EXPENSE_FAILED: &str = "Error adding expense";

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    pub backend: Arc<dyn ExpenseBackend>,
    pub expense_store: ExpenseStore,
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            expense_store: state.expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Validate the submitted expense and send it to the expense API.
///
/// On success the response is the refreshed expense list, with a reset form
/// and the API's status message swapped in out of band. The response also
/// fires [EXPENSES_CHANGED_EVENT] so the breakdowns reload. Invalid input never
/// reaches the API. If the list cannot be refreshed after the expense was
/// added, the page is told to reload instead.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let new_expense = match NewExpense::try_from_form(&form) {
        Ok(new_expense) => new_expense,
        Err(error) => {
            tracing::debug!("Rejected expense {form:?}: {error}");
            return Error::from(error).into_alert_response(ADD_EXPENSE_FAILED);
        }
    };

    let message = match state.backend.create_expense(&new_expense).await {
        Ok(message) => message,
        Err(error) => {
            tracing::error!("Could not add expense {new_expense:?}: {error}");
            return Error::from(error).into_alert_response(ADD_EXPENSE_FAILED);
        }
    };

    let expenses = match state.expense_store.refresh(state.backend.as_ref()).await {
        Ok(expenses) => expenses,
        Err(error) => {
            tracing::warn!("Expense added but the list could not be refreshed: {error}");
            return (HxRefresh(true), Alert::SuccessSimple { message }).into_response();
        }
    };

    let reset_form = local_today(&state.local_timezone)
        .inspect_err(|error| tracing::warn!("Could not reset the expense form: {error}"))
        .ok()
        .map(|today| expense_form_view(today, true));

    (
        HxResponseTrigger::normal([EXPENSES_CHANGED_EVENT]),
        html! {
            (expense_list_view(&expenses))

            @if let Some(reset_form) = reset_form {
                (reset_form)
            }

            (Alert::SuccessSimple { message }.into_oob_html())
        },
    )
        .into_response()
}
