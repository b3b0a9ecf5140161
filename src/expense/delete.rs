//! Expense deletion endpoint.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::{HxRefresh, HxResponseTrigger};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{EXPENSES_CHANGED_EVENT, ExpenseId, ExpenseStore, list::expense_list_view},
    gateway::ExpenseBackend,
};

pub(crate) const DELETE_EXPENSE_FAILED: &str = "Error deleting expense";

/// The state needed for deleting an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    pub backend: Arc<dyn ExpenseBackend>,
    pub expense_store: ExpenseStore,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Handle expense deletion. Returns the updated expense list with a success
/// alert, or an error alert.
///
/// The confirmation prompt is shown by the browser before this request is sent.
/// If the deleted expense was not in the stored listing, the listing is out of
/// date and is reloaded from the expense API; should that fail the page is
/// told to reload. A successful deletion fires [EXPENSES_CHANGED_EVENT].
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<DeleteExpenseState>,
) -> Response {
    let message = match state.backend.delete_expense(expense_id).await {
        Ok(message) => message,
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            return Error::from(error).into_alert_response(DELETE_EXPENSE_FAILED);
        }
    };

    let expenses = match state.expense_store.remove(expense_id) {
        Ok(true) => state.expense_store.snapshot(),
        Ok(false) => {
            tracing::debug!("Deleted expense {expense_id} was not in the expense list, reloading");

            match state.expense_store.refresh(state.backend.as_ref()).await {
                Ok(expenses) => Ok(expenses),
                Err(error) => {
                    tracing::warn!("Expense deleted but the list could not be refreshed: {error}");
                    return (HxRefresh(true), Alert::SuccessSimple { message }).into_response();
                }
            }
        }
        Err(error) => Err(error),
    };

    let expenses = match expenses {
        Ok(expenses) => expenses,
        Err(error) => return error.into_alert_response(DELETE_EXPENSE_FAILED),
    };

    (
        HxResponseTrigger::normal([EXPENSES_CHANGED_EVENT]),
        html! {
            (expense_list_view(&expenses))
            (Alert::SuccessSimple { message }.into_oob_html())
        },
    )
        .into_response()
}
