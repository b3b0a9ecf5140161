//! Endpoints that open and close the previous months modal.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    AppState,
    alert::Alert,
    gateway::ExpenseBackend,
    monthly_summary::{
        ClientId, RequestGeneration,
        modal::{ModalEvent, ModalState, monthly_summary_modal},
        view::monthly_expenses_view,
    },
};

/// The state needed for the monthly summary.
#[derive(Debug, Clone)]
pub struct MonthlySummaryState {
    pub backend: Arc<dyn ExpenseBackend>,
    pub summary_requests: RequestGeneration,
}

impl FromRef<AppState> for MonthlySummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            backend: state.backend.clone(),
            summary_requests: state.summary_requests.clone(),
        }
    }
}

/// The page a monthly summary fetch was made from.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub client: ClientId,
}

/// Fetch the monthly summary and return the modal showing it.
///
/// If the same page started another fetch while this one was waiting on the
/// expense API, this response is stale and `204 No Content` is returned so
/// that nothing is swapped. On failure the modal is left as it was and an
/// error alert is returned instead.
pub async fn get_monthly_summary_endpoint(
    State(state): State<MonthlySummaryState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let ticket = state.summary_requests.begin(query.client);
    let result = state.backend.fetch_monthly_summary().await;

    if !state.summary_requests.finish(ticket) {
        tracing::debug!("Discarding monthly summary superseded by a newer request");
        return StatusCode::NO_CONTENT.into_response();
    }

    match result {
        Ok(summary) => monthly_summary_modal(
            ModalState::Hidden.on(ModalEvent::SummaryLoaded),
            monthly_expenses_view(&summary),
        )
        .into_response(),
        Err(error) => {
            tracing::error!("Could not load monthly summary: {error}");
            Alert::ErrorSimple {
                message: format!("Error loading monthly expenses: {error}"),
            }
            .into_error_response(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Return the hidden, empty modal.
pub async fn close_monthly_summary_endpoint() -> Response {
    monthly_summary_modal(ModalState::Visible.on(ModalEvent::Closed), html! {}).into_response()
}
