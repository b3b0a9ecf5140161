//! Spendview is the web front end of an expense tracker.
//!
//! The expenses themselves live in a separate expense API. This library
//! serves the HTML page and answers the page's htmx requests by calling that
//! API through the [ExpenseBackend] gateway and rendering the results.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category_breakdown;
mod daily_spending;
mod endpoints;
mod expense;
mod gateway;
mod html;
mod internal_server_error;
mod logging;
mod monthly_summary;
mod not_found;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use gateway::{ExpenseBackend, GatewayError, HttpExpenseBackend};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{alert::Alert, expense::ValidationError, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The submitted expense was rejected before reaching the expense API.
    #[error(transparent)]
    InvalidExpense(#[from] ValidationError),

    /// A call to the expense API failed.
    #[error("expense API request failed: {0}")]
    Gateway(#[from] GatewayError),

    /// Could not acquire the expense store lock.
    #[error("could not acquire the expense store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for the alert container.
    ///
    /// Messages from the expense API are shown verbatim. When the API could
    /// not be reached `fallback_message` is shown, with the cause as details.
    fn into_alert_response(self, fallback_message: &str) -> Response {
        let (status, alert) = match self {
            Error::InvalidExpense(error) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: error.to_string(),
                },
            ),
            Error::Gateway(GatewayError::Server { message }) => {
                (StatusCode::BAD_GATEWAY, Alert::ErrorSimple { message })
            }
            Error::Gateway(GatewayError::Transport(details)) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: fallback_message.to_owned(),
                    details,
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more \
                            details."
                            .to_owned(),
                    },
                )
            }
        };

        alert.into_error_response(status)
    }
}
