//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the page,
//! either as the target of an error response (`hx-target-error`) or as an
//! out-of-band swap next to a successful response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
use maud::{Markup, html};

/// The id of the element alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A dismissible notice for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    SuccessSimple { message: String },
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorSimple { .. })
    }

    fn message(&self) -> &str {
        match self {
            Alert::SuccessSimple { message }
            | Alert::Error { message, .. }
            | Alert::ErrorSimple { message } => message.as_str(),
        }
    }

    fn details(&self) -> Option<&str> {
        match self {
            Alert::Error { details, .. } if !details.is_empty() => Some(details.as_str()),
            _ => None,
        }
    }

    /// The alert markup, to be placed inside the alert container.
    pub fn into_html(self) -> Markup {
        let style = if self.is_error() {
            "flex items-start justify-between gap-4 p-4 mb-4 text-sm rounded-lg shadow \
            text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400"
        } else {
            "flex items-start justify-between gap-4 p-4 mb-4 text-sm rounded-lg shadow \
            text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400"
        };
        let role = if self.is_error() { "alert" } else { "status" };

        html! {
            div class=(style) role=(role)
            {
                div
                {
                    p class="font-medium" { (self.message()) }

                    @if let Some(details) = self.details() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="font-bold"
                    onclick="this.parentElement.remove()"
                {
                    "×"
                }
            }
        }
    }

    /// The alert wrapped for an out-of-band swap into the alert container.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

impl Alert {
    /// An error response that fills the alert container.
    ///
    /// The triggering element's `hx-swap` would otherwise apply to the alert
    /// container too, and an `outerHTML` swap would remove it from the page.
    pub fn into_error_response(self, status: StatusCode) -> Response {
        (status, HxReswap(SwapOption::InnerHtml), self.into_html()).into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use crate::test_utils::assert_hx_reswap;

    use super::Alert;

    fn paragraphs(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect()
    }

    #[test]
    fn error_alert_shows_message_and_details() {
        let html = Html::parse_fragment(
            &Alert::Error {
                message: "Error adding expense".to_owned(),
                details: "connection refused".to_owned(),
            }
            .into_html()
            .into_string(),
        );

        assert_eq!(
            paragraphs(&html),
            vec!["Error adding expense", "connection refused"]
        );
        assert!(
            html.select(&Selector::parse("[role=alert]").unwrap())
                .next()
                .is_some()
        );
    }

    #[test]
    fn simple_alert_has_no_details() {
        let html = Html::parse_fragment(
            &Alert::SuccessSimple {
                message: "Expense added successfully".to_owned(),
            }
            .into_html()
            .into_string(),
        );

        assert_eq!(paragraphs(&html), vec!["Expense added successfully"]);
        assert!(
            html.select(&Selector::parse("[role=status]").unwrap())
                .next()
                .is_some()
        );
    }

    #[test]
    fn oob_alert_targets_alert_container() {
        let html = Html::parse_fragment(
            &Alert::ErrorSimple {
                message: "oops".to_owned(),
            }
            .into_oob_html()
            .into_string(),
        );

        let container = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("No alert container found");
        assert_eq!(container.value().attr("hx-swap-oob"), Some("innerHTML"));
    }

    #[test]
    fn error_response_swaps_inside_alert_container() {
        let response = Alert::ErrorSimple {
            message: "oops".to_owned(),
        }
        .into_error_response(StatusCode::BAD_GATEWAY);

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_hx_reswap(&response, "innerHTML");
    }
}
