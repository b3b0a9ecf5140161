//! [ExpenseBackend] over HTTP with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    category_breakdown::{CategoryBreakdown, DateSelection},
    expense::{Expense, ExpenseId, NewExpense},
    gateway::{ExpenseBackend, GatewayError},
    monthly_summary::MonthlySummary,
};

const ADD_EXPENSE: &str = "add_expense";
const DELETE_EXPENSE: &str = "delete_expense";
const MONTHLY_EXPENSES: &str = "get_previous_months_expenses";
const LIST_EXPENSES: &str = "debug_expenses";
const CHART_DATA: &str = "get_chart_data";

/// Talks to the expense API at a base URL.
#[derive(Debug, Clone)]
pub struct HttpExpenseBackend {
    http: Client,
    base_url: Url,
}

impl HttpExpenseBackend {
    /// Create a client for the API at `base_url`.
    ///
    /// Endpoints are resolved beneath the path of `base_url`, so
    /// `http://host/api` and `http://host/api/` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns [GatewayError::Transport] if `base_url` is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base_url = parse_base_url(base_url)?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| {
                GatewayError::Transport(format!("could not build HTTP client: {error}"))
            })?;

        Ok(Self { http, base_url })
    }

    /// The URL of `segments` joined beneath the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // The base URL was checked to be a base in `parse_base_url`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|error| transport_error(&url, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(status.to_string()));
        }

        response
            .json::<T>()
            .await
            .map_err(|error| transport_error(&url, error))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, GatewayError> {
    let mut url = Url::parse(base_url).map_err(|error| {
        GatewayError::Transport(format!("invalid backend URL {base_url:?}: {error}"))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(GatewayError::Transport(format!(
                "unsupported scheme '{other}' in backend URL {base_url:?}"
            )));
        }
    }

    if url.cannot_be_a_base() {
        return Err(GatewayError::Transport(format!(
            "backend URL {base_url:?} cannot be used as a base"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn transport_error(url: &Url, error: reqwest::Error) -> GatewayError {
    tracing::error!("request to {url} failed: {error}");
    GatewayError::Transport(error.to_string())
}

#[derive(Debug, Serialize)]
struct AddExpenseBody<'a> {
    category: &'a str,
    amount: &'a str,
    date: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ExpenseListing {
    all_expenses: Vec<Expense>,
}

/// Read the `{status}` body the mutating endpoints answer with.
async fn read_status_message(url: &Url, response: Response) -> Result<String, GatewayError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| transport_error(url, error))?;
    let status_body = serde_json::from_str::<StatusBody>(&body);

    match status_body {
        Ok(StatusBody { status: message }) if status.is_success() => Ok(message),
        Ok(StatusBody { status: message }) => {
            tracing::warn!("{url} responded with {status}: {message}");
            Err(GatewayError::Server { message })
        }
        Err(_) if status.is_success() => Err(GatewayError::Transport(format!(
            "unexpected response body from {url}"
        ))),
        Err(_) => {
            tracing::error!("{url} responded with {status} and no status message");
            Err(GatewayError::Transport(status.to_string()))
        }
    }
}

#[async_trait]
impl ExpenseBackend for HttpExpenseBackend {
    async fn create_expense(&self, expense: &NewExpense) -> Result<String, GatewayError> {
        let url = self.endpoint(&[ADD_EXPENSE]);
        tracing::debug!("POST {url}: {expense:?}");

        let body = AddExpenseBody {
            category: expense.category(),
            amount: expense.amount(),
            date: expense.date(),
        };

        let response = self
            .http
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|error| transport_error(&url, error))?;

        read_status_message(&url, response).await
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<String, GatewayError> {
        let url = self.endpoint(&[DELETE_EXPENSE, &id.to_string()]);
        tracing::debug!("DELETE {url}");

        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|error| transport_error(&url, error))?;

        read_status_message(&url, response).await
    }

    async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, GatewayError> {
        self.get_json(self.endpoint(&[MONTHLY_EXPENSES])).await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, GatewayError> {
        let listing: ExpenseListing = self.get_json(self.endpoint(&[LIST_EXPENSES])).await?;

        Ok(listing.all_expenses)
    }

    async fn fetch_category_breakdown(
        &self,
        date: &DateSelection,
    ) -> Result<CategoryBreakdown, GatewayError> {
        self.get_json(self.endpoint(&[CHART_DATA, date.as_path_segment()]))
            .await
    }
}
