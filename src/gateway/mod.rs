//! The request gateway to the remote expense API.
//!
//! Every read and write of expense data goes through [ExpenseBackend]. The
//! production implementation is [HttpExpenseBackend]; handlers only see the
//! trait so that they can be tested without a network.

mod http;

use async_trait::async_trait;

pub use http::HttpExpenseBackend;

use crate::{
    category_breakdown::{CategoryBreakdown, DateSelection},
    expense::{Expense, ExpenseId, NewExpense},
    monthly_summary::MonthlySummary,
};

/// The errors that may occur while talking to the expense API.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend rejected the request and explained why.
    ///
    /// The message comes from the `status` field of the error body and is
    /// shown to the user verbatim.
    #[error("{message}")]
    Server { message: String },

    /// No usable response: the connection failed, timed out, or the body
    /// could not be decoded.
    #[error("{0}")]
    Transport(String),
}

/// The operations the expense API offers.
#[async_trait]
pub trait ExpenseBackend: std::fmt::Debug + Send + Sync {
    /// Store a new expense and return the backend's status message.
    async fn create_expense(&self, expense: &NewExpense) -> Result<String, GatewayError>;

    /// Delete the expense with `id` and return the backend's status message.
    async fn delete_expense(&self, id: ExpenseId) -> Result<String, GatewayError>;

    /// Get the totals of the most recent months.
    async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, GatewayError>;

    /// Get every stored expense.
    async fn list_expenses(&self) -> Result<Vec<Expense>, GatewayError>;

    /// Get the spending per category, either over all dates or for one date.
    async fn fetch_category_breakdown(
        &self,
        date: &DateSelection,
    ) -> Result<CategoryBreakdown, GatewayError>;
}
