//! The URIs served by the application.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

/// The expense page.
pub const ROOT: &str = "/";
/// The route to create an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route that fetches the previous months and opens the modal.
pub const MONTHLY_SUMMARY: &str = "/api/monthly_summary";
/// The route that closes the previous months modal.
pub const CLOSE_MONTHLY_SUMMARY: &str = "/api/monthly_summary/close";
/// The route for the spending per category fragment.
pub const CATEGORY_BREAKDOWN: &str = "/api/category_breakdown";
/// The route for the spending per day fragment.
pub const DAILY_SPENDING: &str = "/api/daily_spending";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
