//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    category_breakdown::get_category_breakdown_endpoint,
    daily_spending::get_daily_spending_endpoint,
    endpoints,
    expense::{create_expense_endpoint, delete_expense_endpoint, get_expenses_page},
    logging::logging_middleware,
    monthly_summary::{close_monthly_summary_endpoint, get_monthly_summary_endpoint},
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::MONTHLY_SUMMARY, get(get_monthly_summary_endpoint))
        .route(
            endpoints::CLOSE_MONTHLY_SUMMARY,
            get(close_monthly_summary_endpoint),
        )
        .route(
            endpoints::CATEGORY_BREAKDOWN,
            get(get_category_breakdown_endpoint),
        )
        .route(endpoints::DAILY_SPENDING, get(get_daily_spending_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
