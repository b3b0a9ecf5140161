//! Expenses: validating new ones, listing, adding and deleting them.

mod create;
mod delete;
mod domain;
mod list;
mod page;
mod store;

pub use create::create_expense_endpoint;
pub use delete::delete_expense_endpoint;
pub use domain::{Expense, ExpenseForm, ExpenseId, NewExpense, ValidationError};
pub use page::get_expenses_page;
pub use store::{ExpenseStore, total_amount};

/// The htmx event fired on the page after an expense was added or deleted.
///
/// Sections derived from the expenses listen for it and reload themselves.
pub const EXPENSES_CHANGED_EVENT: &str = "expenses-changed";
