//! The expense list shown on the page.
//!
//! The backend owns the data. The store keeps the most recent listing so that
//! a successful mutation can be reflected by re-rendering the list instead of
//! reloading the whole page.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    expense::{Expense, ExpenseId},
    gateway::ExpenseBackend,
};

#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Arc<Mutex<Vec<Expense>>>,
}

impl ExpenseStore {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<Expense>>, Error> {
        self.expenses
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    /// Replace the stored expenses with a fresh listing from `backend`.
    ///
    /// The store is left untouched if the listing fails.
    ///
    /// # Errors
    ///
    /// Returns [Error::Gateway] if the listing fails, or
    /// [Error::StoreLockError] if the lock is poisoned.
    pub async fn refresh(&self, backend: &dyn ExpenseBackend) -> Result<Vec<Expense>, Error> {
        let expenses = backend.list_expenses().await?;
        self.replace_all(expenses.clone())?;

        Ok(expenses)
    }

    /// Replace the stored expenses with `expenses`.
    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<(), Error> {
        *self.lock()? = expenses;
        Ok(())
    }

    /// Remove the expense with `id`, returning whether it was present.
    pub fn remove(&self, id: ExpenseId) -> Result<bool, Error> {
        let mut expenses = self.lock()?;
        let count_before = expenses.len();
        expenses.retain(|expense| expense.expense_id != id);

        Ok(expenses.len() != count_before)
    }

    /// A copy of the stored expenses, in listing order.
    pub fn snapshot(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.lock()?.clone())
    }
}

/// The sum of the amounts of `expenses`.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .fold(0.0, |total, expense| total + expense.amount)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        gateway::GatewayError,
        test_utils::{BackendCall, FakeBackend, expense},
    };

    use super::{ExpenseStore, total_amount};

    #[tokio::test]
    async fn refresh_replaces_expenses() {
        let backend = FakeBackend::default().with_expenses(vec![
            expense(1, "Food", 5.0, "2024-01-01"),
            expense(2, "Rent", 500.0, "2024-01-02"),
        ]);
        let store = ExpenseStore::default();
        store
            .replace_all(vec![expense(9, "Old", 1.0, "2023-01-01")])
            .unwrap();

        let expenses = store.refresh(&backend).await.unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(store.snapshot().unwrap(), expenses);
        assert_eq!(backend.calls(), vec![BackendCall::ListExpenses]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_expenses() {
        let backend = FakeBackend::default()
            .with_list_failure(GatewayError::Transport("timed out".to_owned()));
        let store = ExpenseStore::default();
        let previous = vec![expense(1, "Food", 5.0, "2024-01-01")];
        store.replace_all(previous.clone()).unwrap();

        let result = store.refresh(&backend).await;

        assert_eq!(
            result,
            Err(Error::Gateway(GatewayError::Transport(
                "timed out".to_owned()
            )))
        );
        assert_eq!(store.snapshot().unwrap(), previous);
    }

    #[test]
    fn remove_reports_whether_expense_was_present() {
        let store = ExpenseStore::default();
        store
            .replace_all(vec![
                expense(1, "Food", 5.0, "2024-01-01"),
                expense(2, "Rent", 500.0, "2024-01-02"),
            ])
            .unwrap();

        assert_eq!(store.remove(1), Ok(true));
        assert_eq!(store.remove(1), Ok(false));
        assert_eq!(
            store.snapshot().unwrap(),
            vec![expense(2, "Rent", 500.0, "2024-01-02")]
        );
    }

    #[test]
    fn total_sums_amounts() {
        let expenses = vec![
            expense(1, "Food", 5.25, "2024-01-01"),
            expense(2, "Rent", 500.0, "2024-01-02"),
        ];

        assert_eq!(total_amount(&expenses), 505.25);
        assert_eq!(total_amount(&[]), 0.0);
        assert!(total_amount(&[]).is_sign_positive());
    }
}
