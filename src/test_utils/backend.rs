//! An in-memory [ExpenseBackend] that records every call made to it.

use std::sync::Mutex;

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::{
    category_breakdown::{CategoryBreakdown, DateSelection},
    expense::{Expense, ExpenseId, NewExpense},
    gateway::{ExpenseBackend, GatewayError},
    monthly_summary::MonthlySummary,
};

const ADDED_MESSAGE: &str = "Expense added successfully";
const DELETED_MESSAGE: &str = "Expense deleted successfully";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BackendCall {
    CreateExpense(NewExpense),
    DeleteExpense(ExpenseId),
    FetchMonthlySummary,
    ListExpenses,
    FetchCategoryBreakdown(DateSelection),
}

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    expenses: Mutex<Vec<Expense>>,
    monthly_summary: Mutex<MonthlySummary>,
    category_breakdown: Option<CategoryBreakdown>,
    failure: Option<GatewayError>,
    list_failure: Option<GatewayError>,
    calls: Mutex<Vec<BackendCall>>,
}

impl FakeBackend {
    pub(crate) fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = Mutex::new(expenses);
        self
    }

    pub(crate) fn with_monthly_summary(self, summary: MonthlySummary) -> Self {
        self.set_monthly_summary(summary);
        self
    }

    /// Change the summary returned by later fetches.
    pub(crate) fn set_monthly_summary(&self, summary: MonthlySummary) {
        *self.monthly_summary.lock().unwrap() = summary;
    }

    pub(crate) fn with_category_breakdown(mut self, breakdown: CategoryBreakdown) -> Self {
        self.category_breakdown = Some(breakdown);
        self
    }

    /// Make every call fail with `error`.
    pub(crate) fn with_failure(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Make only [ExpenseBackend::list_expenses] fail with `error`.
    pub(crate) fn with_list_failure(mut self, error: GatewayError) -> Self {
        self.list_failure = Some(error);
        self
    }

    pub(crate) fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn expenses(&self) -> Vec<Expense> {
        self.expenses.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExpenseBackend for FakeBackend {
    async fn create_expense(&self, new_expense: &NewExpense) -> Result<String, GatewayError> {
        self.record(BackendCall::CreateExpense(new_expense.clone()))?;

        let mut expenses = self.expenses.lock().unwrap();
        let next_id = expenses
            .iter()
            .map(|expense| expense.expense_id)
            .max()
            .unwrap_or_default()
            + 1;
        expenses.push(expense(
            next_id,
            new_expense.category(),
            new_expense.amount().parse().unwrap(),
            new_expense.date(),
        ));

        Ok(ADDED_MESSAGE.to_owned())
    }

    async fn delete_expense(&self, id: ExpenseId) -> Result<String, GatewayError> {
        self.record(BackendCall::DeleteExpense(id))?;

        self.expenses
            .lock()
            .unwrap()
            .retain(|expense| expense.expense_id != id);

        Ok(DELETED_MESSAGE.to_owned())
    }

    async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, GatewayError> {
        self.record(BackendCall::FetchMonthlySummary)?;

        Ok(self.monthly_summary.lock().unwrap().clone())
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, GatewayError> {
        self.record(BackendCall::ListExpenses)?;

        match &self.list_failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.expenses()),
        }
    }

    async fn fetch_category_breakdown(
        &self,
        date: &DateSelection,
    ) -> Result<CategoryBreakdown, GatewayError> {
        self.record(BackendCall::FetchCategoryBreakdown(date.clone()))?;

        Ok(self
            .category_breakdown
            .clone()
            .unwrap_or_else(|| CategoryBreakdown {
                expenses_by_category: IndexMap::new(),
                all_dates: Vec::new(),
                selected_date: date.as_path_segment().to_owned(),
            }))
    }
}

pub(crate) fn expense(id: ExpenseId, category: &str, amount: f64, date: &str) -> Expense {
    Expense {
        expense_id: id,
        category: category.to_owned(),
        amount,
        date: date.to_owned(),
    }
}
