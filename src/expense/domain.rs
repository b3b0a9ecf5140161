//! Core expense domain types and the validation of submitted expenses.

use serde::{Deserialize, Serialize};

/// Backend identifier for an expense.
pub type ExpenseId = i64;

/// An expense as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// Form data for the add expense form.
///
/// Missing fields decode as empty strings so that they are reported by
/// [NewExpense::try_from_form] rather than rejected by the extractor.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
}

/// The reasons a submitted expense is rejected before it reaches the backend.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The category was empty or only whitespace.
    #[error("Please enter a category")]
    EmptyCategory,

    /// The amount was empty, not a number, not finite, or not greater than zero.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// No date was selected.
    #[error("Please select a date")]
    MissingDate,
}

/// An expense that passed validation and may be sent to the backend.
///
/// The amount is kept as the trimmed text the user entered, the backend does
/// its own parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    category: String,
    amount: String,
    date: String,
}

impl NewExpense {
    /// Validate the submitted form.
    ///
    /// The fields are checked in the order category, amount, date and the
    /// first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns a [ValidationError] naming the first invalid field.
    pub fn try_from_form(form: &ExpenseForm) -> Result<Self, ValidationError> {
        let category = form.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let amount = form.amount.trim();
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {}
            _ => return Err(ValidationError::InvalidAmount),
        }

        let date = form.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }

        Ok(Self {
            category: category.to_owned(),
            amount: amount.to_owned(),
            date: date.to_owned(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpenseForm, NewExpense, ValidationError};

    fn form(category: &str, amount: &str, date: &str) -> ExpenseForm {
        ExpenseForm {
            category: category.to_owned(),
            amount: amount.to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn accepts_valid_expense_and_trims_fields() {
        let expense = NewExpense::try_from_form(&form("  Groceries ", " 12.50 ", "2024-03-01"))
            .expect("Could not validate expense");

        assert_eq!(expense.category(), "Groceries");
        assert_eq!(expense.amount(), "12.50");
        assert_eq!(expense.date(), "2024-03-01");
    }

    #[test]
    fn rejects_blank_category() {
        for category in ["", " ", "\t\n"] {
            assert_eq!(
                NewExpense::try_from_form(&form(category, "10", "2024-03-01")),
                Err(ValidationError::EmptyCategory),
                "category {category:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_amounts_that_are_not_positive_numbers() {
        for amount in ["0", "-5", "abc", "", "  ", "0.00", "NaN", "inf", "-inf"] {
            assert_eq!(
                NewExpense::try_from_form(&form("Food", amount, "2024-03-01")),
                Err(ValidationError::InvalidAmount),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_small_and_exponent_amounts() {
        for amount in ["0.01", "1e3", "7"] {
            assert!(
                NewExpense::try_from_form(&form("Food", amount, "2024-03-01")).is_ok(),
                "amount {amount:?} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_missing_date() {
        assert_eq!(
            NewExpense::try_from_form(&form("Food", "10", " ")),
            Err(ValidationError::MissingDate)
        );
    }

    #[test]
    fn reports_category_before_amount() {
        assert_eq!(
            NewExpense::try_from_form(&form("", "abc", "")),
            Err(ValidationError::EmptyCategory)
        );
    }

    #[test]
    fn error_messages_match_user_prompts() {
        assert_eq!(
            ValidationError::EmptyCategory.to_string(),
            "Please enter a category"
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(
            ValidationError::MissingDate.to_string(),
            "Please select a date"
        );
    }
}
