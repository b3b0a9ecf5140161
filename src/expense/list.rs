//! The expense list section of the page.

use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{Expense, total_amount},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

pub(crate) const EXPENSE_LIST_ID: &str = "expense-list";
pub(crate) const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this expense?";
pub(crate) const NO_EXPENSES_MESSAGE: &str = "No expenses recorded.";
pub(crate) const LIST_UNAVAILABLE_MESSAGE: &str = "Could not load expenses";

/// The expense list with its running total, in listing order.
pub(crate) fn expense_list_view(expenses: &[Expense]) -> Markup {
    let table_row = |expense: &Expense| {
        let delete_url = endpoints::format_endpoint(endpoints::EXPENSE, expense.expense_id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.expense_id)
            {
                td class=(TABLE_CELL_STYLE) { (expense.date) }
                td class=(TABLE_CELL_STYLE) { (expense.category) }
                td class={ (TABLE_CELL_STYLE) " text-right" } { (format_currency(expense.amount)) }
                td class=(TABLE_CELL_STYLE)
                {
                    button
                        type="button"
                        class=(BUTTON_DELETE_STYLE)
                        data-id=(expense.expense_id)
                        hx-delete=(delete_url)
                        hx-confirm=(DELETE_CONFIRM_MESSAGE)
                        hx-target={ "#" (EXPENSE_LIST_ID) }
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                    {
                        "Delete"
                    }
                }
            }
        )
    };

    html! {
        section id=(EXPENSE_LIST_ID) class=(CARD_STYLE)
        {
            header class="flex justify-between items-end"
            {
                h2 class="text-xl font-bold" { "Expenses" }
                p id="expense-total" class="text-lg font-semibold"
                {
                    "Total: " (format_currency(total_amount(expenses)))
                }
            }

            @if expenses.is_empty() {
                p class="text-gray-500" { (NO_EXPENSES_MESSAGE) }
            } @else {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE)
                            {
                                span class="sr-only" { "Actions" }
                            }
                        }
                    }

                    tbody
                    {
                        @for expense in expenses {
                            (table_row(expense))
                        }
                    }
                }
            }
        }
    }
}

/// Shown in place of the list when the expense API could not be reached.
pub(crate) fn expense_list_unavailable_view() -> Markup {
    html! {
        section id=(EXPENSE_LIST_ID) class=(CARD_STYLE)
        {
            h2 class="text-xl font-bold" { "Expenses" }
            p class="text-red-600 dark:text-red-400" { (LIST_UNAVAILABLE_MESSAGE) }
        }
    }
}
