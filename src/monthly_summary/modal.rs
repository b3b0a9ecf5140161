//! The previous months modal and the button that opens it.

use maud::{Markup, html};

use crate::{endpoints, html::BUTTON_SECONDARY_STYLE, monthly_summary::ClientId};

pub(crate) const MODAL_ID: &str = "previous-months-modal";
pub(crate) const CONTAINER_ID: &str = "monthly-expenses-container";

/// Whether the modal is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// The things that change whether the modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// A summary fetch succeeded and its content was rendered.
    SummaryLoaded,
    /// The close button or the backdrop was clicked.
    Closed,
}

impl ModalState {
    /// The state after `event`.
    ///
    /// A failed fetch is not an event: the modal keeps its current state.
    pub fn on(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::SummaryLoaded => ModalState::Visible,
            ModalEvent::Closed => ModalState::Hidden,
        }
    }
}

/// The button that fetches the monthly summary and opens the modal.
///
/// A new click replaces any fetch still in flight from an earlier click.
/// `client` identifies the page, so that only its own fetches are superseded.
pub(crate) fn previous_months_button(client: ClientId) -> Markup {
    html! {
        button
            id="previous-months-button"
            type="button"
            class=(BUTTON_SECONDARY_STYLE)
            hx-get=(endpoints::MONTHLY_SUMMARY)
            hx-target={ "#" (MODAL_ID) }
            hx-swap="outerHTML"
            hx-sync="this:replace"
            hx-vals=(format!(r#"{{"client": {client}}}"#))
            hx-target-error="#alert-container"
        {
            "View previous months"
        }
    }
}

/// The modal in `state`. A hidden modal never carries content.
pub(crate) fn monthly_summary_modal(state: ModalState, content: Markup) -> Markup {
    let visibility = match state {
        ModalState::Hidden => "hidden",
        ModalState::Visible => "flex",
    };

    html! {
        div
            id=(MODAL_ID)
            class={ "fixed inset-0 z-50 items-center justify-center p-4 bg-black/50 " (visibility) }
            role="dialog"
            aria-modal="true"
            aria-labelledby="previous-months-title"
            aria-hidden=[(state == ModalState::Hidden).then_some("true")]
            hx-get=(endpoints::CLOSE_MONTHLY_SUMMARY)
            hx-trigger={ "click[target.id=='" (MODAL_ID) "']" }
            hx-target="this"
            hx-swap="outerHTML"
        {
            div
                class="w-full max-w-2xl max-h-[80vh] overflow-y-auto p-6 space-y-4 \
                    bg-white rounded-lg shadow dark:bg-gray-800 text-gray-900 dark:text-white"
            {
                div class="flex justify-between items-center"
                {
                    h3 id="previous-months-title" class="text-2xl font-bold" { "Previous Months" }

                    button
                        id="close-modal"
                        type="button"
                        aria-label="Close"
                        class="text-2xl font-bold text-gray-500 hover:text-gray-700"
                        hx-get=(endpoints::CLOSE_MONTHLY_SUMMARY)
                        hx-target={ "#" (MODAL_ID) }
                        hx-swap="outerHTML"
                    {
                        "×"
                    }
                }

                div id=(CONTAINER_ID) class="space-y-4"
                {
                    @if state == ModalState::Visible {
                        (content)
                    }
                }
            }
        }
    }
}
