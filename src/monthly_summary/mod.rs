//! The previous months modal: a per-month breakdown of spending, most recent
//! month first.

mod endpoint;
mod generation;
mod modal;
mod models;
mod view;

pub use endpoint::{close_monthly_summary_endpoint, get_monthly_summary_endpoint};
pub use generation::{ClientId, RequestGeneration};
pub use models::{MonthAggregate, MonthlySummary, months_newest_first};

pub(crate) use modal::{ModalState, monthly_summary_modal, previous_months_button};
