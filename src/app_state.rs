//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{
    Error, expense::ExpenseStore, gateway::ExpenseBackend,
    monthly_summary::RequestGeneration, timezone::get_local_offset,
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The gateway to the expense API.
    pub backend: Arc<dyn ExpenseBackend>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The most recent expense listing, re-rendered after each mutation.
    pub(crate) expense_store: ExpenseStore,

    /// Orders overlapping monthly summary fetches.
    pub(crate) summary_requests: RequestGeneration,
}

impl AppState {
    /// Create a new [AppState] that talks to the expense API through `backend`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(backend: Arc<dyn ExpenseBackend>, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            backend,
            local_timezone: local_timezone.to_owned(),
            expense_store: ExpenseStore::default(),
            summary_requests: RequestGeneration::default(),
        })
    }
}
