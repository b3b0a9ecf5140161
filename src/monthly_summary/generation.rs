//! Ordering of overlapping monthly summary fetches.
//!
//! Every rendered page gets its own [ClientId]. Each fetch takes a [Ticket]
//! for its client, and when the backend answers the result is only rendered
//! if that client has not started a newer fetch in the meantime. Fetches from
//! different pages never supersede each other.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use serde::Deserialize;

/// Identifies the page a fetch was made from.
///
/// Requests that do not name a client share the default id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ClientId(u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    client: ClientId,
    number: u64,
}

#[derive(Debug, Default)]
struct Generations {
    last_client: u64,
    last_ticket: u64,
    /// The newest unfinished ticket of each client.
    in_flight: HashMap<ClientId, u64>,
}

/// Shared bookkeeping of started fetches.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    generations: Arc<Mutex<Generations>>,
}

impl RequestGeneration {
    // The guarded data is plain counters, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Generations> {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// A new id for a freshly rendered page.
    pub fn register_client(&self) -> ClientId {
        let mut generations = self.lock();
        generations.last_client += 1;

        ClientId(generations.last_client)
    }

    /// Start a fetch for `client`, superseding that client's earlier fetches.
    pub fn begin(&self, client: ClientId) -> Ticket {
        let mut generations = self.lock();
        generations.last_ticket += 1;
        let number = generations.last_ticket;
        generations.in_flight.insert(client, number);

        Ticket { client, number }
    }

    /// Finish the fetch of `ticket`, returning whether its result should be
    /// shown, i.e. no newer fetch was started by the same client.
    ///
    /// Only clients with an unfinished fetch are remembered.
    pub fn finish(&self, ticket: Ticket) -> bool {
        let mut generations = self.lock();

        match generations.in_flight.get(&ticket.client) {
            Some(&newest) if newest == ticket.number => {
                generations.in_flight.remove(&ticket.client);
                true
            }
            _ => false,
        }
    }
}
