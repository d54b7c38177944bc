//! Guard against issuing the same request twice while the first is pending.
//!
//! Requests are keyed by operation and, where there is one, the entity they
//! act on. A second attempt with the same key is dropped until the first
//! finishes, so a double click on "Save" sends one request.

use std::{collections::HashSet, fmt};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchSession,
    FetchCatalog,
    Login,
    Signup,
    Logout,
    StartOAuth,
    CreateCafe,
    CreateCoffee,
    DeleteCoffee,
    FetchNote,
    SaveNote,
    DeleteNote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub operation: Operation,
    pub entity_id: Option<i32>,
}

impl RequestKey {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            entity_id: None,
        }
    }

    pub fn for_entity(operation: Operation, entity_id: i32) -> Self {
        Self {
            operation,
            entity_id: Some(entity_id),
        }
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity_id {
            Some(id) => write!(f, "{:?} #{}", self.operation, id),
            None => write!(f, "{:?}", self.operation),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight {
    keys: HashSet<RequestKey>,
}

impl InFlight {
    /// Registers a request.
    ///
    /// # Returns
    /// - `true` - No identical request was pending; the caller may send it
    /// - `false` - An identical request is pending; the caller must not send
    pub fn try_begin(&mut self, key: RequestKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: &RequestKey) {
        self.keys.remove(key);
    }

    pub fn is_pending(&self, key: &RequestKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Registration of a pending request in the shared [`InFlight`] set.
///
/// The key is released when the ticket drops, which also covers the task
/// being cancelled because its component unmounted.
pub struct InFlightTicket {
    inflight: Signal<InFlight>,
    key: RequestKey,
}

impl InFlightTicket {
    /// Registers `key` for the lifetime of the returned ticket.
    ///
    /// # Returns
    /// - `Ok(InFlightTicket)` - No identical request was pending
    /// - `Err(Error::DuplicateRequest)` - The same operation on the same entity is still awaiting its response
    pub fn acquire(mut inflight: Signal<InFlight>, key: RequestKey) -> Result<Self, Error> {
        if !inflight.write().try_begin(key) {
            tracing::debug!("Dropped duplicate request: {}", key);
            return Err(Error::DuplicateRequest(key));
        }

        Ok(Self { inflight, key })
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        // The signal is gone once the owning scope is torn down
        if let Ok(mut inflight) = self.inflight.try_write() {
            inflight.finish(&self.key);
        }
    }
}
