// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The client trait concrete transports implement.

use thiserror::Error;
use uuid::Uuid;

use crate::query::{ColumnSet, Query};
use crate::record::Record;
use crate::request::{NamedRequest, NamedResponse};

/// Any failure raised by the remote layer.
///
/// Transports fold every failure mode (network, authentication expiry,
/// server-side rejection, validation) into one message-bearing fault; the
/// manager wraps it with the operation that was in flight. There is no retry
/// machinery at this level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFault {
    /// Human-readable failure description from the remote layer.
    pub message: String,
}

impl TransportFault {
    /// Creates a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        TransportFault {
            message: message.into(),
        }
    }
}

/// Typed operations against the remote record store.
///
/// Implementations are synchronous and blocking; blocking duration, timeout
/// and retry policy are entirely the transport's responsibility. A client
/// value is not assumed safe for concurrent use; callers serialize calls or
/// use one client per thread.
pub trait RemoteClient {
    /// Persists a new record and returns the identifier the service assigned.
    fn create(&self, record: &Record) -> Result<Uuid, TransportFault>;

    /// Retrieves one record by identifier; `None` when absent.
    fn retrieve(
        &self,
        entity: &str,
        id: Uuid,
        columns: &ColumnSet,
    ) -> Result<Option<Record>, TransportFault>;

    /// Retrieves every record matching the query, in query order.
    fn retrieve_multiple(&self, query: &Query) -> Result<Vec<Record>, TransportFault>;

    /// Updates an existing record in place.
    fn update(&self, record: &Record) -> Result<(), TransportFault>;

    /// Deletes a record by entity name and identifier.
    fn delete(&self, entity: &str, id: Uuid) -> Result<(), TransportFault>;

    /// Executes a named request and returns its matched response.
    fn execute(&self, request: &NamedRequest) -> Result<NamedResponse, TransportFault>;
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
