//! The seam to the external store client.
//!
//! The store's network client (connection setup, auth, transport retries) is
//! not this layer's concern. Anything that can take a wire body and perform
//! the call implements [`StoreClient`]; errors cross the seam as boxed trait
//! objects and are wrapped in [`Error::Store`](crate::error::Error::Store).

use crate::error::BoxError;
use crate::request::{BatchWriteRequest, PutItemRequest, QueryRequest, QueryResponse};

/// A synchronous client for the underlying store.
///
/// Methods take `&mut self` so buffered transports (sockets, connection
/// handles) can implement the trait directly.
pub trait StoreClient {
    /// Write a single item.
    fn put_item(&mut self, request: &PutItemRequest) -> Result<(), BoxError>;

    /// Write one batch window. The store enforces the per-call item cap;
    /// the batch dispatcher never exceeds it.
    fn batch_write(&mut self, request: &BatchWriteRequest) -> Result<(), BoxError>;

    /// Run a query and return the tagged items.
    fn query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BoxError>;
}
