//! Caller-facing facade over a store client.

use serde_json::{Map, Value};

use crate::batch::dispatch_batch;
use crate::client::StoreClient;
use crate::error::{Error, Result};
use crate::format::{format_conditions, format_item, UnsupportedPolicy};
use crate::request::{PlainItem, PutItemRequest, QueryRequest};
use crate::unmarshal::unmarshal_items;

/// Default query limit applied when the caller passes `None`.
pub const DEFAULT_QUERY_LIMIT: u32 = 10;

/// A store model: marshals plain key/value data in and out of a
/// [`StoreClient`].
///
/// Holds no state beyond the client and the unsupported-attribute policy;
/// every call operates on caller-supplied data and returns caller-owned
/// results.
pub struct StoreModel<C> {
    client: C,
    policy: UnsupportedPolicy,
}

impl<C: StoreClient> StoreModel<C> {
    /// Wrap a store client with the default [`UnsupportedPolicy::Skip`]
    /// policy.
    pub fn new(client: C) -> StoreModel<C> {
        StoreModel {
            client,
            policy: UnsupportedPolicy::default(),
        }
    }

    /// Wrap a store client with an explicit unsupported-attribute policy.
    pub fn with_policy(client: C, policy: UnsupportedPolicy) -> StoreModel<C> {
        StoreModel { client, policy }
    }

    /// Write one item.
    ///
    /// Attribute values are wire-tagged and stringified; attributes with
    /// unsupported types are handled per the model's policy. Store failures
    /// propagate as [`Error::Store`].
    pub fn put_item(&mut self, table: &str, item: &Map<String, Value>) -> Result<()> {
        let item = format_item(item, self.policy)?;
        let request = PutItemRequest {
            table_name: table.to_string(),
            item,
        };
        self.client
            .put_item(&request)
            .map_err(|source| Error::Store { source })
    }

    /// Write many items, chunked into batch windows of at most
    /// [`BATCH_LIMIT`](crate::batch::BATCH_LIMIT).
    ///
    /// See [`dispatch_batch`] for window and failure semantics.
    pub fn batch_put_item<I>(&mut self, table: &str, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        dispatch_batch(&mut self.client, table, items, self.policy)
    }

    /// Query a table with one condition per attribute.
    ///
    /// Condition keys are `"<attribute> <operator>"` with an operator from
    /// `< <= > >= = != ~`; the `~` (BETWEEN) operator takes a two-element
    /// array as its value. `limit` defaults to [`DEFAULT_QUERY_LIMIT`];
    /// `options` passes extra query API fields through opaquely. Returned
    /// items are plain mappings with stringified values.
    pub fn query(
        &mut self,
        table: &str,
        conditions: &Map<String, Value>,
        limit: Option<u32>,
        options: Map<String, Value>,
    ) -> Result<Vec<PlainItem>> {
        let key_conditions = format_conditions(conditions)?;
        let request = QueryRequest {
            table_name: table.to_string(),
            key_conditions,
            limit: limit.unwrap_or(DEFAULT_QUERY_LIMIT),
            options,
        };
        let response = self
            .client
            .query(&request)
            .map_err(|source| Error::Store { source })?;
        Ok(unmarshal_items(&response.items))
    }

    /// Borrow the underlying store client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Consume the model and return the underlying store client.
    pub fn into_inner(self) -> C {
        self.client
    }
}
