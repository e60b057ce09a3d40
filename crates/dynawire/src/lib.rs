//! # dynawire
//!
//! A marshaling and batch-dispatch layer for key-value stores whose wire
//! protocol tags every attribute value with a type code (`{"N": "123"}`,
//! `{"S": "text"}`).
//!
//! Callers hand over plain `serde_json` mappings; dynawire infers the wire
//! type tag for each value, builds protocol-compliant request bodies (point
//! writes, 25-item batch windows, conditional queries), and unmarshals tagged
//! responses back into plain mappings. The store's network client stays
//! behind the [`StoreClient`] trait.
//!
//! ## Quick start
//!
//! ```no_run
//! use dynawire::{BoxError, StoreClient, StoreModel};
//! use dynawire::request::{BatchWriteRequest, PutItemRequest, QueryRequest, QueryResponse};
//! use serde_json::json;
//!
//! // Any transport that can perform the three store calls works.
//! struct MyTransport;
//!
//! impl StoreClient for MyTransport {
//!     fn put_item(&mut self, request: &PutItemRequest) -> Result<(), BoxError> {
//!         // send serde_json::to_vec(request)? over the wire
//!         Ok(())
//!     }
//!     fn batch_write(&mut self, request: &BatchWriteRequest) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//!     fn query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BoxError> {
//!         Ok(QueryResponse::default())
//!     }
//! }
//!
//! let mut model = StoreModel::new(MyTransport);
//!
//! // Write one item; value types pick the wire tags.
//! let item = json!({"Id": 251, "Comment": "hello", "Date": 1376038837.0});
//! model.put_item("posts", item.as_object().unwrap()).unwrap();
//!
//! // Query with "<attribute> <operator>" condition keys.
//! let conditions = json!({"Id =": 251, "Date ~": [1376030000.0, 1376040000.0]});
//! let items = model
//!     .query("posts", conditions.as_object().unwrap(), None, Default::default())
//!     .unwrap();
//! ```

pub mod batch;
pub mod client;
pub mod error;
pub mod format;
pub mod model;
pub mod operator;
pub mod request;
pub mod unmarshal;
pub mod value;

pub use batch::BATCH_LIMIT;
pub use client::StoreClient;
pub use error::{BoxError, Error, Result};
pub use format::UnsupportedPolicy;
pub use model::StoreModel;
pub use operator::ComparisonOperator;
pub use request::{FormattedItem, PlainItem};
pub use value::{WireType, WireValue};
