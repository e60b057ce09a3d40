//! Wire request and response bodies.
//!
//! Each struct serializes to the exact JSON shape the store's API expects;
//! field names are PascalCase on the wire (`TableName`, `KeyConditions`,
//! `RequestItems`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::operator::ComparisonOperator;
use crate::value::WireValue;

/// A formatted item: attribute name to tagged wire value.
pub type FormattedItem = BTreeMap<String, WireValue>;

/// An unmarshaled item: attribute name to raw stringified value.
pub type PlainItem = BTreeMap<String, String>;

/// Body of a single-item write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemRequest {
    pub table_name: String,
    pub item: FormattedItem,
}

/// One put request inside a batch write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRequest {
    pub item: FormattedItem,
}

/// One write request inside a batch window. Only puts are supported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteRequest {
    pub put_request: PutRequest,
}

/// Body of a batch write: one window of at most
/// [`BATCH_LIMIT`](crate::batch::BATCH_LIMIT) write requests per table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteRequest {
    pub request_items: BTreeMap<String, Vec<WriteRequest>>,
}

impl BatchWriteRequest {
    /// Build a single-table batch write from one window of requests.
    pub fn for_table(table: &str, window: Vec<WriteRequest>) -> BatchWriteRequest {
        let mut request_items = BTreeMap::new();
        request_items.insert(table.to_string(), window);
        BatchWriteRequest { request_items }
    }
}

/// One formatted query condition: an operator plus its bound list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyCondition {
    pub comparison_operator: ComparisonOperator,
    pub attribute_value_list: Vec<WireValue>,
}

/// Body of a query. Extra query API options pass through `options` opaquely,
/// flattened into the top-level request object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    pub table_name: String,
    pub key_conditions: BTreeMap<String, KeyCondition>,
    pub limit: u32,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// A query response: tagged items as the store returns them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_item_request_shape() {
        let mut item = FormattedItem::new();
        item.insert("Id".to_string(), WireValue::N("251".to_string()));
        item.insert("Comment".to_string(), WireValue::S("hello".to_string()));
        let request = PutItemRequest {
            table_name: "posts".to_string(),
            item,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "TableName": "posts",
                "Item": {
                    "Id": {"N": "251"},
                    "Comment": {"S": "hello"},
                }
            })
        );
    }

    #[test]
    fn test_batch_write_request_shape() {
        let mut item = FormattedItem::new();
        item.insert("Id".to_string(), WireValue::N("1".to_string()));
        let window = vec![WriteRequest {
            put_request: PutRequest { item },
        }];
        let request = BatchWriteRequest::for_table("posts", window);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "RequestItems": {
                    "posts": [
                        {"PutRequest": {"Item": {"Id": {"N": "1"}}}}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_query_request_flattens_options() {
        let mut options = Map::new();
        options.insert("ScanIndexForward".to_string(), json!(false));
        let request = QueryRequest {
            table_name: "posts".to_string(),
            key_conditions: BTreeMap::new(),
            limit: 10,
            options,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "TableName": "posts",
                "KeyConditions": {},
                "Limit": 10,
                "ScanIndexForward": false,
            })
        );
    }

    #[test]
    fn test_query_response_missing_items_defaults_empty() {
        let response: QueryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.items.is_empty());
    }
}
