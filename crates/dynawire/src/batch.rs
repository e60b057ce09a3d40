//! Batch dispatch: split a write set into bounded windows.

use serde_json::{Map, Value};
use tracing::debug;

use crate::client::StoreClient;
use crate::error::{Error, Result};
use crate::format::{format_item, UnsupportedPolicy};
use crate::request::{BatchWriteRequest, PutRequest, WriteRequest};

/// Maximum write requests per batch call, imposed by the store's protocol.
pub const BATCH_LIMIT: usize = 25;

/// Write all items to `table`, chunked into windows of at most
/// [`BATCH_LIMIT`].
///
/// The input is consumed lazily, so arbitrarily large (or streaming) item
/// sequences work without buffering everything up front. A full window is
/// dispatched immediately as one store call; the partial tail is dispatched
/// only if non-empty. Each window is a freshly-built sequence, never a reused
/// buffer.
///
/// Fail-fast: the first window error stops the run and propagates. Earlier
/// windows are not rolled back and later windows are not attempted; there is
/// no cross-window atomicity or retry at this layer.
pub fn dispatch_batch<C, I>(
    client: &mut C,
    table: &str,
    items: I,
    policy: UnsupportedPolicy,
) -> Result<()>
where
    C: StoreClient,
    I: IntoIterator<Item = Map<String, Value>>,
{
    let mut window: Vec<WriteRequest> = Vec::with_capacity(BATCH_LIMIT);
    let mut dispatched = 0usize;

    for item in items {
        let item = format_item(&item, policy)?;
        window.push(WriteRequest {
            put_request: PutRequest { item },
        });

        if window.len() == BATCH_LIMIT {
            let full = std::mem::replace(&mut window, Vec::with_capacity(BATCH_LIMIT));
            dispatched += 1;
            dispatch_window(client, table, full, dispatched)?;
        }
    }

    if !window.is_empty() {
        dispatched += 1;
        dispatch_window(client, table, window, dispatched)?;
    }

    Ok(())
}

fn dispatch_window<C: StoreClient>(
    client: &mut C,
    table: &str,
    window: Vec<WriteRequest>,
    ordinal: usize,
) -> Result<()> {
    debug!(window = ordinal, items = window.len(), "dispatching batch write");
    let request = BatchWriteRequest::for_table(table, window);
    client
        .batch_write(&request)
        .map_err(|source| Error::Store { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::request::{PutItemRequest, QueryRequest, QueryResponse};
    use serde_json::json;

    /// Records the size of every dispatched window; fails calls on demand.
    struct CountingStore {
        window_sizes: Vec<usize>,
        fail_on_window: Option<usize>,
    }

    impl CountingStore {
        fn new() -> CountingStore {
            CountingStore {
                window_sizes: Vec::new(),
                fail_on_window: None,
            }
        }
    }

    impl StoreClient for CountingStore {
        fn put_item(&mut self, _request: &PutItemRequest) -> std::result::Result<(), BoxError> {
            Ok(())
        }

        fn batch_write(
            &mut self,
            request: &BatchWriteRequest,
        ) -> std::result::Result<(), BoxError> {
            let size: usize = request.request_items.values().map(Vec::len).sum();
            self.window_sizes.push(size);
            if self.fail_on_window == Some(self.window_sizes.len()) {
                return Err("batch write rejected".into());
            }
            Ok(())
        }

        fn query(
            &mut self,
            _request: &QueryRequest,
        ) -> std::result::Result<QueryResponse, BoxError> {
            Ok(QueryResponse::default())
        }
    }

    fn items(n: usize) -> Vec<serde_json::Map<String, serde_json::Value>> {
        (0..n)
            .map(|i| match json!({"Id": i}) {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_sixty_items_dispatch_three_windows() {
        let mut store = CountingStore::new();
        dispatch_batch(&mut store, "posts", items(60), UnsupportedPolicy::Skip).unwrap();
        assert_eq!(store.window_sizes, vec![25, 25, 10]);
    }

    #[test]
    fn test_exact_multiple_skips_empty_tail() {
        let mut store = CountingStore::new();
        dispatch_batch(&mut store, "posts", items(50), UnsupportedPolicy::Skip).unwrap();
        assert_eq!(store.window_sizes, vec![25, 25]);
    }

    #[test]
    fn test_empty_input_dispatches_nothing() {
        let mut store = CountingStore::new();
        dispatch_batch(&mut store, "posts", items(0), UnsupportedPolicy::Skip).unwrap();
        assert!(store.window_sizes.is_empty());
    }

    #[test]
    fn test_small_input_single_partial_window() {
        let mut store = CountingStore::new();
        dispatch_batch(&mut store, "posts", items(3), UnsupportedPolicy::Skip).unwrap();
        assert_eq!(store.window_sizes, vec![3]);
    }

    #[test]
    fn test_window_count_matches_ceil_division() {
        for n in [1, 24, 25, 26, 49, 75, 101] {
            let mut store = CountingStore::new();
            dispatch_batch(&mut store, "posts", items(n), UnsupportedPolicy::Skip).unwrap();
            let expected_windows = (n + BATCH_LIMIT - 1) / BATCH_LIMIT;
            assert_eq!(store.window_sizes.len(), expected_windows, "n = {n}");
            assert!(
                store.window_sizes.iter().all(|&s| s <= BATCH_LIMIT),
                "window over limit for n = {n}"
            );
            assert_eq!(store.window_sizes.iter().sum::<usize>(), n, "n = {n}");
        }
    }

    #[test]
    fn test_fail_fast_stops_later_windows() {
        let mut store = CountingStore::new();
        store.fail_on_window = Some(2);
        let err = dispatch_batch(&mut store, "posts", items(60), UnsupportedPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err, Error::Store { .. }));
        // The second window was attempted and failed; the third never fired.
        assert_eq!(store.window_sizes, vec![25, 25]);
    }

    #[test]
    fn test_fail_policy_propagates_from_formatting() {
        let mut store = CountingStore::new();
        let bad = vec![match json!({"Flag": true}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }];
        let err = dispatch_batch(&mut store, "posts", bad, UnsupportedPolicy::Fail).unwrap_err();
        assert!(matches!(err, Error::UnsupportedAttribute { .. }));
        assert!(store.window_sizes.is_empty());
    }
}
