//! Rendered listing responses, kept until a mutation invalidates them.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use synergy_infra::{ViewCache, ViewPath};

/// The cache behind the dashboard listings.
///
/// Listing handlers serve from here when they can; mutation services drop
/// entries through [`ViewCache`]. A listing whose entry nobody invalidated
/// keeps serving the old rendering even after the rows changed underneath.
#[derive(Debug, Default)]
pub struct ListingCache {
    rendered: Mutex<HashMap<ViewPath, serde_json::Value>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock keeps serving the map it holds; a cache never gets to
    // take a handler down.
    fn rendered(&self) -> MutexGuard<'_, HashMap<ViewPath, serde_json::Value>> {
        self.rendered.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, view: ViewPath) -> Option<serde_json::Value> {
        self.rendered().get(&view).cloned()
    }

    pub fn put(&self, view: ViewPath, body: serde_json::Value) {
        self.rendered().insert(view, body);
    }
}

impl ViewCache for ListingCache {
    fn invalidate(&self, view: ViewPath) {
        self.rendered().remove(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_only_touches_its_own_view() {
        let cache = ListingCache::new();
        cache.put(ViewPath::InvoiceListing, serde_json::json!({"items": [1]}));
        cache.put(ViewPath::CustomerListing, serde_json::json!({"items": [2]}));

        cache.invalidate(ViewPath::InvoiceListing);

        assert!(cache.get(ViewPath::InvoiceListing).is_none());
        assert_eq!(
            cache.get(ViewPath::CustomerListing),
            Some(serde_json::json!({"items": [2]}))
        );
    }

    #[test]
    fn a_poisoned_lock_keeps_serving() {
        let cache = std::sync::Arc::new(ListingCache::new());
        cache.put(ViewPath::InvoiceListing, serde_json::json!({"items": [1]}));

        let poisoner = cache.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.rendered.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert_eq!(
            cache.get(ViewPath::InvoiceListing),
            Some(serde_json::json!({"items": [1]}))
        );
        cache.invalidate(ViewPath::InvoiceListing);
        assert!(cache.get(ViewPath::InvoiceListing).is_none());
    }
}
