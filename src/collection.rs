//! Collection view model
//!
//! Holds the authoritative list for one resource kind plus derived
//! filtered views. Every list is fetched whole and filtered client-side;
//! datasets are assumed small (a single organization's madrasas, teachers
//! and students), which is a load-bearing assumption rather than a
//! discovered limit. No pagination exists anywhere.

use std::future::Future;
use tracing::info;
use crate::utils::errors::Result;
use crate::utils::logging::log_collection_load;

/// Authoritative in-memory collection for a resource kind.
///
/// The collection only ever changes through `load`/`reconcile` (whole
/// replacement from the server) and the single sanctioned local-toggle
/// exception. A failed load degrades to the empty list and is logged;
/// pages that surface a spinner read `last_load_failed`.
#[derive(Debug)]
pub struct Collection<T> {
    resource: String,
    items: Vec<T>,
    generation: u64,
    last_load_failed: bool,
}

impl<T> Collection<T> {
    /// Create an empty collection for the named resource kind
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            items: Vec::new(),
            generation: 0,
            last_load_failed: false,
        }
    }

    /// Fetch the full collection, replacing the current contents.
    ///
    /// Failures degrade silently to an empty list; the error is logged
    /// and recorded but not returned.
    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        match fetch().await {
            Ok(items) => {
                log_collection_load(&self.resource, items.len(), true);
                self.items = items;
                self.last_load_failed = false;
            }
            Err(e) => {
                log_collection_load(&self.resource, 0, false);
                tracing::warn!(resource = %self.resource, error = %e, "Collection load error");
                self.items = Vec::new();
                self.last_load_failed = true;
            }
        }
        self.generation += 1;
    }

    /// Authoritative re-fetch after a successful transition. Never an
    /// optimistic merge.
    pub async fn reconcile<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        info!(resource = %self.resource, "Reconciling collection after transition");
        self.load(fetch).await;
    }

    /// Pure derived view over the last-loaded collection. Never triggers
    /// a network call.
    pub fn filter_by<P>(&self, mut pred: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| pred(item)).collect()
    }

    /// The single sanctioned optimistic update: patch a boolean in place
    /// without a re-fetch. Returns the number of items changed.
    pub fn apply_local_toggle<F>(&mut self, mut toggle: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut changed = 0;
        for item in &mut self.items {
            if toggle(item) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.generation += 1;
        }
        changed
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every replacement, for staleness checks in views
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_load_failed(&self) -> bool {
        self.last_load_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::UmmahError;

    #[tokio::test]
    async fn test_load_replaces_items() {
        let mut collection = Collection::new("teachers");
        collection.load(|| async { Ok(vec![1, 2, 3]) }).await;

        assert_eq!(collection.items(), &[1, 2, 3]);
        assert_eq!(collection.generation(), 1);
        assert!(!collection.last_load_failed());

        collection.load(|| async { Ok(vec![4]) }).await;
        assert_eq!(collection.items(), &[4]);
        assert_eq!(collection.generation(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_empty() {
        let mut collection = Collection::new("teachers");
        collection.load(|| async { Ok(vec![1, 2, 3]) }).await;

        collection
            .load(|| async { Err(UmmahError::InvalidInput("boom".to_string())) })
            .await;

        assert!(collection.is_empty());
        assert!(collection.last_load_failed());
        assert_eq!(collection.generation(), 2);
    }

    #[tokio::test]
    async fn test_filter_is_pure() {
        let mut collection = Collection::new("numbers");
        collection.load(|| async { Ok(vec![1, 2, 3, 4, 5]) }).await;

        let even: Vec<&i32> = collection.filter_by(|n| n % 2 == 0);
        assert_eq!(even, vec![&2, &4]);

        // Underlying collection untouched
        assert_eq!(collection.len(), 5);
        assert_eq!(collection.generation(), 1);
    }

    #[tokio::test]
    async fn test_local_toggle_exception() {
        let mut collection = Collection::new("flags");
        collection
            .load(|| async { Ok(vec![(1, false), (2, false)]) })
            .await;

        let changed = collection.apply_local_toggle(|(id, flag)| {
            if *id == 2 {
                *flag = true;
                true
            } else {
                false
            }
        });

        assert_eq!(changed, 1);
        assert_eq!(collection.items()[1], (2, true));
        assert_eq!(collection.generation(), 2);
    }
}
