// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::{
    Document, DocumentStore, DocumentStoreError, Fields, ListenerRegistration, Query,
    SnapshotListener,
};

/// A document store living in memory. Supports live watches and lets callers inject watch
/// failures.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: RwLock<HashMap<String, BTreeMap<String, Fields>>>,
    watches: Mutex<HashMap<u64, Watch>>,
    next_watch_id: AtomicU64,
}

struct Watch {
    query: Query,
    listener: Arc<SnapshotListener>,
}

struct InMemoryListenerRegistration {
    inner: Weak<Inner>,
    watch_id: u64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered watches.
    pub fn watch_count(&self) -> usize {
        self.inner.watches.lock().len()
    }

    /// Delivers `error` to every watch on `collection`.
    pub fn fail_watches(&self, collection: &str, error: impl Fn() -> DocumentStoreError) {
        let listeners = self
            .inner
            .watches
            .lock()
            .values()
            .filter(|watch| watch.query.collection == collection)
            .map(|watch| watch.listener.clone())
            .collect::<Vec<_>>();

        for listener in listeners {
            listener(Err(error()));
        }
    }

    pub fn delete(&self, collection: &str, id: &str) {
        let removed = self
            .inner
            .collections
            .write()
            .get_mut(collection)
            .and_then(|documents| documents.remove(id))
            .is_some();

        if removed {
            self.inner.notify(collection);
        }
    }
}

impl Inner {
    fn run_query(&self, query: &Query) -> Vec<Document> {
        let collections = self.collections.read();
        let Some(documents) = collections.get(&query.collection) else {
            return vec![];
        };
        query.apply(
            documents
                .iter()
                .map(|(id, fields)| Document::new(id.clone(), fields.clone())),
        )
    }

    fn notify(&self, collection: &str) {
        // Listeners are called without holding any lock, since they may call back into the
        // store.
        let listeners = self
            .watches
            .lock()
            .values()
            .filter(|watch| watch.query.collection == collection)
            .map(|watch| (watch.query.clone(), watch.listener.clone()))
            .collect::<Vec<_>>();

        for (query, listener) in listeners {
            listener(Ok(self.run_query(&query)));
        }
    }

    fn merge(&self, collection: &str, id: &str, fields: Fields, create: bool) -> bool {
        {
            let mut collections = self.collections.write();
            let documents = collections.entry(collection.to_string()).or_default();

            match documents.get_mut(id) {
                Some(existing) => existing.extend(fields),
                None if create => {
                    documents.insert(id.to_string(), fields);
                }
                None => return false,
            }
        }

        self.notify(collection);
        true
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Ok(self
            .inner
            .collections
            .read()
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), DocumentStoreError> {
        self.inner.merge(collection, id, fields, true);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), DocumentStoreError> {
        if !self.inner.merge(collection, id, fields, false) {
            return Err(DocumentStoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn watch(&self, query: Query, listener: SnapshotListener) -> Box<dyn ListenerRegistration> {
        let watch_id = self.inner.next_watch_id.fetch_add(1, Ordering::SeqCst);
        let listener = Arc::new(listener);

        debug!("Registering watch {watch_id} on '{}'.", query.collection);
        self.inner.watches.lock().insert(
            watch_id,
            Watch {
                query: query.clone(),
                listener: listener.clone(),
            },
        );

        listener(Ok(self.inner.run_query(&query)));

        Box::new(InMemoryListenerRegistration {
            inner: Arc::downgrade(&self.inner),
            watch_id,
        })
    }
}

impl ListenerRegistration for InMemoryListenerRegistration {
    fn remove(self: Box<Self>) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        debug!("Removing watch {}.", self.watch_id);
        inner.watches.lock().remove(&self.watch_id);
    }
}
