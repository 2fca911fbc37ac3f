// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::format_err;
use tracing::warn;

use crate::domain::shared::models::{Failure, LiveQuery};
use crate::infra::documents::{Document, DynDocumentStore, Query};

/// Bridges a document store watch to a `LiveQuery`, decoding every document of each snapshot
/// with `decode`. Documents that fail to decode are skipped.
pub(super) fn watch_documents<T, F>(
    store: DynDocumentStore,
    query: Query,
    decode: F,
) -> LiveQuery<Vec<T>>
where
    T: Send + 'static,
    F: Fn(&Document) -> anyhow::Result<T> + Send + Sync + 'static,
{
    LiveQuery::new(move |sink| {
        let registration = store.watch(
            query,
            Box::new(move |result| match result {
                Ok(documents) => {
                    let items = documents
                        .iter()
                        .filter_map(|document| match decode(document) {
                            Ok(item) => Some(item),
                            Err(err) => {
                                warn!("Skipping undecodable document {}. {}", document.id, err);
                                None
                            }
                        })
                        .collect::<Vec<_>>();
                    sink.send(items);
                }
                Err(err) => sink.fail(Failure::Watch(format_err!(err))),
            }),
        );
        Box::new(move || registration.remove())
    })
}
