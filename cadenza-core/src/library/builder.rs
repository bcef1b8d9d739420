use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::MediaLibrary;
use crate::auth::AuthorizationGate;
use crate::config::CatalogConfig;
use crate::observer::CatalogObserver;
use crate::query::QueryService;
use crate::store::CatalogStore;

/// Assembles a [`MediaLibrary`] from a store, a [`CatalogConfig`] and an
/// optional observer.
///
/// An observer set here wins over the one selected by
/// `observability.trace`.
pub struct MediaLibraryBuilder {
    store: Arc<dyn CatalogStore>,
    config: CatalogConfig,
    observer: Option<Arc<dyn CatalogObserver>>,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for MediaLibraryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaLibraryBuilder")
            .field("store", &type_name_of_val(self.store.as_ref()))
            .field("config", &self.config)
            .field(
                "observer",
                &self.observer.as_ref().map(|o| type_name_of_val(o.as_ref())),
            )
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl MediaLibraryBuilder {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            config: CatalogConfig::default(),
            observer: None,
            cancel: None,
        }
    }

    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn CatalogObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> MediaLibrary {
        let observer = self
            .observer
            .unwrap_or_else(|| self.config.observer());

        let gate = AuthorizationGate::with_observer(
            Arc::clone(&self.store),
            Arc::clone(&observer),
        )
        .coalescing(self.config.authorization.coalesce_requests);
        let queries = QueryService::with_observer(self.store, observer);

        MediaLibrary {
            gate: Arc::new(gate),
            queries,
            after_request: self.config.authorization.after_request,
            cancel: self.cancel.unwrap_or_default(),
        }
    }
}
