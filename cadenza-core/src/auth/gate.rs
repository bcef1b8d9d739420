use std::any::type_name_of_val;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use cadenza_model::AuthorizationStatus;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared, WeakShared};

use crate::error::AuthorizationError;
use crate::observer::{CatalogObserver, NoopObserver};
use crate::store::CatalogStore;

type PendingRequest = Shared<BoxFuture<'static, AuthorizationStatus>>;
type PendingSlot = Option<WeakShared<BoxFuture<'static, AuthorizationStatus>>>;

/// Guards access to the catalog store.
///
/// `status` is a plain read. `authorize` short-circuits when access is already
/// granted, and otherwise issues at most one store permission request per
/// call. With coalescing on (the default) callers arriving while a request is
/// in flight join it instead of prompting again. The gate only holds a weak
/// handle: the request runs while at least one caller awaits it, and is
/// dropped (aborting the store call) once the last one goes away.
pub struct AuthorizationGate {
    store: Arc<dyn CatalogStore>,
    observer: Arc<dyn CatalogObserver>,
    coalesce: bool,
    pending: Mutex<PendingSlot>,
}

impl fmt::Debug for AuthorizationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let in_flight = self
            .pending
            .try_lock()
            .map(|slot| live(&slot).is_some_and(|p| p.peek().is_none()))
            .unwrap_or(true);

        f.debug_struct("AuthorizationGate")
            .field("store", &type_name_of_val(self.store.as_ref()))
            .field("observer", &type_name_of_val(self.observer.as_ref()))
            .field("coalesce", &self.coalesce)
            .field("request_in_flight", &in_flight)
            .finish()
    }
}

impl AuthorizationGate {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_observer(store, Arc::new(NoopObserver))
    }

    pub fn with_observer(
        store: Arc<dyn CatalogStore>,
        observer: Arc<dyn CatalogObserver>,
    ) -> Self {
        Self {
            store,
            observer,
            coalesce: true,
            pending: Mutex::new(None),
        }
    }

    /// Enable or disable joining of concurrent permission requests.
    pub fn coalescing(mut self, enabled: bool) -> Self {
        self.coalesce = enabled;
        self
    }

    /// Current permission state as reported by the store. Never prompts.
    pub fn status(&self) -> AuthorizationStatus {
        self.store.authorization_status()
    }

    /// Obtain access, prompting the user if the store needs to.
    pub async fn authorize(
        &self,
    ) -> Result<AuthorizationStatus, AuthorizationError> {
        let current = self.status();
        if current.is_authorized() {
            self.observer.authorization_short_circuited();
            return Ok(current);
        }

        let resolved = if self.coalesce {
            let request = self.join_or_start(current);
            let resolved = request.clone().await;
            self.release(&request);
            resolved
        } else {
            self.observer.authorization_requested(current);
            self.store.request_authorization().await
        };

        self.observer.authorization_resolved(resolved);
        if resolved.is_authorized() {
            Ok(resolved)
        } else {
            Err(AuthorizationError::Unauthorized(resolved))
        }
    }

    fn join_or_start(&self, current: AuthorizationStatus) -> PendingRequest {
        let mut slot =
            self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        // Join only a request that is still owned by a waiting caller and has
        // not resolved yet.
        if let Some(request) = live(&slot)
            && request.peek().is_none()
        {
            self.observer.authorization_joined();
            return request;
        }

        let store = Arc::clone(&self.store);
        let request = async move { store.request_authorization().await }
            .boxed()
            .shared();
        *slot = request.downgrade();
        self.observer.authorization_requested(current);
        request
    }

    fn release(&self, request: &PendingRequest) {
        let mut slot =
            self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if live(&slot).is_none_or(|p| p.ptr_eq(request)) {
            *slot = None;
        }
    }
}

fn live(slot: &PendingSlot) -> Option<PendingRequest> {
    slot.as_ref().and_then(WeakShared::upgrade)
}
