//! The caller-facing facade.
//!
//! [`MediaLibrary`] composes the [`AuthorizationGate`] and the
//! [`QueryService`]. Every query first makes sure access was requested, then
//! delegates; errors reach the caller unchanged, without retries.

mod builder;
#[cfg(feature = "compat")]
mod compat;

use std::future::Future;
use std::sync::Arc;

use cadenza_model::{
    AuthorizationStatus, ComparisonMode, EntityKind, GroupingMode, MediaItem,
    MediaItemCollection, PredicateInfo, SortOrder,
};
use tokio_util::sync::CancellationToken;

use crate::auth::AuthorizationGate;
use crate::config::PostAuthorization;
use crate::error::{AuthorizationError, LibraryError, Result};
use crate::query::{QueryService, SortBy, sort_records};
use crate::store::CatalogStore;

pub use builder::MediaLibraryBuilder;

/// Permission-gated access to the media catalog.
///
/// Cloning is cheap and clones share the same gate, so concurrent permission
/// requests from clones are still coalesced.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    gate: Arc<AuthorizationGate>,
    queries: QueryService,
    after_request: PostAuthorization,
    cancel: CancellationToken,
}

impl MediaLibrary {
    /// Facade with default configuration and no observer.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::builder(store).build()
    }

    pub fn builder(store: Arc<dyn CatalogStore>) -> MediaLibraryBuilder {
        MediaLibraryBuilder::new(store)
    }

    /// Handle whose operations resolve to [`LibraryError::Cancelled`] once
    /// `token` fires. The in-flight store call is dropped at that point.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    pub fn post_authorization(&self) -> PostAuthorization {
        self.after_request
    }

    /// Current permission state. Never prompts.
    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.gate.status()
    }

    /// Ask the store for access, prompting the user if needed.
    pub async fn request_authorization(&self) -> Result<AuthorizationStatus> {
        self.cancellable(async { Ok(self.gate.authorize().await?) })
            .await
    }

    pub async fn fetch_all(
        &self,
        kind: EntityKind,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItem>> {
        self.cancellable(async {
            self.ensure_authorized().await?;
            Ok(self.queries.fetch_all_items(kind, grouping).await?)
        })
        .await
    }

    pub async fn fetch(
        &self,
        kind: EntityKind,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItem>> {
        self.cancellable(async {
            self.ensure_authorized().await?;
            Ok(self
                .queries
                .fetch_items(kind, predicate, comparison, grouping)
                .await?)
        })
        .await
    }

    pub async fn fetch_all_collections(
        &self,
        kind: EntityKind,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItemCollection>> {
        self.cancellable(async {
            self.ensure_authorized().await?;
            Ok(self.queries.fetch_all_collections(kind, grouping).await?)
        })
        .await
    }

    pub async fn fetch_collections(
        &self,
        kind: EntityKind,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItemCollection>> {
        self.cancellable(async {
            self.ensure_authorized().await?;
            Ok(self
                .queries
                .fetch_collections(kind, predicate, comparison, grouping)
                .await?)
        })
        .await
    }

    /// All songs, grouped by title. With a key the result is stably sorted
    /// in `order`; without one the store order is kept.
    pub async fn songs(
        &self,
        sorted_by: Option<SortBy<MediaItem>>,
        order: SortOrder,
    ) -> Result<Vec<MediaItem>> {
        let mut songs =
            self.fetch_all(EntityKind::Music, GroupingMode::Title).await?;
        sort_records(&mut songs, sorted_by.as_ref(), order);
        Ok(songs)
    }

    /// Songs whose property equals the predicate's value.
    pub async fn songs_matching(
        &self,
        predicate: &PredicateInfo,
    ) -> Result<Vec<MediaItem>> {
        self.songs_matching_with(predicate, ComparisonMode::EqualTo)
            .await
    }

    pub async fn songs_matching_with(
        &self,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
    ) -> Result<Vec<MediaItem>> {
        let grouping = GroupingMode::Title;
        self.fetch(EntityKind::Music, predicate, comparison, grouping)
            .await
    }

    /// All albums. Sorting works as in [`MediaLibrary::songs`].
    pub async fn albums(
        &self,
        sorted_by: Option<SortBy<MediaItemCollection>>,
        order: SortOrder,
    ) -> Result<Vec<MediaItemCollection>> {
        let mut albums = self
            .fetch_all_collections(EntityKind::Music, GroupingMode::Album)
            .await?;
        sort_records(&mut albums, sorted_by.as_ref(), order);
        Ok(albums)
    }

    pub async fn albums_matching(
        &self,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItemCollection>> {
        let kind = EntityKind::Music;
        self.fetch_collections(kind, predicate, comparison, grouping)
            .await
    }

    /// Request access when the store does not report it. A refused request
    /// fails the call; what happens after a granted one depends on
    /// [`PostAuthorization`].
    async fn ensure_authorized(&self) -> Result<()> {
        if self.authorization_status().is_authorized() {
            return Ok(());
        }

        self.gate.authorize().await?;

        match self.after_request {
            PostAuthorization::Proceed => Ok(()),
            PostAuthorization::Verify => {
                let current = self.authorization_status();
                if current.is_authorized() {
                    Ok(())
                } else {
                    Err(AuthorizationError::Unauthorized(current).into())
                }
            }
        }
    }

    async fn cancellable<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(LibraryError::Cancelled),
            outcome = operation => outcome,
        }
    }
}
