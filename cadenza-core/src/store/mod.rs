//! Boundary to the protected catalog store.
//!
//! The native store binding lives outside this crate; it plugs in by
//! implementing [`CatalogStore`]. [`InMemoryStore`] is the substitute used by
//! tests and the command line front end.

pub mod memory;
pub mod outcome;

use async_trait::async_trait;
use cadenza_model::{
    AuthorizationStatus, FilterSet, GroupingMode, MediaItem,
    MediaItemCollection,
};

pub use memory::InMemoryStore;
pub use outcome::{QueryOutcome, QueryOutcomeKind};

/// Permission and query primitives of the protected store.
///
/// The two query methods are the typed split of a single store execute call
/// that either returns flat items or grouped collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Current permission state. Must not block and must never prompt.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Ask for access. May present a system prompt and suspend until the user
    /// answers; resolves immediately if the user already decided.
    async fn request_authorization(&self) -> AuthorizationStatus;

    async fn query_items(
        &self,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) -> QueryOutcome<MediaItem>;

    async fn query_collections(
        &self,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) -> QueryOutcome<MediaItemCollection>;
}
