//! Injected observability hooks.
//!
//! Components receive an `Arc<dyn CatalogObserver>` at construction instead of
//! logging through a process-wide logger. [`NoopObserver`] is the default;
//! [`TracingObserver`] forwards every hook to `tracing`.

use std::fmt;

use cadenza_model::{AuthorizationStatus, FilterSet, GroupingMode};

use crate::store::QueryOutcomeKind;

/// Which of the four query operations ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryShape {
    AllItems,
    MatchingItems,
    AllCollections,
    MatchingCollections,
}

impl fmt::Display for QueryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryShape::AllItems => "all_items",
            QueryShape::MatchingItems => "matching_items",
            QueryShape::AllCollections => "all_collections",
            QueryShape::MatchingCollections => "matching_collections",
        };
        f.write_str(name)
    }
}

/// Receives lifecycle events from the authorization gate and query service.
///
/// Every hook defaults to doing nothing, so implementors only override what
/// they care about. Hooks run inline on the calling task and must not block.
pub trait CatalogObserver: Send + Sync {
    /// `authorize()` returned early because access was already granted.
    fn authorization_short_circuited(&self) {}

    /// A store permission request was issued while in `previous`.
    fn authorization_requested(&self, _previous: AuthorizationStatus) {}

    /// A caller joined a permission request already in flight.
    fn authorization_joined(&self) {}

    /// A permission request finished with `status`.
    fn authorization_resolved(&self, _status: AuthorizationStatus) {}

    fn query_started(
        &self,
        _shape: QueryShape,
        _filters: &FilterSet,
        _grouping: GroupingMode,
    ) {
    }

    fn query_finished(
        &self,
        _shape: QueryShape,
        _outcome: QueryOutcomeKind,
        _count: usize,
    ) {
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CatalogObserver for NoopObserver {}

/// Observer that emits `tracing` events under the `cadenza::auth` and
/// `cadenza::query` targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CatalogObserver for TracingObserver {
    fn authorization_short_circuited(&self) {
        tracing::trace!(
            target: "cadenza::auth",
            "already authorized, skipping request"
        );
    }

    fn authorization_requested(&self, previous: AuthorizationStatus) {
        tracing::info!(
            target: "cadenza::auth",
            %previous,
            "requesting catalog authorization"
        );
    }

    fn authorization_joined(&self) {
        tracing::debug!(
            target: "cadenza::auth",
            "joining in-flight authorization request"
        );
    }

    fn authorization_resolved(&self, status: AuthorizationStatus) {
        if status.is_authorized() {
            tracing::info!(
                target: "cadenza::auth",
                %status,
                "authorization resolved"
            );
        } else {
            tracing::warn!(
                target: "cadenza::auth",
                %status,
                "authorization not granted"
            );
        }
    }

    fn query_started(
        &self,
        shape: QueryShape,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) {
        tracing::debug!(
            target: "cadenza::query",
            %shape,
            %grouping,
            filters = %filters,
            "executing catalog query"
        );
    }

    fn query_finished(
        &self,
        shape: QueryShape,
        outcome: QueryOutcomeKind,
        count: usize,
    ) {
        tracing::debug!(
            target: "cadenza::query",
            %shape,
            %outcome,
            count,
            "catalog query finished"
        );
    }
}
