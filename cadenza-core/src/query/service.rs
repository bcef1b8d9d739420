use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use cadenza_model::{
    ComparisonMode, EntityKind, FilterSet, GroupingMode, MediaItem,
    MediaItemCollection, PredicateInfo,
};

use crate::error::QueryError;
use crate::observer::{CatalogObserver, NoopObserver, QueryShape};
use crate::store::{CatalogStore, QueryOutcome};

/// Executes predicate queries against the store and maps its "not found"
/// sentinel to [`QueryError`].
///
/// Each operation shape has its own error variant, so the variant alone tells
/// which query failed. Results are returned in store order.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn CatalogStore>,
    observer: Arc<dyn CatalogObserver>,
}

impl fmt::Debug for QueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryService")
            .field("store", &type_name_of_val(self.store.as_ref()))
            .field("observer", &type_name_of_val(self.observer.as_ref()))
            .finish()
    }
}

impl QueryService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_observer(store, Arc::new(NoopObserver))
    }

    pub fn with_observer(
        store: Arc<dyn CatalogStore>,
        observer: Arc<dyn CatalogObserver>,
    ) -> Self {
        Self { store, observer }
    }

    /// Every item of `kind`.
    pub async fn fetch_all_items(
        &self,
        kind: EntityKind,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItem>, QueryError> {
        let filters = kind_filter(kind, ComparisonMode::EqualTo);
        let outcome = self
            .items(QueryShape::AllItems, &filters, grouping)
            .await;
        resolve(outcome, || QueryError::ItemsNotFound)
    }

    /// Items of `kind` matching `predicate`; both filters use `comparison`.
    pub async fn fetch_items(
        &self,
        kind: EntityKind,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItem>, QueryError> {
        let filters = predicate_filter(kind, predicate, comparison);
        let outcome = self
            .items(QueryShape::MatchingItems, &filters, grouping)
            .await;
        resolve(outcome, || QueryError::ItemNotFound(predicate.clone()))
    }

    /// Every collection of `kind`, grouped by `grouping`.
    pub async fn fetch_all_collections(
        &self,
        kind: EntityKind,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItemCollection>, QueryError> {
        let filters = kind_filter(kind, ComparisonMode::EqualTo);
        let outcome = self
            .collections(QueryShape::AllCollections, &filters, grouping)
            .await;
        resolve(outcome, || QueryError::CollectionsNotFound)
    }

    /// Collections of `kind` matching `predicate`.
    pub async fn fetch_collections(
        &self,
        kind: EntityKind,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItemCollection>, QueryError> {
        let filters = predicate_filter(kind, predicate, comparison);
        let outcome = self
            .collections(QueryShape::MatchingCollections, &filters, grouping)
            .await;
        resolve(outcome, || QueryError::CollectionNotFound(predicate.clone()))
    }

    async fn items(
        &self,
        shape: QueryShape,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) -> QueryOutcome<MediaItem> {
        self.observer.query_started(shape, filters, grouping);
        let outcome = self.store.query_items(filters, grouping).await;
        self.observer
            .query_finished(shape, outcome.kind(), outcome.len());
        outcome
    }

    async fn collections(
        &self,
        shape: QueryShape,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) -> QueryOutcome<MediaItemCollection> {
        self.observer.query_started(shape, filters, grouping);
        let outcome = self.store.query_collections(filters, grouping).await;
        self.observer
            .query_finished(shape, outcome.kind(), outcome.len());
        outcome
    }
}

fn kind_filter(kind: EntityKind, comparison: ComparisonMode) -> FilterSet {
    FilterSet::new()
        .with(PredicateInfo::ByEntityKind(kind).descriptor(comparison))
}

fn predicate_filter(
    kind: EntityKind,
    predicate: &PredicateInfo,
    comparison: ComparisonMode,
) -> FilterSet {
    kind_filter(kind, comparison).with(predicate.descriptor(comparison))
}

fn resolve<T>(
    outcome: QueryOutcome<T>,
    not_found: impl FnOnce() -> QueryError,
) -> Result<Vec<T>, QueryError> {
    match outcome {
        QueryOutcome::NotFound => Err(not_found()),
        QueryOutcome::Empty => Ok(Vec::new()),
        QueryOutcome::Found(records) => Ok(records),
    }
}
