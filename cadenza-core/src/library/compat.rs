//! Earlier method names, forwarding to their current counterparts.

use cadenza_model::{
    ComparisonMode, EntityKind, GroupingMode, MediaItem, PredicateInfo,
    SortOrder,
};

use super::MediaLibrary;
use crate::error::Result;
use crate::query::SortBy;

impl MediaLibrary {
    #[deprecated(since = "0.1.0", note = "renamed to `songs`")]
    pub async fn fetch_songs(
        &self,
        sorted_by: Option<SortBy<MediaItem>>,
        order: SortOrder,
    ) -> Result<Vec<MediaItem>> {
        self.songs(sorted_by, order).await
    }

    #[deprecated(since = "0.1.0", note = "renamed to `songs_matching_with`")]
    pub async fn fetch_song(
        &self,
        with: &PredicateInfo,
        comparison: ComparisonMode,
    ) -> Result<Vec<MediaItem>> {
        self.songs_matching_with(with, comparison).await
    }

    #[deprecated(since = "0.1.0", note = "renamed to `fetch`")]
    pub async fn fetch_with(
        &self,
        kind: EntityKind,
        predicate: &PredicateInfo,
        comparison: ComparisonMode,
        grouping: GroupingMode,
    ) -> Result<Vec<MediaItem>> {
        self.fetch(kind, predicate, comparison, grouping).await
    }
}
