//! Deprecated facade aliases keep answering like the calls they forward to.

#![cfg(feature = "compat")]
#![allow(deprecated)]

mod support;

use std::sync::Arc;

use cadenza_core::model::{
    AuthorizationStatus, ComparisonMode, EntityKind, GroupingMode, ItemField,
    PredicateInfo, SortOrder,
};
use cadenza_core::{InMemoryStore, MediaLibrary, QueryError, SortBy};
use support::catalog;

fn library(status: AuthorizationStatus) -> MediaLibrary {
    let store = InMemoryStore::new(catalog())
        .with_status(status)
        .with_persisted_grant(false);
    MediaLibrary::new(Arc::new(store))
}

#[tokio::test]
async fn fetch_songs_matches_songs() {
    let library = library(AuthorizationStatus::Authorized);

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let old = library
            .fetch_songs(Some(SortBy::field(ItemField::Duration)), order)
            .await;
        let new = library
            .songs(Some(SortBy::field(ItemField::Duration)), order)
            .await;
        assert_eq!(old, new);
    }
}

#[tokio::test]
async fn fetch_song_matches_songs_matching_with() {
    let library = library(AuthorizationStatus::Authorized);
    let predicate = PredicateInfo::ByAlbumTitle("kid".into());

    for comparison in [ComparisonMode::EqualTo, ComparisonMode::Contains] {
        let old = library.fetch_song(&predicate, comparison).await;
        let new = library.songs_matching_with(&predicate, comparison).await;
        assert_eq!(old, new);
    }
}

#[tokio::test]
async fn fetch_with_matches_fetch_including_errors() {
    // Prompt grants but the store never reports it, so both hit the sentinel.
    let library = library(AuthorizationStatus::NotDetermined);
    let predicate = PredicateInfo::ByComposer("Fagen".into());

    let old = library
        .fetch_with(
            EntityKind::Music,
            &predicate,
            ComparisonMode::Contains,
            GroupingMode::Composer,
        )
        .await;
    let new = library
        .fetch(
            EntityKind::Music,
            &predicate,
            ComparisonMode::Contains,
            GroupingMode::Composer,
        )
        .await;

    assert_eq!(old, new);
    assert_eq!(
        old.unwrap_err().as_query(),
        Some(&QueryError::ItemNotFound(predicate))
    );
}
