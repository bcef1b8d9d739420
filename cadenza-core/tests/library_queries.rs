//! End-to-end behaviour of the facade against the in-memory store.

mod support;

use std::sync::Arc;
use std::time::Duration;

use cadenza_core::model::{
    AuthorizationStatus, ComparisonMode, EntityKind, GroupingMode, ItemField,
    MediaItem, PersistentId, PredicateInfo, SortOrder,
};
use cadenza_core::{
    AuthorizationError, CatalogConfig, InMemoryStore, LibraryError,
    MediaLibrary, PostAuthorization, QueryError, QueryOutcomeKind, QueryShape,
    SortBy,
};
use support::{Event, RecordingObserver, catalog, ids};
use tokio_util::sync::CancellationToken;

fn authorized_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new(catalog());
    Arc::new(store.with_status(AuthorizationStatus::Authorized))
}

/// Prompt reports a grant, but the store keeps answering `NotDetermined`.
fn lagging_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(catalog()).with_persisted_grant(false))
}

fn library_with(
    store: Arc<InMemoryStore>,
    after_request: PostAuthorization,
) -> MediaLibrary {
    let mut config = CatalogConfig::default();
    config.authorization.after_request = after_request;
    MediaLibrary::builder(store).config(config).build()
}

#[tokio::test]
async fn songs_keep_store_order_without_a_key() {
    let library = MediaLibrary::new(authorized_store());

    let songs = library.songs(None, SortOrder::Descending).await.unwrap();

    assert_eq!(ids(&songs), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn songs_sort_stably_by_key() {
    let library = MediaLibrary::new(authorized_store());

    let by_plays = library
        .songs(Some(SortBy::field(ItemField::PlayCount)), SortOrder::Descending)
        .await
        .unwrap();
    assert_eq!(ids(&by_plays), vec![2, 5, 4, 1, 3]);

    let by_title = library
        .songs(
            Some(SortBy::key(|song: &MediaItem| song.title.clone())),
            SortOrder::Ascending,
        )
        .await
        .unwrap();
    assert_eq!(ids(&by_title), vec![5, 4, 1, 2, 3]);
}

#[tokio::test]
async fn first_query_prompts_then_later_queries_do_not() {
    let store = Arc::new(InMemoryStore::new(catalog()));
    let library = MediaLibrary::new(store.clone());

    let songs = library.songs(None, SortOrder::Ascending).await.unwrap();
    let albums = library.albums(None, SortOrder::Ascending).await.unwrap();
    assert_eq!(songs.len(), 5);
    assert_eq!(albums.len(), 3);

    assert_eq!(store.authorization_requests(), 1);
    assert_eq!(library.authorization_status(), AuthorizationStatus::Authorized);
}

#[tokio::test]
async fn refused_prompt_fails_before_querying() {
    let store = Arc::new(
        InMemoryStore::new(catalog()).with_grant(AuthorizationStatus::Denied),
    );
    let library = MediaLibrary::new(store.clone());

    let err = library.songs(None, SortOrder::Ascending).await.unwrap_err();

    assert_eq!(
        err,
        LibraryError::Authorization(AuthorizationError::Unauthorized(
            AuthorizationStatus::Denied
        ))
    );
    assert_eq!(store.queries_executed(), 0);
}

#[tokio::test]
async fn restricted_store_is_reported_as_restricted() {
    let store = InMemoryStore::new(catalog());
    let store = Arc::new(store.with_status(AuthorizationStatus::Restricted));
    let library = MediaLibrary::new(store);

    let err = library
        .albums_matching(
            &PredicateInfo::ByArtist("Björk".into()),
            ComparisonMode::EqualTo,
            GroupingMode::Album,
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.as_authorization().map(AuthorizationError::status),
        Some(AuthorizationStatus::Restricted)
    );
}

#[tokio::test]
async fn matching_songs_compare_text_case_insensitively() {
    let library = MediaLibrary::new(authorized_store());

    let exact = library
        .songs_matching(&PredicateInfo::ByArtist("björk".into()))
        .await
        .unwrap();
    assert_eq!(ids(&exact), vec![3, 4]);

    let partial = library
        .songs_matching_with(
            &PredicateInfo::ByArtist("dan".into()),
            ComparisonMode::Contains,
        )
        .await
        .unwrap();
    assert_eq!(ids(&partial), vec![5]);
}

#[tokio::test]
async fn matching_nothing_is_empty_not_an_error() {
    let library = MediaLibrary::new(authorized_store());

    let songs = library
        .songs_matching(&PredicateInfo::ByArtist("Nobody".into()))
        .await
        .unwrap();

    assert!(songs.is_empty());
}

#[tokio::test]
async fn id_predicates_match_by_equality() {
    let library = MediaLibrary::new(authorized_store());

    let songs = library
        .songs_matching(&PredicateInfo::ByAlbumId(PersistentId::new(10)))
        .await
        .unwrap();
    assert_eq!(ids(&songs), vec![1, 2]);
}

#[tokio::test]
async fn kind_masks_select_wider_families() {
    let library = MediaLibrary::new(authorized_store());

    let audio = library
        .fetch_all(EntityKind::AnyAudio, GroupingMode::Title)
        .await
        .unwrap();
    assert_eq!(ids(&audio), vec![1, 2, 3, 4, 5, 6]);

    let podcasts = library
        .fetch_all(EntityKind::Podcast, GroupingMode::PodcastTitle)
        .await
        .unwrap();
    assert_eq!(ids(&podcasts), vec![6]);

    let video = library
        .fetch_all(EntityKind::AnyVideo, GroupingMode::Title)
        .await
        .unwrap();
    assert!(video.is_empty());
}

#[tokio::test]
async fn albums_group_in_store_order_and_sort_by_representative() {
    let library = MediaLibrary::new(authorized_store());

    let albums = library.albums(None, SortOrder::Ascending).await.unwrap();
    let counts: Vec<_> = albums.iter().map(|a| a.count()).collect();
    assert_eq!(counts, vec![2, 2, 1]);

    let sorted = library
        .albums(
            Some(SortBy::representative(ItemField::AlbumTitle)),
            SortOrder::Ascending,
        )
        .await
        .unwrap();
    let titles: Vec<_> = sorted
        .iter()
        .filter_map(|a| a.representative_item())
        .filter_map(|i| i.album_title.as_deref())
        .collect();
    assert_eq!(titles, vec!["Aja", "Homogenic", "Kid A"]);
}

#[tokio::test]
async fn albums_matching_groups_by_requested_mode() {
    let library = MediaLibrary::new(authorized_store());

    let by_artist = library
        .albums_matching(
            &PredicateInfo::ByGenre("Alternative".into()),
            ComparisonMode::EqualTo,
            GroupingMode::Artist,
        )
        .await
        .unwrap();

    assert_eq!(by_artist.len(), 3);
    assert_eq!(by_artist[0].count(), 2);
    assert_eq!(
        by_artist[2]
            .representative_item()
            .and_then(|i| i.artist.as_deref()),
        Some("Steely Dan")
    );
}

#[tokio::test]
async fn proceed_lets_the_store_sentinel_through() {
    let store = lagging_store();
    let library = library_with(store.clone(), PostAuthorization::Proceed);
    let predicate = PredicateInfo::ByTitle("Aja".into());

    let all = library.songs(None, SortOrder::Ascending).await.unwrap_err();
    assert_eq!(all, LibraryError::Query(QueryError::ItemsNotFound));

    let matching = library.songs_matching(&predicate).await.unwrap_err();
    assert_eq!(
        matching,
        LibraryError::Query(QueryError::ItemNotFound(predicate.clone()))
    );

    let albums = library.albums(None, SortOrder::Ascending).await.unwrap_err();
    assert_eq!(albums, LibraryError::Query(QueryError::CollectionsNotFound));

    let collections = library
        .albums_matching(
            &predicate,
            ComparisonMode::EqualTo,
            GroupingMode::Album,
        )
        .await
        .unwrap_err();
    assert_eq!(
        collections.as_query().and_then(QueryError::predicate),
        Some(&predicate)
    );

    // Every call prompted again because the grant never landed.
    assert_eq!(store.authorization_requests(), 4);
    assert_eq!(store.queries_executed(), 4);
}

#[tokio::test]
async fn verify_rejects_a_grant_the_store_does_not_report() {
    let store = lagging_store();
    let library = library_with(store.clone(), PostAuthorization::Verify);

    let err = library.songs(None, SortOrder::Ascending).await.unwrap_err();

    assert_eq!(
        err,
        LibraryError::Authorization(AuthorizationError::Unauthorized(
            AuthorizationStatus::NotDetermined
        ))
    );
    assert_eq!(store.queries_executed(), 0);
}

#[tokio::test]
async fn verify_passes_once_the_store_reports_access() {
    let store = Arc::new(InMemoryStore::new(catalog()));
    let library = library_with(store.clone(), PostAuthorization::Verify);

    let songs = library.songs(None, SortOrder::Ascending).await.unwrap();

    assert_eq!(songs.len(), 5);
    assert_eq!(library.post_authorization(), PostAuthorization::Verify);
}

#[tokio::test]
async fn cancelled_token_stops_before_the_store_is_touched() {
    let store = authorized_store();
    let token = CancellationToken::new();
    token.cancel();
    let library = MediaLibrary::new(store.clone()).with_cancellation(token);

    let err = library.songs(None, SortOrder::Ascending).await.unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(store.queries_executed(), 0);
}

#[tokio::test]
async fn cancellation_interrupts_a_slow_query() {
    let store = Arc::new(
        InMemoryStore::new(catalog())
            .with_status(AuthorizationStatus::Authorized)
            .with_query_delay(Duration::from_secs(5)),
    );
    let token = CancellationToken::new();
    let library = MediaLibrary::builder(store)
        .cancellation(token.clone())
        .build();

    let cancel_soon = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    };
    let (result, ()) =
        tokio::join!(library.songs(None, SortOrder::Ascending), cancel_soon);

    assert_eq!(result.unwrap_err(), LibraryError::Cancelled);
}

#[tokio::test]
async fn cancelling_one_handle_leaves_the_original_usable() {
    let library = MediaLibrary::new(authorized_store());
    let token = CancellationToken::new();
    let scoped = library.with_cancellation(token.clone());
    token.cancel();

    let scoped_result =
        scoped.fetch_all(EntityKind::Music, GroupingMode::Title).await;
    assert_eq!(scoped_result.unwrap_err(), LibraryError::Cancelled);
    assert_eq!(
        library
            .fetch_all(EntityKind::Music, GroupingMode::Title)
            .await
            .unwrap()
            .len(),
        5
    );
}

#[tokio::test]
async fn observer_reports_query_shapes_and_outcomes() {
    let observer = Arc::new(RecordingObserver::default());
    let library = MediaLibrary::builder(authorized_store())
        .observer(observer.clone())
        .build();

    library.songs(None, SortOrder::Ascending).await.unwrap();
    library
        .songs_matching(&PredicateInfo::ByArtist("Nobody".into()))
        .await
        .unwrap();

    use QueryOutcomeKind::{Empty, Found};
    assert_eq!(
        observer.events(),
        vec![
            Event::QueryStarted(QueryShape::AllItems, 1),
            Event::QueryFinished(QueryShape::AllItems, Found, 5),
            Event::QueryStarted(QueryShape::MatchingItems, 2),
            Event::QueryFinished(QueryShape::MatchingItems, Empty, 0),
        ]
    );
}
