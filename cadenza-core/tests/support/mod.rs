#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use cadenza_core::model::{
    AuthorizationStatus, EntityKind, FilterSet, GroupingMode, MediaItem,
    PersistentId,
};
use cadenza_core::{CatalogObserver, QueryOutcomeKind, QueryShape};

/// Three albums of music plus one podcast episode.
///
/// | id | title        | album (id)     | artist (id)      | plays |
/// |----|--------------|----------------|------------------|-------|
/// | 1  | Everything   | Kid A (10)     | Radiohead (100)  | 12    |
/// | 2  | Idioteque    | Kid A (10)     | Radiohead (100)  | 40    |
/// | 3  | Jóga         | Homogenic (11) | Björk (101)      | 7     |
/// | 4  | Bachelorette | Homogenic (11) | Björk (101)      | 31    |
/// | 5  | Aja          | Aja (12)       | Steely Dan (102) | 40    |
/// | 6  | Episode 1    | (podcast)      |                  | 2     |
pub fn catalog() -> Vec<MediaItem> {
    let song = |id: u64,
                title: &str,
                album: (u64, &str),
                artist: (u64, &str),
                plays| {
        MediaItem::new(PersistentId::new(id), EntityKind::Music)
            .with_title(title)
            .with_album(PersistentId::new(album.0), album.1)
            .with_artist(PersistentId::new(artist.0), artist.1)
            .with_genre(PersistentId::new(500), "Alternative")
            .with_play_count(plays)
            .with_duration(Duration::from_secs(180 + id))
    };

    vec![
        song(1, "Everything", (10, "Kid A"), (100, "Radiohead"), 12),
        song(2, "Idioteque", (10, "Kid A"), (100, "Radiohead"), 40),
        song(3, "Jóga", (11, "Homogenic"), (101, "Björk"), 7),
        song(4, "Bachelorette", (11, "Homogenic"), (101, "Björk"), 31),
        song(5, "Aja", (12, "Aja"), (102, "Steely Dan"), 40),
        MediaItem::new(PersistentId::new(6), EntityKind::Podcast)
            .with_title("Episode 1")
            .with_play_count(2),
    ]
}

pub fn ids(items: &[MediaItem]) -> Vec<u64> {
    items.iter().map(|item| item.persistent_id.get()).collect()
}

/// Observer event, flattened for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShortCircuited,
    Requested(AuthorizationStatus),
    Joined,
    Resolved(AuthorizationStatus),
    QueryStarted(QueryShape, usize),
    QueryFinished(QueryShape, QueryOutcomeKind, usize),
}

/// Observer that records every hook call in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, wanted: impl Fn(&Event) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| wanted(e)).count()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl CatalogObserver for RecordingObserver {
    fn authorization_short_circuited(&self) {
        self.push(Event::ShortCircuited);
    }

    fn authorization_requested(&self, previous: AuthorizationStatus) {
        self.push(Event::Requested(previous));
    }

    fn authorization_joined(&self) {
        self.push(Event::Joined);
    }

    fn authorization_resolved(&self, status: AuthorizationStatus) {
        self.push(Event::Resolved(status));
    }

    fn query_started(
        &self,
        shape: QueryShape,
        filters: &FilterSet,
        _grouping: GroupingMode,
    ) {
        self.push(Event::QueryStarted(shape, filters.len()));
    }

    fn query_finished(
        &self,
        shape: QueryShape,
        outcome: QueryOutcomeKind,
        count: usize,
    ) {
        self.push(Event::QueryFinished(shape, outcome, count));
    }
}
