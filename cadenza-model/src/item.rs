use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{EntityKind, PersistentId, PropertyKey, PropertyValue};

/// A single catalog record as produced by the store.
///
/// The core treats items as read-only value bags; identity and lifetime belong
/// to the store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub persistent_id: PersistentId,
    pub media_type: EntityKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub album_title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub album_id: Option<PersistentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub artist: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub artist_id: Option<PersistentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub album_artist: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub album_artist_id: Option<PersistentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre_id: Option<PersistentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub composer: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub composer_id: Option<PersistentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub play_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Duration,
    #[cfg_attr(feature = "serde", serde(default))]
    pub date_added: Option<DateTime<Utc>>,
}

impl MediaItem {
    /// Minimal record; every optional property starts out empty.
    pub fn new(persistent_id: PersistentId, media_type: EntityKind) -> Self {
        Self {
            persistent_id,
            media_type,
            title: None,
            album_title: None,
            album_id: None,
            artist: None,
            artist_id: None,
            album_artist: None,
            album_artist_id: None,
            genre: None,
            genre_id: None,
            composer: None,
            composer_id: None,
            play_count: 0,
            duration: Duration::ZERO,
            date_added: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_album(
        mut self,
        id: PersistentId,
        title: impl Into<String>,
    ) -> Self {
        self.album_id = Some(id);
        self.album_title = Some(title.into());
        self
    }

    pub fn with_artist(
        mut self,
        id: PersistentId,
        name: impl Into<String>,
    ) -> Self {
        self.artist_id = Some(id);
        self.artist = Some(name.into());
        self
    }

    pub fn with_album_artist(
        mut self,
        id: PersistentId,
        name: impl Into<String>,
    ) -> Self {
        self.album_artist_id = Some(id);
        self.album_artist = Some(name.into());
        self
    }

    pub fn with_genre(
        mut self,
        id: PersistentId,
        name: impl Into<String>,
    ) -> Self {
        self.genre_id = Some(id);
        self.genre = Some(name.into());
        self
    }

    pub fn with_composer(
        mut self,
        id: PersistentId,
        name: impl Into<String>,
    ) -> Self {
        self.composer_id = Some(id);
        self.composer = Some(name.into());
        self
    }

    pub fn with_play_count(mut self, play_count: u32) -> Self {
        self.play_count = play_count;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Value stored under `key`, if the record carries one.
    pub fn value_for(&self, key: PropertyKey) -> Option<PropertyValue> {
        let text =
            |value: &Option<String>| value.clone().map(PropertyValue::Text);
        let id = |value: Option<PersistentId>| value.map(PropertyValue::Id);

        match key {
            PropertyKey::PersistentId => {
                Some(PropertyValue::Id(self.persistent_id))
            }
            PropertyKey::MediaType => {
                Some(PropertyValue::Kind(self.media_type))
            }
            PropertyKey::Title => text(&self.title),
            PropertyKey::AlbumTitle => text(&self.album_title),
            PropertyKey::AlbumPersistentId => id(self.album_id),
            PropertyKey::Artist => text(&self.artist),
            PropertyKey::ArtistPersistentId => id(self.artist_id),
            PropertyKey::AlbumArtist => text(&self.album_artist),
            PropertyKey::AlbumArtistPersistentId => id(self.album_artist_id),
            PropertyKey::Genre => text(&self.genre),
            PropertyKey::GenrePersistentId => id(self.genre_id),
            PropertyKey::Composer => text(&self.composer),
            PropertyKey::ComposerPersistentId => id(self.composer_id),
        }
    }
}

/// Records the store grouped together (an album, an artist, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItemCollection {
    items: Vec<MediaItem>,
}

impl MediaItemCollection {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item whose properties stand for the whole group.
    pub fn representative_item(&self) -> Option<&MediaItem> {
        self.items.first()
    }
}
