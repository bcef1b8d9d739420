use std::fmt::{self, Display, Formatter};

use crate::{EntityKind, PersistentId};

/// Store property identifiers a filter can target.
///
/// `as_str` yields the store's own property names, which is also what error
/// messages show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyKey {
    PersistentId,
    MediaType,
    Title,
    AlbumTitle,
    AlbumPersistentId,
    Artist,
    ArtistPersistentId,
    AlbumArtist,
    AlbumArtistPersistentId,
    Genre,
    GenrePersistentId,
    Composer,
    ComposerPersistentId,
}

impl PropertyKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyKey::PersistentId => "persistentID",
            PropertyKey::MediaType => "mediaType",
            PropertyKey::Title => "title",
            PropertyKey::AlbumTitle => "albumTitle",
            PropertyKey::AlbumPersistentId => "albumPID",
            PropertyKey::Artist => "artist",
            PropertyKey::ArtistPersistentId => "artistPID",
            PropertyKey::AlbumArtist => "albumArtist",
            PropertyKey::AlbumArtistPersistentId => "albumArtistPID",
            PropertyKey::Genre => "genre",
            PropertyKey::GenrePersistentId => "genrePID",
            PropertyKey::Composer => "composer",
            PropertyKey::ComposerPersistentId => "composerPID",
        }
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value stored under a [`PropertyKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyValue {
    Id(PersistentId),
    Kind(EntityKind),
    Text(String),
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Id(id) => write!(f, "{id}"),
            PropertyValue::Kind(kind) => write!(f, "{}", kind.bits()),
            PropertyValue::Text(text) => f.write_str(text),
        }
    }
}
