use std::fmt::{self, Display, Formatter};

/// Direction of a client-side sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `true` for [`SortOrder::Descending`].
    pub const fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// Named item properties usable as sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemField {
    Title,
    AlbumTitle,
    Artist,
    AlbumArtist,
    Genre,
    Composer,
    PlayCount,
    Duration,
    DateAdded,
}

impl Display for ItemField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemField::Title => "title",
            ItemField::AlbumTitle => "album_title",
            ItemField::Artist => "artist",
            ItemField::AlbumArtist => "album_artist",
            ItemField::Genre => "genre",
            ItemField::Composer => "composer",
            ItemField::PlayCount => "play_count",
            ItemField::Duration => "duration",
            ItemField::DateAdded => "date_added",
        };
        f.write_str(name)
    }
}
