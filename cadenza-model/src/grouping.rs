use std::fmt::{self, Display, Formatter};

/// How the store groups returned records into collections.
///
/// The core never interprets this value; it is handed to the store as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupingMode {
    Title,
    Album,
    Artist,
    AlbumArtist,
    Composer,
    Genre,
    PodcastTitle,
}

impl GroupingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            GroupingMode::Title => "title",
            GroupingMode::Album => "album",
            GroupingMode::Artist => "artist",
            GroupingMode::AlbumArtist => "album_artist",
            GroupingMode::Composer => "composer",
            GroupingMode::Genre => "genre",
            GroupingMode::PodcastTitle => "podcast_title",
        }
    }
}

impl Display for GroupingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
