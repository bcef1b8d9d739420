use std::fmt::{self, Display, Formatter};

/// Media type bitmask understood by the catalog store.
///
/// Concrete kinds occupy a single bit; the `Any*` variants are masks covering a
/// family. Filters against this property are evaluated with mask semantics,
/// see [`EntityKind::contains`] and [`EntityKind::intersects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    Music,
    Podcast,
    AudioBook,
    AudioITunesU,
    AnyAudio,
    Movie,
    TvShow,
    VideoPodcast,
    MusicVideo,
    VideoITunesU,
    HomeVideo,
    AnyVideo,
    Any,
}

impl EntityKind {
    /// Raw store bitmask for this kind
    pub const fn bits(self) -> u64 {
        match self {
            EntityKind::Music => 1 << 0,
            EntityKind::Podcast => 1 << 1,
            EntityKind::AudioBook => 1 << 2,
            EntityKind::AudioITunesU => 1 << 3,
            EntityKind::AnyAudio => 0x00ff,
            EntityKind::Movie => 1 << 8,
            EntityKind::TvShow => 1 << 9,
            EntityKind::VideoPodcast => 1 << 10,
            EntityKind::MusicVideo => 1 << 11,
            EntityKind::VideoITunesU => 1 << 12,
            EntityKind::HomeVideo => 1 << 13,
            EntityKind::AnyVideo => 0xff00,
            EntityKind::Any => u64::MAX,
        }
    }

    /// True when every bit of `other` is present in `self`.
    pub const fn contains(self, other: EntityKind) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    /// True when the two masks share at least one bit.
    pub const fn intersects(self, other: EntityKind) -> bool {
        self.bits() & other.bits() != 0
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Music => "music",
            EntityKind::Podcast => "podcast",
            EntityKind::AudioBook => "audio_book",
            EntityKind::AudioITunesU => "audio_itunes_u",
            EntityKind::AnyAudio => "any_audio",
            EntityKind::Movie => "movie",
            EntityKind::TvShow => "tv_show",
            EntityKind::VideoPodcast => "video_podcast",
            EntityKind::MusicVideo => "music_video",
            EntityKind::VideoITunesU => "video_itunes_u",
            EntityKind::HomeVideo => "home_video",
            EntityKind::AnyVideo => "any_video",
            EntityKind::Any => "any",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_masks_contain_their_members() {
        assert!(EntityKind::AnyAudio.contains(EntityKind::Music));
        assert!(EntityKind::AnyAudio.contains(EntityKind::AudioBook));
        assert!(!EntityKind::AnyAudio.contains(EntityKind::Movie));
        assert!(EntityKind::AnyVideo.contains(EntityKind::MusicVideo));
        assert!(EntityKind::Any.contains(EntityKind::HomeVideo));
    }

    #[test]
    fn single_kinds_only_contain_themselves() {
        assert!(EntityKind::Music.contains(EntityKind::Music));
        assert!(!EntityKind::Music.contains(EntityKind::Podcast));
        assert!(!EntityKind::Music.contains(EntityKind::AnyAudio));
        assert!(EntityKind::Music.intersects(EntityKind::AnyAudio));
        assert!(!EntityKind::Music.intersects(EntityKind::AnyVideo));
    }
}
