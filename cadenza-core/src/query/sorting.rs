//! Client-side ordering of query results.
//!
//! Sorting happens after the store answered, on the caller's copy. It is
//! stable: records with equal keys keep their store order in either
//! direction.

use std::cmp::Ordering;
use std::fmt;

use cadenza_model::{ItemField, MediaItem, MediaItemCollection, SortOrder};

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Key extractor used to order records of type `T`.
pub struct SortBy<T> {
    label: String,
    compare: Comparator<T>,
}

impl<T> fmt::Debug for SortBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBy").field("key", &self.label()).finish()
    }
}

impl<T: 'static> SortBy<T> {
    /// Order by whatever `extract` returns for each record.
    pub fn key<K, F>(extract: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            label: std::any::type_name::<K>().to_string(),
            compare: Box::new(move |a: &T, b: &T| {
                extract(a).cmp(&extract(b))
            }),
        }
    }

    /// Same as [`SortBy::key`] with a readable name for logs.
    pub fn named<K, F>(label: impl Into<String>, extract: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            ..Self::key(extract)
        }
    }
}

impl<T> SortBy<T> {
    /// Name of the key, for logs and `Debug`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Stable in-place sort in `order`.
    pub fn apply(&self, records: &mut [T], order: SortOrder) {
        if order.is_descending() {
            records.sort_by(|a, b| self.compare(b, a));
        } else {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl SortBy<MediaItem> {
    /// Order items by a named property. Text compares case-insensitively and
    /// records missing the property sort first.
    pub fn field(field: ItemField) -> Self {
        let label = field.to_string();
        match field {
            ItemField::Title => text_key(label, |i| i.title.as_deref()),
            ItemField::AlbumTitle => {
                text_key(label, |i| i.album_title.as_deref())
            }
            ItemField::Artist => text_key(label, |i| i.artist.as_deref()),
            ItemField::AlbumArtist => {
                text_key(label, |i| i.album_artist.as_deref())
            }
            ItemField::Genre => text_key(label, |i| i.genre.as_deref()),
            ItemField::Composer => text_key(label, |i| i.composer.as_deref()),
            ItemField::PlayCount => Self::named(label, |i| i.play_count),
            ItemField::Duration => Self::named(label, |i| i.duration),
            ItemField::DateAdded => Self::named(label, |i| i.date_added),
        }
    }
}

impl SortBy<MediaItemCollection> {
    /// Order collections by a property of their representative item.
    pub fn representative(field: ItemField) -> Self {
        let by_item = SortBy::<MediaItem>::field(field);
        Self {
            label: format!("representative.{}", by_item.label()),
            compare: Box::new(
                move |a: &MediaItemCollection, b: &MediaItemCollection| {
                    match (a.representative_item(), b.representative_item()) {
                        (Some(a), Some(b)) => by_item.compare(a, b),
                        (None, Some(_)) => Ordering::Less,
                        (Some(_), None) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                },
            ),
        }
    }
}

fn text_key(
    label: String,
    extract: fn(&MediaItem) -> Option<&str>,
) -> SortBy<MediaItem> {
    SortBy::named(label, move |item| extract(item).map(str::to_lowercase))
}

/// Sort `records` when a key is given; otherwise leave store order alone.
pub fn sort_records<T>(
    records: &mut [T],
    sorted_by: Option<&SortBy<T>>,
    order: SortOrder,
) {
    if let Some(sort) = sorted_by {
        sort.apply(records, order);
    }
}
