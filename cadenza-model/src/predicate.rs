//! Semantic filter intents and the store-level descriptors they resolve to.
//!
//! A [`PredicateInfo`] names *what* to match ("by artist") together with the
//! value. Pairing it with a [`ComparisonMode`] yields a [`FilterDescriptor`],
//! the shape the store actually consumes. The conversion is total: every
//! variant resolves to exactly one key and value.

use std::fmt::{self, Display, Formatter};

use crate::{EntityKind, PersistentId, PropertyKey, PropertyValue};

/// How a predicate's value is matched against stored values.
///
/// No `Default`: callers pick a mode. Only the library facade's convenience
/// wrappers assume [`ComparisonMode::EqualTo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonMode {
    /// Exact match
    EqualTo,
    /// Substring (or mask overlap) match
    Contains,
}

impl Display for ComparisonMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonMode::EqualTo => f.write_str("equal_to"),
            ComparisonMode::Contains => f.write_str("contains"),
        }
    }
}

/// A filter intent paired with the value to look for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PredicateInfo {
    ById(PersistentId),
    ByEntityKind(EntityKind),
    ByTitle(String),
    ByAlbumTitle(String),
    ByAlbumId(PersistentId),
    ByArtist(String),
    ByArtistId(PersistentId),
    ByAlbumArtist(String),
    ByAlbumArtistId(PersistentId),
    ByGenre(String),
    ByGenreId(PersistentId),
    ByComposer(String),
    ByComposerId(PersistentId),
}

impl PredicateInfo {
    /// Store property this predicate filters on.
    pub const fn property_key(&self) -> PropertyKey {
        match self {
            PredicateInfo::ById(_) => PropertyKey::PersistentId,
            PredicateInfo::ByEntityKind(_) => PropertyKey::MediaType,
            PredicateInfo::ByTitle(_) => PropertyKey::Title,
            PredicateInfo::ByAlbumTitle(_) => PropertyKey::AlbumTitle,
            PredicateInfo::ByAlbumId(_) => PropertyKey::AlbumPersistentId,
            PredicateInfo::ByArtist(_) => PropertyKey::Artist,
            PredicateInfo::ByArtistId(_) => PropertyKey::ArtistPersistentId,
            PredicateInfo::ByAlbumArtist(_) => PropertyKey::AlbumArtist,
            PredicateInfo::ByAlbumArtistId(_) => {
                PropertyKey::AlbumArtistPersistentId
            }
            PredicateInfo::ByGenre(_) => PropertyKey::Genre,
            PredicateInfo::ByGenreId(_) => PropertyKey::GenrePersistentId,
            PredicateInfo::ByComposer(_) => PropertyKey::Composer,
            PredicateInfo::ByComposerId(_) => PropertyKey::ComposerPersistentId,
        }
    }

    /// Raw value handed to the store.
    pub fn value(&self) -> PropertyValue {
        match self {
            PredicateInfo::ById(id)
            | PredicateInfo::ByAlbumId(id)
            | PredicateInfo::ByArtistId(id)
            | PredicateInfo::ByAlbumArtistId(id)
            | PredicateInfo::ByGenreId(id)
            | PredicateInfo::ByComposerId(id) => PropertyValue::Id(*id),
            PredicateInfo::ByEntityKind(kind) => PropertyValue::Kind(*kind),
            PredicateInfo::ByTitle(text)
            | PredicateInfo::ByAlbumTitle(text)
            | PredicateInfo::ByArtist(text)
            | PredicateInfo::ByAlbumArtist(text)
            | PredicateInfo::ByGenre(text)
            | PredicateInfo::ByComposer(text) => {
                PropertyValue::Text(text.clone())
            }
        }
    }

    /// Resolve into a store filter using `comparison`, which is carried over
    /// untouched.
    pub fn descriptor(&self, comparison: ComparisonMode) -> FilterDescriptor {
        FilterDescriptor {
            key: self.property_key(),
            value: self.value(),
            comparison,
        }
    }
}

impl Display for PredicateInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} with value '{}'", self.property_key(), self.value())
    }
}

/// A single store-level filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterDescriptor {
    pub key: PropertyKey,
    pub value: PropertyValue,
    pub comparison: ComparisonMode,
}

/// Ordered conjunction of filters handed to the store in one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilterSet {
    descriptors: Vec<FilterDescriptor>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter, builder style.
    pub fn with(mut self, descriptor: FilterDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterDescriptor> {
        self.descriptors.iter()
    }

    pub fn as_slice(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterDescriptor;
    type IntoIter = std::slice::Iter<'a, FilterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl FromIterator<FilterDescriptor> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterDescriptor>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl Display for FilterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            if index > 0 {
                f.write_str(" AND ")?;
            }
            write!(
                f,
                "{} {} '{}'",
                descriptor.key, descriptor.comparison, descriptor.value
            )?;
        }
        Ok(())
    }
}
