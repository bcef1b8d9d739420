use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use cadenza_core::InMemoryStore;
use cadenza_model::{AuthorizationStatus, MediaItem};
use serde::Deserialize;

/// Catalog file the CLI stands up an [`InMemoryStore`] from.
///
/// ```toml
/// status = "not_determined"
/// grant = "authorized"
/// persist_grant = true
///
/// [[items]]
/// persistent_id = 1
/// media_type = "music"
/// title = "Aja"
/// ```
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    #[serde(default = "not_determined")]
    pub status: AuthorizationStatus,
    #[serde(default = "authorized")]
    pub grant: AuthorizationStatus,
    #[serde(default = "persist")]
    pub persist_grant: bool,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

fn not_determined() -> AuthorizationStatus {
    AuthorizationStatus::NotDetermined
}

fn authorized() -> AuthorizationStatus {
    AuthorizationStatus::Authorized
}

fn persist() -> bool {
    true
}

impl CatalogFixture {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog fixture {}", path.display())
        })?;
        Self::parse(&contents)
            .with_context(|| {
                format!("invalid catalog fixture {}", path.display())
            })
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).map_err(|err| anyhow!("{err}"))
    }

    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore::new(self.items)
            .with_status(self.status)
            .with_grant(self.grant)
            .with_persisted_grant(self.persist_grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_core::CatalogStore;
    use cadenza_model::EntityKind;

    #[test]
    fn omitted_fields_take_defaults() {
        let fixture = CatalogFixture::parse("").unwrap();
        assert_eq!(fixture.status, AuthorizationStatus::NotDetermined);
        assert_eq!(fixture.grant, AuthorizationStatus::Authorized);
        assert!(fixture.persist_grant);
        assert!(fixture.items.is_empty());
    }

    #[test]
    fn items_parse_with_optional_properties() {
        let fixture = CatalogFixture::parse(
            r#"
status = "denied"

[[items]]
persistent_id = 7
media_type = "podcast"
title = "Episode"
play_count = 3
duration = { secs = 90, nanos = 0 }
date_added = "2024-05-01T10:00:00Z"
"#,
        )
        .unwrap();

        let item = &fixture.items[0];
        assert_eq!(item.persistent_id.get(), 7);
        assert_eq!(item.media_type, EntityKind::Podcast);
        assert_eq!(item.duration.as_secs(), 90);
        assert!(item.date_added.is_some());
        assert!(item.artist.is_none());

        let store = fixture.into_store();
        assert_eq!(store.authorization_status(), AuthorizationStatus::Denied);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(CatalogFixture::parse("status = \"maybe\"").is_err());
    }
}
