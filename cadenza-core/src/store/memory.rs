use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use cadenza_model::{
    AuthorizationStatus, ComparisonMode, FilterDescriptor, FilterSet,
    GroupingMode, MediaItem, MediaItemCollection, PersistentId, PropertyValue,
};

use super::{CatalogStore, QueryOutcome};

/// Catalog store backed by a fixed list of items.
///
/// Models the observable behaviour of the device store closely enough to
/// drive the facade end to end:
///
/// - an unauthorized store answers every query with the `NotFound` sentinel;
/// - an authorized query that matches nothing is `Empty`;
/// - a permission request only "prompts" (and waits `prompt_delay`) while the
///   status is still `NotDetermined`, otherwise it resolves to the current
///   status at once.
#[derive(Debug)]
pub struct InMemoryStore {
    items: Vec<MediaItem>,
    status: Mutex<AuthorizationStatus>,
    grant: AuthorizationStatus,
    persist_grant: bool,
    prompt_delay: Option<Duration>,
    query_delay: Option<Duration>,
    authorization_requests: AtomicUsize,
    queries_executed: AtomicUsize,
}

impl InMemoryStore {
    /// Store in `NotDetermined` state whose prompt grants access.
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            status: Mutex::new(AuthorizationStatus::NotDetermined),
            grant: AuthorizationStatus::Authorized,
            persist_grant: true,
            prompt_delay: None,
            query_delay: None,
            authorization_requests: AtomicUsize::new(0),
            queries_executed: AtomicUsize::new(0),
        }
    }

    pub fn with_status(self, status: AuthorizationStatus) -> Self {
        self.set_status(status);
        self
    }

    /// Status the permission prompt resolves to.
    pub fn with_grant(mut self, grant: AuthorizationStatus) -> Self {
        self.grant = grant;
        self
    }

    /// When `false`, answering the prompt leaves the reported status as it
    /// was, like a store whose settings change has not landed yet.
    pub fn with_persisted_grant(mut self, persist: bool) -> Self {
        self.persist_grant = persist;
        self
    }

    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = Some(delay);
        self
    }

    pub fn with_query_delay(mut self, delay: Duration) -> Self {
        self.query_delay = Some(delay);
        self
    }

    /// Simulate the user flipping the permission in system settings.
    pub fn set_status(&self, status: AuthorizationStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of permission requests received so far.
    pub fn authorization_requests(&self) -> usize {
        self.authorization_requests.load(Ordering::SeqCst)
    }

    /// Number of item and collection queries executed so far.
    pub fn queries_executed(&self) -> usize {
        self.queries_executed.load(Ordering::SeqCst)
    }

    fn current_status(&self) -> AuthorizationStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn execute(&self, filters: &FilterSet) -> Option<Vec<&MediaItem>> {
        self.queries_executed.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.query_delay {
            tokio::time::sleep(delay).await;
        }

        if !self.current_status().is_authorized() {
            return None;
        }

        Some(
            self.items
                .iter()
                .filter(|item| filters.iter().all(|f| matches(f, item)))
                .collect(),
        )
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.current_status()
    }

    async fn request_authorization(&self) -> AuthorizationStatus {
        self.authorization_requests.fetch_add(1, Ordering::SeqCst);

        let current = self.current_status();
        if current != AuthorizationStatus::NotDetermined {
            return current;
        }

        if let Some(delay) = self.prompt_delay {
            tokio::time::sleep(delay).await;
        }

        if self.persist_grant {
            self.set_status(self.grant);
        }
        self.grant
    }

    async fn query_items(
        &self,
        filters: &FilterSet,
        _grouping: GroupingMode,
    ) -> QueryOutcome<MediaItem> {
        self.execute(filters)
            .await
            .map(|matched| matched.into_iter().cloned().collect())
            .into()
    }

    async fn query_collections(
        &self,
        filters: &FilterSet,
        grouping: GroupingMode,
    ) -> QueryOutcome<MediaItemCollection> {
        self.execute(filters)
            .await
            .map(|matched| group(matched, grouping))
            .into()
    }
}

/// Text compares case-insensitively; ids by equality; kinds with mask
/// semantics (`EqualTo`: the filter mask covers the item kind, `Contains`:
/// the masks overlap).
fn matches(descriptor: &FilterDescriptor, item: &MediaItem) -> bool {
    let Some(actual) = item.value_for(descriptor.key) else {
        return false;
    };

    match (&descriptor.value, &actual, descriptor.comparison) {
        (PropertyValue::Kind(wanted), PropertyValue::Kind(kind), mode) => {
            match mode {
                ComparisonMode::EqualTo => wanted.contains(*kind),
                ComparisonMode::Contains => wanted.intersects(*kind),
            }
        }
        (PropertyValue::Id(wanted), PropertyValue::Id(id), _) => wanted == id,
        (PropertyValue::Text(wanted), PropertyValue::Text(text), mode) => {
            let wanted = wanted.to_lowercase();
            let text = text.to_lowercase();
            match mode {
                ComparisonMode::EqualTo => text == wanted,
                ComparisonMode::Contains => text.contains(&wanted),
            }
        }
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Id(PersistentId),
    Text(String),
    Ungrouped(PersistentId),
}

fn group_key(item: &MediaItem, grouping: GroupingMode) -> GroupKey {
    let (id, text) = match grouping {
        GroupingMode::Title => (None, item.title.as_deref()),
        GroupingMode::Album => (item.album_id, item.album_title.as_deref()),
        GroupingMode::Artist => (item.artist_id, item.artist.as_deref()),
        GroupingMode::AlbumArtist => {
            (item.album_artist_id, item.album_artist.as_deref())
        }
        GroupingMode::Composer => (item.composer_id, item.composer.as_deref()),
        GroupingMode::Genre => (item.genre_id, item.genre.as_deref()),
        GroupingMode::PodcastTitle => (None, item.album_title.as_deref()),
    };

    match (id, text) {
        (Some(id), _) => GroupKey::Id(id),
        (None, Some(text)) => GroupKey::Text(text.to_lowercase()),
        (None, None) => GroupKey::Ungrouped(item.persistent_id),
    }
}

/// Groups in order of first appearance; members keep store order.
fn group(
    items: Vec<&MediaItem>,
    grouping: GroupingMode,
) -> Vec<MediaItemCollection> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<MediaItem>> = Vec::new();

    for item in items {
        let key = group_key(item, grouping);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(item.clone());
    }

    groups.into_iter().map(MediaItemCollection::new).collect()
}
