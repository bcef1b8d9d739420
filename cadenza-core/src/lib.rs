//! # Cadenza Core
//!
//! Permission-gated query access to a protected media catalog.
//!
//! ## Overview
//!
//! The catalog store belongs to the platform: it decides whether the user
//! granted access, and it answers filtered queries. `cadenza-core` sits in
//! front of it and provides:
//!
//! - **Authorization**: [`AuthorizationGate`] reads the permission state and
//!   requests access at most once per call, joining concurrent requests
//! - **Queries**: [`QueryService`] builds filter sets from an entity kind and a
//!   predicate, and turns the store's "not found" sentinel into typed errors
//! - **Facade**: [`MediaLibrary`] checks authorization before every query and
//!   adds client-side sorting plus song/album conveniences
//! - **Observability**: components report through an injected
//!   [`CatalogObserver`] instead of a global logger
//!
//! ## Feature Flags
//!
//! - `compat` (default): deprecated method names on [`MediaLibrary`]
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cadenza_core::{InMemoryStore, MediaLibrary, SortBy};
//! use cadenza_core::model::{ItemField, SortOrder};
//!
//! async fn most_played(store: InMemoryStore) -> cadenza_core::Result<()> {
//!     let library = MediaLibrary::new(Arc::new(store));
//!     let by_plays = SortBy::field(ItemField::PlayCount);
//!     let songs = library
//!         .songs(Some(by_plays), SortOrder::Descending)
//!         .await?;
//!
//!     for song in songs.iter().take(10) {
//!         println!("{:?} ({} plays)", song.title, song.play_count);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Permission state machine and request coalescing
pub mod auth;

/// Facade configuration loaded from files or the environment
pub mod config;

/// Error families surfaced by the facade
pub mod error;

/// The caller-facing facade
pub mod library;

/// Injected observability hooks
pub mod observer;

/// Predicate queries and client-side sorting
pub mod query;

/// Catalog store abstraction and the in-memory implementation
pub mod store;

/// Data model re-exported for convenience
pub use cadenza_model as model;

pub use auth::AuthorizationGate;
pub use config::{CatalogConfig, ConfigSource, PostAuthorization};
pub use error::{AuthorizationError, LibraryError, QueryError, Result};
pub use library::{MediaLibrary, MediaLibraryBuilder};
pub use observer::{CatalogObserver, NoopObserver, QueryShape, TracingObserver};
pub use query::{QueryService, SortBy};
pub use store::{CatalogStore, InMemoryStore, QueryOutcome, QueryOutcomeKind};
