//! Core data model definitions shared across Cadenza crates.
//!
//! Everything here is pure: no I/O, no async, no store access. The types
//! describe what the catalog store reports (authorization state, media records)
//! and what a caller may ask of it (predicates, grouping, ordering).
#![allow(missing_docs)]

pub mod authorization;
pub mod entity_kind;
pub mod grouping;
pub mod ids;
pub mod item;
pub mod predicate;
pub mod prelude;
pub mod property;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use authorization::AuthorizationStatus;
pub use entity_kind::EntityKind;
pub use grouping::GroupingMode;
pub use ids::PersistentId;
pub use item::{MediaItem, MediaItemCollection};
pub use predicate::{ComparisonMode, FilterDescriptor, FilterSet, PredicateInfo};
pub use property::{PropertyKey, PropertyValue};
pub use sort::{ItemField, SortOrder};
