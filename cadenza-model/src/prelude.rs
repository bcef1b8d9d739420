pub use crate::{
    AuthorizationStatus, ComparisonMode, EntityKind, FilterDescriptor,
    FilterSet, GroupingMode, ItemField, MediaItem, MediaItemCollection,
    PersistentId, PredicateInfo, PropertyKey, PropertyValue, SortOrder,
};
