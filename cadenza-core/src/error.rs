use cadenza_model::{AuthorizationStatus, PredicateInfo};
use thiserror::Error;

/// Terminal outcome of an authorization request that did not grant access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("media catalog access not authorized (status: {0})")]
    Unauthorized(AuthorizationStatus),
}

impl AuthorizationError {
    pub fn status(&self) -> AuthorizationStatus {
        match self {
            AuthorizationError::Unauthorized(status) => *status,
        }
    }
}

/// The store answered a query with its explicit "no result" signal.
///
/// A valid but empty result is never reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no items found")]
    ItemsNotFound,

    #[error("no item found for {0}")]
    ItemNotFound(PredicateInfo),

    #[error("no collections found")]
    CollectionsNotFound,

    #[error("no collection found for {0}")]
    CollectionNotFound(PredicateInfo),
}

impl QueryError {
    /// Predicate that failed to match, for the filtered query shapes.
    pub fn predicate(&self) -> Option<&PredicateInfo> {
        match self {
            QueryError::ItemNotFound(predicate)
            | QueryError::CollectionNotFound(predicate) => Some(predicate),
            QueryError::ItemsNotFound | QueryError::CollectionsNotFound => None,
        }
    }
}

/// Everything a [`crate::MediaLibrary`] call can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("operation cancelled")]
    Cancelled,
}

impl LibraryError {
    pub fn as_query(&self) -> Option<&QueryError> {
        match self {
            LibraryError::Query(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_authorization(&self) -> Option<&AuthorizationError> {
        match self {
            LibraryError::Authorization(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LibraryError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
