use std::fmt::{self, Display, Formatter};

/// Three-way answer of a store query.
///
/// `NotFound` is the store's explicit "no result" sentinel; `Empty` is a valid
/// query that matched nothing. Only the former becomes a
/// [`crate::error::QueryError`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    NotFound,
    Empty,
    Found(Vec<T>),
}

impl<T> QueryOutcome<T> {
    /// Wrap a result list, normalising a zero-length list to `Empty`.
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Found(records)
        }
    }

    pub fn kind(&self) -> QueryOutcomeKind {
        match self {
            QueryOutcome::NotFound => QueryOutcomeKind::NotFound,
            QueryOutcome::Empty => QueryOutcomeKind::Empty,
            QueryOutcome::Found(_) => QueryOutcomeKind::Found,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Found(records) => records.len(),
            QueryOutcome::NotFound | QueryOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` for the sentinel, the (possibly empty) records otherwise.
    pub fn into_records(self) -> Option<Vec<T>> {
        match self {
            QueryOutcome::NotFound => None,
            QueryOutcome::Empty => Some(Vec::new()),
            QueryOutcome::Found(records) => Some(records),
        }
    }
}

/// Adapter for bindings that still report through an optional list.
impl<T> From<Option<Vec<T>>> for QueryOutcome<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        match value {
            None => QueryOutcome::NotFound,
            Some(records) => QueryOutcome::from_records(records),
        }
    }
}

/// Payload-free view of a [`QueryOutcome`], for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcomeKind {
    NotFound,
    Empty,
    Found,
}

impl Display for QueryOutcomeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcomeKind::NotFound => f.write_str("not_found"),
            QueryOutcomeKind::Empty => f.write_str("empty"),
            QueryOutcomeKind::Found => f.write_str("found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_results_keep_sentinel_and_empty_apart() {
        assert_eq!(QueryOutcome::<u8>::from(None), QueryOutcome::NotFound);
        assert_eq!(QueryOutcome::<u8>::from(Some(vec![])), QueryOutcome::Empty);
        assert_eq!(
            QueryOutcome::from(Some(vec![1, 2])),
            QueryOutcome::Found(vec![1, 2])
        );
    }

    #[test]
    fn into_records_only_loses_the_sentinel() {
        assert_eq!(QueryOutcome::<u8>::NotFound.into_records(), None);
        assert_eq!(QueryOutcome::<u8>::Empty.into_records(), Some(vec![]));
        assert_eq!(QueryOutcome::Found(vec![3]).into_records(), Some(vec![3]));
    }
}
