//!
//! Helps break down the pieces of running the `search` command.
//!

use thiserror::Error;

use crate::package::{
    IndexEntry,
    port::{PackageStore, StoreError},
    service::ExitCode,
};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search terms required")]
    NoTerms,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExitCode for SearchError {
    fn exit_code(&self) -> i32 {
        1
    }
}

/// Index entries matching any of `queries`.
///
/// Results keep the order of the queries and of the index; an entry matched
/// by several queries appears once.
///
/// # Errors
///
/// Returns [`SearchError::NoTerms`] for an empty query list and
/// [`SearchError::Store`] if the index cannot be searched.
pub fn search<S>(store: &S, queries: &[String]) -> Result<Vec<IndexEntry>, SearchError>
where
    S: PackageStore + ?Sized,
{
    if queries.is_empty() {
        return Err(SearchError::NoTerms);
    }

    let mut results: Vec<IndexEntry> = Vec::new();
    for query in queries {
        let matches = store.search_index(query)?;
        tracing::debug!(query = %query, count = matches.len(), "searched index");

        for entry in matches {
            if !results.contains(&entry) {
                results.push(entry);
            }
        }
    }

    Ok(results)
}
