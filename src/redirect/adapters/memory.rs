//! In-memory implementation of the `RedirectSource` port.
//!
//! Provides a fixed redirect list for unit testing without a network
//! dependency. Not suitable for production use.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::redirect::domain::RedirectEntry;
use crate::redirect::ports::source::{RedirectSource, SourceError, SourceResult};

/// In-memory implementation of [`RedirectSource`].
///
/// Every fetch returns a clone of the fixed list and bumps a counter so
/// tests can assert reload behaviour.
///
/// # Example
///
/// ```
/// use waypost::redirect::adapters::memory::StaticRedirectSource;
/// use waypost::redirect::domain::RedirectEntry;
///
/// let source = StaticRedirectSource::new(vec![RedirectEntry::new(
///     "config",
///     "Configuration",
///     "Open the configuration panel",
/// )]);
/// assert_eq!(source.fetch_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRedirectSource {
    entries: Vec<RedirectEntry>,
    fetches: Arc<AtomicUsize>,
}

impl StaticRedirectSource {
    /// Creates a source serving the given list.
    #[must_use]
    pub fn new(entries: Vec<RedirectEntry>) -> Self {
        Self {
            entries,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns how many times the list has been fetched.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RedirectSource for StaticRedirectSource {
    async fn fetch(&self) -> SourceResult<Vec<RedirectEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}

/// A [`RedirectSource`] whose every fetch fails.
///
/// Used to exercise failure paths in tests without a network dependency.
#[derive(Debug, Clone, Default)]
pub struct FailingRedirectSource;

#[async_trait]
impl RedirectSource for FailingRedirectSource {
    async fn fetch(&self) -> SourceResult<Vec<RedirectEntry>> {
        Err(SourceError::Unavailable(
            "redirect list endpoint unreachable".to_owned(),
        ))
    }
}
