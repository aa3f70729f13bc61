//! Process-wide cache over the redirect-list source.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::redirect::domain::RedirectEntry;
use crate::redirect::ports::source::{RedirectSource, SourceError, SourceResult};

/// Shared, reload-on-demand view of the remote redirect list.
///
/// Empty at startup; populated on first use and fully replaced on every
/// fetch. There is no expiry beyond an explicit forced reload. Concurrent
/// reloads race benignly: the last fetch to complete wins, which is
/// acceptable for a read-mostly list that rarely changes.
#[derive(Debug, Clone)]
pub struct RedirectCache<S>
where
    S: RedirectSource,
{
    source: Arc<S>,
    entries: Arc<RwLock<Vec<RedirectEntry>>>,
}

impl<S> RedirectCache<S>
where
    S: RedirectSource,
{
    /// Creates an empty cache over the given source.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Loads the redirect list, fetching only when forced or empty.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the fetch or the decode fails; the
    /// cached list is left untouched in that case.
    pub async fn load(&self, force: bool) -> SourceResult<()> {
        if !force && !self.is_unloaded()? {
            return Ok(());
        }

        let fetched = self.source.fetch().await?;
        let count = fetched.len();
        let mut write_guard = self
            .entries
            .write()
            .map_err(|e| SourceError::Unavailable(format!("lock poisoned: {e}")))?;
        *write_guard = fetched;
        drop(write_guard);

        info!(count, force, "redirect list loaded");
        Ok(())
    }

    /// Returns the first entry whose key equals `key`, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] when the internal lock is
    /// poisoned.
    pub fn find(&self, key: &str) -> SourceResult<Option<RedirectEntry>> {
        let read_guard = self
            .entries
            .read()
            .map_err(|e| SourceError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(read_guard.iter().find(|entry| entry.redirect == key).cloned())
    }

    /// Returns a cloned view of the current list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] when the internal lock is
    /// poisoned.
    pub fn snapshot(&self) -> SourceResult<Vec<RedirectEntry>> {
        let read_guard = self
            .entries
            .read()
            .map_err(|e| SourceError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(read_guard.clone())
    }

    /// Returns the number of cached entries.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty cache. For error-propagating access, use
    /// [`Self::snapshot`] instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no entries are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_unloaded(&self) -> SourceResult<bool> {
        let read_guard = self
            .entries
            .read()
            .map_err(|e| SourceError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(read_guard.is_empty())
    }
}
