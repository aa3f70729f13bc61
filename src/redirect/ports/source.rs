//! Port for fetching the remote redirect list.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::redirect::domain::RedirectEntry;

/// Result type for redirect-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Port for loading the full redirect list.
///
/// A fetch returns the complete list; callers replace any cached state
/// wholesale rather than merging. Implementations must not retry or
/// fall back to stale data on failure; the caller decides.
#[async_trait]
pub trait RedirectSource: Send + Sync {
    /// Fetches the redirect list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the transfer or the decode fails.
    async fn fetch(&self) -> SourceResult<Vec<RedirectEntry>>;
}

/// Errors that can occur while loading the redirect list.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The transfer itself failed.
    #[error("redirect list fetch failed: {0}")]
    Fetch(Arc<dyn std::error::Error + Send + Sync>),

    /// The document was transferred but did not decode as a redirect list.
    #[error("redirect list decode failed: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// The source or the shared cache is unavailable.
    #[error("redirect source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Creates a fetch error from any error type.
    pub fn fetch(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fetch(Arc::new(err))
    }

    /// Creates a decode error from any error type.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
