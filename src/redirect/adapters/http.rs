//! HTTP implementation of the `RedirectSource` port.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::redirect::config::ResolverConfig;
use crate::redirect::domain::RedirectEntry;
use crate::redirect::ports::source::{RedirectSource, SourceError, SourceResult};

/// Fetches the redirect list from the configured remote JSON document.
///
/// Plain unauthenticated GET, no pagination. The configured timeout bounds
/// both connection and body transfer; there is no retry, a failed fetch is
/// the caller's problem.
#[derive(Debug, Clone)]
pub struct HttpRedirectSource {
    client: Client,
    source_url: String,
}

impl HttpRedirectSource {
    /// Creates a source from the resolver configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the HTTP client cannot be constructed.
    pub fn new(config: &ResolverConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .build()
            .map_err(SourceError::fetch)?;
        Ok(Self {
            client,
            source_url: config.source_url.clone(),
        })
    }
}

#[async_trait]
impl RedirectSource for HttpRedirectSource {
    async fn fetch(&self) -> SourceResult<Vec<RedirectEntry>> {
        debug!(url = %self.source_url, "fetching redirect list");
        let response = self
            .client
            .get(self.source_url.as_str())
            .send()
            .await
            .map_err(SourceError::fetch)?
            .error_for_status()
            .map_err(SourceError::fetch)?;

        let entries: Vec<RedirectEntry> =
            response.json().await.map_err(SourceError::decode)?;
        debug!(count = entries.len(), "redirect list fetched");
        Ok(entries)
    }
}
