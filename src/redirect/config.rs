//! Configuration for the redirect resolver.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default remote document holding the redirect list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/home-assistant/my.home-assistant.io/main/redirect.json";

/// Default base for outbound deep links.
pub const DEFAULT_LINK_BASE: &str = "https://my.home-assistant.io";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Resolver configuration.
///
/// All fields have serviceable defaults; deployments normally deserialise
/// this from their wider bot configuration and override nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URL of the remote JSON document holding the redirect list.
    pub source_url: String,
    /// Base URL deep links are built against.
    pub link_base: String,
    /// Upper bound on a single redirect-list fetch, in seconds. A hung
    /// fetch would otherwise block the invoking interaction indefinitely.
    pub fetch_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            link_base: DEFAULT_LINK_BASE.to_owned(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl ResolverConfig {
    /// Returns the fetch timeout as a [`Duration`].
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
