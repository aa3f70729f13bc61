//! Port for fire-and-forget error reporting.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::redirect::domain::ResolveError;

/// Structured context attached to an error report.
///
/// Mirrors what the platform knows about the originating interaction so
/// reports can be traced back without the platform SDK types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionContext {
    /// Raw interaction payload, serialised by the platform layer.
    pub interaction: String,
    /// Invoking user identifier.
    pub user: String,
    /// Channel the interaction originated from.
    pub channel: String,
    /// Command name, with options as the platform renders them.
    pub command: String,
}

impl InteractionContext {
    /// Creates an interaction context.
    #[must_use]
    pub fn new(
        interaction: impl Into<String>,
        user: impl Into<String>,
        channel: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            interaction: interaction.into(),
            user: user.into(),
            channel: channel.into(),
            command: command.into(),
        }
    }
}

/// Port for reporting suppressed errors to a tracking collaborator.
///
/// Reporting is fire-and-forget: the result is ignored and a failing
/// reporter must never disturb the interaction being handled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Reports an error together with its interaction context.
    async fn report(&self, error: &ResolveError, context: &InteractionContext);
}
