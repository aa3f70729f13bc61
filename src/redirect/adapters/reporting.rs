//! `tracing`-backed implementation of the `ErrorReporter` port.

use async_trait::async_trait;
use tracing::error;

use crate::redirect::domain::ResolveError;
use crate::redirect::ports::reporting::{ErrorReporter, InteractionContext};

/// Reports suppressed errors as `tracing` events at error level.
///
/// Deployments wire their tracking collector (Sentry or similar) into the
/// subscriber; this adapter stays ignorant of it.
#[derive(Debug, Clone, Default)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    /// Creates a reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ErrorReporter for TracingErrorReporter {
    async fn report(&self, report_error: &ResolveError, context: &InteractionContext) {
        error!(
            error = %report_error,
            interaction = %context.interaction,
            user = %context.user,
            channel = %context.channel,
            command = %context.command,
            "suppressed interaction error",
        );
    }
}
