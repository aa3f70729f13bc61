//! Platform-facing interaction flow.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::redirect::domain::{CommandDefinition, ReplyAction, ResolveError, my_command};
use crate::redirect::ports::reporting::{ErrorReporter, InteractionContext};
use crate::redirect::ports::responder::{Responder, RespondResult};
use crate::redirect::ports::source::RedirectSource;
use crate::redirect::services::resolver::{NOT_FOUND_NOTICE, RedirectResolver};

/// Drives a [`Responder`] with resolver output.
///
/// This is the entry point the platform layer calls for the three
/// interaction kinds: slash-command invocations, autocomplete events, and
/// modal form submissions. Each interaction ends in exactly one responder
/// call; resolution failures are surfaced as ephemeral notices rather than
/// left to the platform's own error handling.
#[derive(Clone)]
pub struct InteractionService<S, E, R>
where
    S: RedirectSource,
    E: ErrorReporter,
    R: Responder,
{
    resolver: RedirectResolver<S, E>,
    responder: Arc<R>,
}

impl<S, E, R> InteractionService<S, E, R>
where
    S: RedirectSource,
    E: ErrorReporter,
    R: Responder,
{
    /// Creates an interaction service.
    #[must_use]
    pub const fn new(resolver: RedirectResolver<S, E>, responder: Arc<R>) -> Self {
        Self {
            resolver,
            responder,
        }
    }

    /// Returns the command surface to register with the platform.
    #[must_use]
    pub fn command_definition() -> CommandDefinition {
        my_command()
    }

    /// Handles a slash-command invocation.
    ///
    /// # Errors
    ///
    /// Returns an error only when platform delivery itself fails.
    pub async fn handle_command(&self, redirect: &str) -> RespondResult<()> {
        match self.resolver.resolve(redirect).await {
            Ok(action) => self.dispatch(&action).await,
            Err(error) => {
                warn!(%error, redirect, "redirect resolution failed");
                self.responder
                    .reply_ephemeral(&format!("Redirect lookup failed: {error}"))
                    .await
            }
        }
    }

    /// Handles an autocomplete event for the redirect option.
    ///
    /// Resolution failures never reach the platform; the user sees an
    /// empty suggestion list and the error goes to the reporter.
    ///
    /// # Errors
    ///
    /// Returns an error only when platform delivery itself fails.
    pub async fn handle_autocomplete(
        &self,
        partial: &str,
        context: &InteractionContext,
    ) -> RespondResult<()> {
        let choices = self.resolver.autocomplete(partial, context).await;
        self.responder.respond_choices(&choices).await
    }

    /// Handles a modal form submission for a parameterised redirect.
    ///
    /// # Errors
    ///
    /// Returns an error only when platform delivery itself fails.
    pub async fn handle_form_submit(
        &self,
        form_id: &str,
        fields: &BTreeMap<String, String>,
    ) -> RespondResult<()> {
        match self.resolver.complete_form(form_id, fields) {
            Ok(action) => self.dispatch(&action).await,
            Err(ResolveError::UnknownRedirect(key)) => {
                warn!(redirect = %key, "form submitted for a key absent from the cache");
                self.responder.reply_ephemeral(NOT_FOUND_NOTICE).await
            }
            Err(error) => {
                warn!(%error, form_id, "form completion failed");
                self.responder.reply_ephemeral(&error.to_string()).await
            }
        }
    }

    async fn dispatch(&self, action: &ReplyAction) -> RespondResult<()> {
        match action {
            ReplyAction::Ephemeral { content } => self.responder.reply_ephemeral(content).await,
            ReplyAction::Link(reply) => self.responder.reply_with_link(reply).await,
            ReplyAction::Form(form) => self.responder.show_form(form).await,
        }
    }
}
