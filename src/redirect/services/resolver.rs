//! Redirect keyword resolution service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::redirect::domain::{
    Choice, FormRequest, LinkBuilder, LinkReply, ReplyAction, ResolveError,
};
use crate::redirect::ports::reporting::{ErrorReporter, InteractionContext};
use crate::redirect::ports::source::{RedirectSource, SourceError};
use crate::redirect::services::cache::RedirectCache;

/// Reserved keyword that forces a cache reload instead of a lookup.
pub const RELOAD_KEYWORD: &str = "reload";

/// The platform accepts at most this many autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 25;

/// Ephemeral notice for keywords absent from the list.
pub const NOT_FOUND_NOTICE: &str = "Could not find information";

/// Ephemeral acknowledgment after a forced reload.
pub const RELOADED_NOTICE: &str = "My redirect list reloaded";

/// Resolves redirect keywords into reply actions.
///
/// The resolver owns the cache lifecycle: a lookup loads the list when the
/// cache is empty, and the reserved [`RELOAD_KEYWORD`] refetches it
/// unconditionally. Autocomplete failures are suppressed and reported
/// through the [`ErrorReporter`] port; lookup failures propagate so the
/// interaction layer can surface them.
#[derive(Clone)]
pub struct RedirectResolver<S, E>
where
    S: RedirectSource,
    E: ErrorReporter,
{
    cache: RedirectCache<S>,
    links: LinkBuilder,
    reporter: Arc<E>,
}

impl<S, E> RedirectResolver<S, E>
where
    S: RedirectSource,
    E: ErrorReporter,
{
    /// Creates a resolver.
    #[must_use]
    pub const fn new(cache: RedirectCache<S>, links: LinkBuilder, reporter: Arc<E>) -> Self {
        Self {
            cache,
            links,
            reporter,
        }
    }

    /// Resolves a keyword into the reply action for the invoking user.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Source`] when the redirect list cannot be
    /// loaded. A keyword absent from the list is not an error; it yields
    /// the not-found ephemeral notice.
    pub async fn resolve(&self, key: &str) -> Result<ReplyAction, ResolveError> {
        if key == RELOAD_KEYWORD {
            self.cache.load(true).await.map_err(source_error)?;
            info!("redirect list reloaded on demand");
            return Ok(ReplyAction::ephemeral(RELOADED_NOTICE));
        }

        self.cache.load(false).await.map_err(source_error)?;
        let Some(entry) = self.cache.find(key).map_err(source_error)? else {
            return Ok(ReplyAction::ephemeral(NOT_FOUND_NOTICE));
        };

        if entry.requires_form() {
            let fields = entry.form_fields();
            return Ok(ReplyAction::Form(FormRequest::new(entry.redirect, fields)));
        }

        let url = self.links.create_link(&entry.redirect);
        Ok(ReplyAction::Link(LinkReply::new(
            entry.name,
            entry.description,
            url,
        )))
    }

    /// Returns autocomplete suggestions for a partial keyword.
    ///
    /// An empty partial yields no suggestions without touching the cache.
    /// Matching is a case-insensitive substring test against the entry key
    /// and display label; deprecated entries are excluded and the result
    /// is capped at [`MAX_SUGGESTIONS`]. Failures never propagate to the
    /// platform: they are reported once with the interaction context and
    /// an empty list is returned.
    pub async fn autocomplete(&self, partial: &str, context: &InteractionContext) -> Vec<Choice> {
        if partial.is_empty() {
            return Vec::new();
        }

        match self.suggestions(partial).await {
            Ok(choices) => choices,
            Err(error) => {
                warn!(%error, partial, "autocomplete failed, returning no suggestions");
                self.reporter.report(&error, context).await;
                Vec::new()
            }
        }
    }

    /// Completes a parameterised redirect from submitted form fields.
    ///
    /// The entry was looked up when the form was shown, but the cache may
    /// have been replaced since; an absent key is answered with a typed
    /// error rather than trusted blindly. Required-field presence is
    /// enforced even though the platform validates forms itself.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownRedirect`] when the key is no longer
    /// in the cache and [`ResolveError::MissingField`] when a required
    /// field was not submitted.
    pub fn complete_form(
        &self,
        key: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<ReplyAction, ResolveError> {
        let entry = self
            .cache
            .find(key)
            .map_err(source_error)?
            .ok_or_else(|| ResolveError::UnknownRedirect(key.to_owned()))?;

        for field in entry.form_fields() {
            if field.required && !fields.contains_key(&field.name) {
                return Err(ResolveError::MissingField {
                    redirect: entry.redirect.clone(),
                    field: field.name,
                });
            }
        }

        let url = self.links.parameterized(&entry.redirect, fields);
        Ok(ReplyAction::Link(LinkReply::new(
            entry.name,
            entry.description,
            url,
        )))
    }

    async fn suggestions(&self, partial: &str) -> Result<Vec<Choice>, ResolveError> {
        self.cache.load(false).await.map_err(source_error)?;
        let needle = partial.to_lowercase();
        Ok(self
            .cache
            .snapshot()
            .map_err(source_error)?
            .into_iter()
            .filter(|entry| !entry.deprecated)
            .map(|entry| Choice::new(entry.name, entry.redirect))
            .filter(|choice| {
                choice.value.to_lowercase().contains(&needle)
                    || choice.label.to_lowercase().contains(&needle)
            })
            .take(MAX_SUGGESTIONS)
            .collect())
    }
}

fn source_error(error: SourceError) -> ResolveError {
    ResolveError::Source(error.to_string())
}
