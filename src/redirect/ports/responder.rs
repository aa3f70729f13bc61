//! Port for delivering replies through the chat platform.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::redirect::domain::{Choice, FormRequest, LinkReply};

/// Result type for responder operations.
pub type RespondResult<T> = Result<T, RespondError>;

/// Narrow capability surface over the chat platform's interaction APIs.
///
/// Services depend only on this trait, never on a concrete platform SDK.
/// Each method corresponds to one terminal interaction outcome; the
/// platform invokes handlers for a given interaction sequentially, so
/// implementations need no internal ordering guarantees.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends a notice visible only to the invoking user.
    ///
    /// # Errors
    ///
    /// Returns [`RespondError`] when platform delivery fails.
    async fn reply_ephemeral(&self, content: &str) -> RespondResult<()>;

    /// Sends a link embed reply.
    ///
    /// # Errors
    ///
    /// Returns [`RespondError`] when platform delivery fails.
    async fn reply_with_link(&self, reply: &LinkReply) -> RespondResult<()>;

    /// Opens a modal form instead of replying.
    ///
    /// # Errors
    ///
    /// Returns [`RespondError`] when platform delivery fails.
    async fn show_form(&self, form: &FormRequest) -> RespondResult<()>;

    /// Answers an autocomplete event with suggestion choices.
    ///
    /// # Errors
    ///
    /// Returns [`RespondError`] when platform delivery fails.
    async fn respond_choices(&self, choices: &[Choice]) -> RespondResult<()>;
}

/// Errors that can occur while delivering a reply.
#[derive(Debug, Clone, Error)]
pub enum RespondError {
    /// The platform rejected or failed the delivery.
    #[error("platform delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl RespondError {
    /// Creates a delivery error from any error type.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
