//! Redirect keyword resolution for the `/my` slash command.
//!
//! The module maintains an in-memory list of redirect definitions fetched
//! from a remote JSON document and answers three kinds of interaction:
//! direct keyword lookups, live autocomplete queries, and modal form
//! submissions for redirects that need extra parameters.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::RedirectEntry`],
//!   [`domain::ReplyAction`], [`domain::LinkBuilder`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::source::RedirectSource`],
//!   [`ports::responder::Responder`], [`ports::reporting::ErrorReporter`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::http::HttpRedirectSource`],
//!   [`adapters::memory::StaticRedirectSource`],
//!   [`adapters::reporting::TracingErrorReporter`])
//! - **Services**: Orchestration over the ports
//!   ([`services::RedirectCache`], [`services::RedirectResolver`],
//!   [`services::InteractionService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use waypost::redirect::adapters::memory::StaticRedirectSource;
//! use waypost::redirect::adapters::reporting::TracingErrorReporter;
//! use waypost::redirect::config::ResolverConfig;
//! use waypost::redirect::domain::{LinkBuilder, RedirectEntry, ReplyAction};
//! use waypost::redirect::services::{RedirectCache, RedirectResolver};
//!
//! # async fn run() {
//! let entry = RedirectEntry::new("config", "Configuration", "Open the configuration panel");
//! let source = Arc::new(StaticRedirectSource::new(vec![entry]));
//! let config = ResolverConfig::default();
//! let links = LinkBuilder::from_base(&config.link_base).expect("valid base URL");
//! let resolver = RedirectResolver::new(
//!     RedirectCache::new(source),
//!     links,
//!     Arc::new(TracingErrorReporter::new()),
//! );
//!
//! let action = resolver.resolve("config").await.expect("source is static");
//! assert!(matches!(action, ReplyAction::Link(_)));
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
