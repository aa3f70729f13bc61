//! Port trait definitions for the redirect subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect the domain
//! to the remote redirect list, the chat platform, and error tracking.

pub mod reporting;
pub mod responder;
pub mod source;

pub use reporting::{ErrorReporter, InteractionContext};
pub use responder::{Responder, RespondResult};
pub use source::{RedirectSource, SourceResult};
