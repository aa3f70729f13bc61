//! Waypost: redirect keyword resolution for chat-bot slash commands.
//!
//! This crate resolves short "redirect" keywords into deep links on a
//! companion web service. It backs a single slash command: the user types a
//! keyword (with live autocomplete), and the bot answers with a link embed,
//! or opens a modal form first when the redirect needs extra parameters.
//!
//! # Architecture
//!
//! Waypost follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and link construction with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the redirect-list source, the
//!   chat platform, and error reporting
//! - **Adapters**: Concrete implementations of ports (HTTP fetch, in-memory
//!   fixtures, `tracing`-backed reporting)
//!
//! # Modules
//!
//! - [`redirect`]: Redirect-list cache, keyword resolution, autocomplete,
//!   and parameter-collection forms

pub mod redirect;
