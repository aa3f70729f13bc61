//! Application services for the redirect subsystem.
//!
//! Services orchestrate domain operations over the ports, implementing
//! the cache lifecycle, keyword resolution, and the platform-facing
//! interaction flow.

mod cache;
mod interaction;
mod resolver;

pub use cache::RedirectCache;
pub use interaction::InteractionService;
pub use resolver::{
    MAX_SUGGESTIONS, NOT_FOUND_NOTICE, RELOAD_KEYWORD, RELOADED_NOTICE, RedirectResolver,
};
