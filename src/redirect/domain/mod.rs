//! Domain types for the redirect subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod action;
mod command;
mod entry;
mod error;
mod links;

pub use action::{Choice, FormField, FormRequest, LinkReply, ReplyAction};
pub use command::{CommandDefinition, CommandOption, my_command};
pub use entry::RedirectEntry;
pub use error::{LinkError, ResolveError};
pub use links::LinkBuilder;
