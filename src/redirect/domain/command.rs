//! Slash-command surface definition for platform registration.

use serde::{Deserialize, Serialize};

/// Slash-command definition handed to the chat platform at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name without the leading slash.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Command options in declaration order.
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl CommandDefinition {
    /// Creates a command definition without options.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option.
    #[must_use]
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// One string option on a slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the platform requires a value before submission.
    pub required: bool,
    /// Whether the platform should stream autocomplete events while the
    /// user types.
    pub autocomplete: bool,
}

impl CommandOption {
    /// Creates an option.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            description: description.into(),
            required: false,
            autocomplete: false,
        }
    }

    /// Marks the option as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enables autocomplete events for the option.
    #[must_use]
    pub const fn autocompleted(mut self) -> Self {
        self.autocomplete = true;
        self
    }
}

/// Returns the `/my` command surface: one required, autocompleted string
/// option carrying the redirect keyword.
#[must_use]
pub fn my_command() -> CommandDefinition {
    CommandDefinition::new("my", "Returns a my link").with_option(
        CommandOption::new("redirect", "What is the name of the redirect?")
            .required()
            .autocompleted(),
    )
}
