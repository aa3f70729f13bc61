//! Reply actions produced by redirect resolution.

use serde::{Deserialize, Serialize};
use url::Url;

/// Outcome of resolving a redirect keyword.
///
/// Each user interaction ends in exactly one action: an ephemeral notice,
/// a link embed, or a modal form collecting extra parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReplyAction {
    /// Notice visible only to the invoking user.
    Ephemeral {
        /// Message content.
        content: String,
    },
    /// Link embed reply.
    Link(LinkReply),
    /// Modal form request for a parameterised redirect.
    Form(FormRequest),
}

impl ReplyAction {
    /// Creates an ephemeral notice action.
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::Ephemeral {
            content: content.into(),
        }
    }
}

/// Link embed shown to the user once a redirect resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReply {
    /// Embed title, taken from the entry display label.
    pub title: String,
    /// Embed body, taken from the entry description.
    pub description: String,
    /// Fully constructed deep link.
    pub url: Url,
}

impl LinkReply {
    /// Creates a link reply.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: Url) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url,
        }
    }
}

/// Modal form description for a parameterised redirect.
///
/// The form id carries the redirect key so the submission handler can pick
/// up the entry again without extra state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    /// Redirect key, echoed back on submission.
    pub id: String,
    /// Form title shown by the platform.
    pub title: String,
    /// One short text input per redirect parameter.
    pub fields: Vec<FormField>,
}

impl FormRequest {
    /// Creates a form request for the given redirect key.
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            id: id.into(),
            title: "Additional data".to_owned(),
            fields,
        }
    }
}

/// Single labelled text input inside a [`FormRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name, used as both input id and label.
    pub name: String,
    /// Whether the platform should refuse submission without a value.
    pub required: bool,
}

impl FormField {
    /// Creates a form field.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Display label, taken from the entry name.
    pub label: String,
    /// Value submitted when the user picks the suggestion.
    pub value: String,
}

impl Choice {
    /// Creates a suggestion.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
