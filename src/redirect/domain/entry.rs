//! Redirect entry definition and form-field derivation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::action::FormField;

/// One row of the remote keyword-to-deep-link mapping.
///
/// Entries are immutable once fetched; the whole list is replaced wholesale
/// on every reload. The `redirect` key is expected to be unique within the
/// list; lookups return the first match in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// Unique lookup key.
    pub redirect: String,
    /// Human-readable display label.
    pub name: String,
    /// Short description shown alongside the link.
    pub description: String,
    /// Deprecated entries are excluded from autocomplete suggestions.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Parameter name to type-hint mapping. Presence signals that the
    /// redirect collects extra parameters through a modal form before the
    /// final URL can be built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
    /// Carried metadata, unused by resolution logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    /// Carried metadata, unused by resolution logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Carried metadata, unused by resolution logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    /// Carried metadata, unused by resolution logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

const fn is_false(value: &bool) -> bool {
    !*value
}

impl RedirectEntry {
    /// Creates an entry without parameters or metadata.
    #[must_use]
    pub fn new(
        redirect: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            redirect: redirect.into(),
            name: name.into(),
            description: description.into(),
            deprecated: false,
            params: None,
            custom: None,
            badge: None,
            introduced: None,
            component: None,
        }
    }

    /// Marks the entry as deprecated.
    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Adds a parameter with its type-hint.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, hint: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), hint.into());
        self
    }

    /// Returns `true` when the redirect collects extra parameters through a
    /// form before the final URL can be built.
    #[must_use]
    pub const fn requires_form(&self) -> bool {
        self.params.is_some()
    }

    /// Derives the form fields for a parameterised redirect.
    ///
    /// A field is optional when its key ends in `?` or its type-hint
    /// contains `?`; the trailing `?` is stripped from the key to form the
    /// field name. Returns an empty vector for entries without parameters.
    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField> {
        self.params.as_ref().map_or_else(Vec::new, |params| {
            params
                .iter()
                .map(|(key, hint)| {
                    let name = key.trim_end_matches('?');
                    let required = !key.ends_with('?') && !hint.contains('?');
                    FormField::new(name, required)
                })
                .collect()
        })
    }
}
