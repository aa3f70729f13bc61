//! Deep-link construction for resolved redirects.

use std::collections::BTreeMap;

use url::Url;

use super::error::LinkError;

/// Builds outbound deep links on the companion web service.
///
/// Two link shapes exist: `<base>/create-link/?redirect=<key>` for simple
/// redirects, and `<base>/redirect/<key>/?<param>=<value>&…` for redirects
/// that collected extra parameters through a form. Query values are
/// percent-encoded; parameter order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    /// Creates a builder from a base URL such as `https://my.example.io`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError`] when the base does not parse as an absolute
    /// URL or cannot carry a path.
    pub fn from_base(base: &str) -> Result<Self, LinkError> {
        let parsed = Url::parse(base).map_err(|error| LinkError::InvalidBase {
            base: base.to_owned(),
            reason: error.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(LinkError::CannotBeABase(base.to_owned()));
        }
        Ok(Self { base: parsed })
    }

    /// Builds the link-creation URL for a simple redirect.
    #[must_use]
    pub fn create_link(&self, key: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path("/create-link/");
        url.query_pairs_mut().append_pair("redirect", key);
        url
    }

    /// Builds the parameterised redirect URL from submitted form fields.
    #[must_use]
    pub fn parameterized(&self, key: &str, fields: &BTreeMap<String, String>) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("/redirect/{key}/"));
        if !fields.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in fields {
                pairs.append_pair(name, value);
            }
        }
        url
    }
}
