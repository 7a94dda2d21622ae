use std::fmt;

use dioxus::prelude::*;
use serde::Serialize;

use crate::Error;

/// Query string of the goodbye page, `?name=<url-encoded string>`.
///
/// The router percent-decodes the whole query once before handing it to
/// [`FromQuery`], so parsing reads the value after `name=` verbatim and
/// encoding writes spaces as `%20` rather than `+`.
///
/// An empty `name` is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoodbyeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GoodbyeParams {
    const NAME_KEY: &'static str = "name=";
    const NAME_PAIR: &'static str = "&name=";

    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: Some(name.into()) }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn to_query(&self) -> Result<String, Error> {
        // Form encoding escapes a literal `+` as `%2B`, so every `+` left is a space.
        Ok(serde_html_form::to_string(self)?.replace('+', "%20"))
    }

    /// Reads an already decoded query. Everything after the first `name=` key
    /// belongs to the name, including any `&` or `=` it contains.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let name = query
            .strip_prefix(Self::NAME_KEY)
            .or_else(|| query.split_once(Self::NAME_PAIR).map(|(_, name)| name));
        Self { name: name.map(str::to_owned) }
    }
}

impl fmt::Display for GoodbyeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query().map_err(|_| fmt::Error)?)
    }
}

impl FromQuery for GoodbyeParams {
    fn from_query(query: &str) -> Self {
        let params = Self::parse(query);
        if params.name.is_none() && !query.is_empty() {
            tracing::debug!(query, "goodbye query without a name");
        }
        params
    }
}
