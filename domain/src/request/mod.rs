//! Request context
//!
//! The signal sources resolvers read from: the request path and its query
//! arguments. Building one does not touch the network; the URI is only
//! parsed.

use std::collections::BTreeMap;
use url::Url;

/// Base used to resolve relative request URIs
const BASE_URL: &str = "http://localhost";

/// Parsed view of the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    query: BTreeMap<String, String>,
}

impl RequestContext {
    /// Parse a request URI such as `/node/5?og-type=node&og-id=5`.
    ///
    /// Relative URIs are resolved against `http://localhost`. When a query
    /// argument repeats, the last value wins.
    pub fn parse(uri: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(BASE_URL)?;
        let url = base.join(uri)?;

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            path: url.path().to_string(),
            query,
        })
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Non-empty path segments
    pub fn path_segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn has_query(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }
}
