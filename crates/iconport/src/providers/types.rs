//! Shared provider types
//!
//! Types used across all icon providers.

use crate::config::api::DEFAULT_SEARCH_LIMIT;
use crate::data::types::IconId;

/// Parameters for an icon search
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query
    pub query: String,
    /// Maximum number of results to return
    pub limit: usize,
    /// Offset into the full result list (for paging)
    pub start: usize,
    /// Restrict results to one collection prefix
    pub prefix: Option<String>,
}

impl SearchOptions {
    /// Create options for a query with default paging
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
            start: 0,
            prefix: None,
        }
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the paging offset
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Restrict to one collection
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Key identifying this exact request for result caching
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.query,
            self.limit,
            self.start,
            self.prefix.as_deref().unwrap_or("")
        )
    }
}

/// Results of an icon search
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Matching icons
    pub icons: Vec<IconId>,
    /// Total number of matches known to the server
    pub total: usize,
    /// Limit the server applied
    pub limit: usize,
    /// Offset of this page
    pub start: usize,
}

impl SearchResults {
    /// Create an empty result set (also used for cancelled searches)
    pub fn empty() -> Self {
        Self {
            icons: Vec::new(),
            total: 0,
            limit: 0,
            start: 0,
        }
    }
}

/// Metadata about one icon collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfo {
    /// Display name (e.g. "Material Design Icons")
    pub name: String,
    /// Number of icons in the collection
    pub total: usize,
    /// Collection author, when the directory reports one
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_defaults() {
        let options = SearchOptions::new("home");
        assert_eq!(options.query, "home");
        assert_eq!(options.limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(options.start, 0);
        assert_eq!(options.prefix, None);
    }

    #[test]
    fn test_search_options_builder() {
        let options = SearchOptions::new("arrow")
            .with_limit(10)
            .with_start(20)
            .with_prefix("mdi");
        assert_eq!(options.limit, 10);
        assert_eq!(options.start, 20);
        assert_eq!(options.prefix.as_deref(), Some("mdi"));
    }

    #[test]
    fn test_cache_key_distinguishes_requests() {
        let a = SearchOptions::new("home");
        let b = SearchOptions::new("home").with_limit(10);
        let c = SearchOptions::new("home").with_prefix("mdi");

        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), c.cache_key());
        assert_eq!(a.cache_key(), SearchOptions::new("home").cache_key());
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::empty();
        assert!(results.icons.is_empty());
        assert_eq!(results.total, 0);
    }
}
