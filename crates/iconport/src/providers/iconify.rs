//! Iconify API provider
//!
//! Implementation of `IconProvider` for the public Iconify directory
//! (<https://iconify.design/>). Search results are cached in memory for
//! a few minutes; the API itself serves long-lived responses.

use crate::config::api::{
    ICONIFY_DEFAULT_SERVER, SEARCH_CACHE_MAX_ENTRIES, SEARCH_CACHE_TTL_SECS,
};
use crate::data::cache::TtlCache;
use crate::data::types::IconId;
use crate::error::Result;
use crate::network::{HttpClient, RequestGeneration};

use super::traits::IconProvider;
use super::types::{CollectionInfo, SearchOptions, SearchResults};

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    icons: Vec<String>,
    #[serde(default)]
    total: usize,
    #[serde(default)]
    limit: usize,
    #[serde(default)]
    start: usize,
}

#[derive(Debug, Deserialize)]
struct ApiCollection {
    name: String,
    #[serde(default)]
    total: usize,
    #[serde(default)]
    author: Option<String>,
}

impl From<ApiSearchResponse> for SearchResults {
    fn from(api: ApiSearchResponse) -> Self {
        // Entries that don't parse as "prefix:name" are dropped
        let icons: Vec<IconId> = api
            .icons
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        SearchResults {
            icons,
            total: api.total,
            limit: api.limit,
            start: api.start,
        }
    }
}

impl From<ApiCollection> for CollectionInfo {
    fn from(api: ApiCollection) -> Self {
        CollectionInfo {
            name: api.name,
            total: api.total,
            author: api.author,
        }
    }
}

// =============================================================================
// IconifyProvider
// =============================================================================

/// Iconify API provider
pub struct IconifyProvider {
    client: HttpClient,
    base_url: String,
    generation: RequestGeneration,
    cache: Mutex<TtlCache<SearchResults>>,
}

impl IconifyProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Self::with_base_url(ICONIFY_DEFAULT_SERVER)
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            generation: RequestGeneration::new(),
            cache: Mutex::new(TtlCache::new(
                Duration::from_secs(SEARCH_CACHE_TTL_SECS),
                SEARCH_CACHE_MAX_ENTRIES,
            )),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn cache_get(&self, key: &str) -> Option<SearchResults> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
    }

    fn cache_put(&self, key: String, results: SearchResults) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, results);
    }
}

impl IconProvider for IconifyProvider {
    fn name(&self) -> &'static str {
        "Iconify"
    }

    fn id(&self) -> &'static str {
        "iconify"
    }

    /// Search via GET /search?query&limit&start[&prefix]
    ///
    /// Last request wins: a search superseded by a newer one (or by
    /// `cancel_pending`) silently yields the empty result set instead of
    /// delivering a stale page.
    fn search(&self, options: &SearchOptions) -> Result<SearchResults> {
        let key = options.cache_key();
        if let Some(hit) = self.cache_get(&key) {
            log::debug!("search cache hit for '{}'", options.query);
            return Ok(hit);
        }

        let ticket = self.generation.begin();

        let limit = options.limit.to_string();
        let start = options.start.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("query", options.query.as_str()),
            ("limit", &limit),
            ("start", &start),
        ];
        if let Some(ref prefix) = options.prefix {
            params.push(("prefix", prefix));
        }

        let response =
            self.client.get_json_query::<ApiSearchResponse>(&self.url("/search"), &params);

        // Staleness is checked before the response (or its error) is
        // looked at: a superseded request must not surface anything.
        if ticket.is_stale() {
            log::debug!("search for '{}' superseded, dropping result", options.query);
            return Ok(SearchResults::empty());
        }

        let results = SearchResults::from(response?);
        self.cache_put(key, results.clone());
        Ok(results)
    }

    /// Download raw SVG via GET /{prefix}/{name}.svg
    fn fetch_svg(&self, icon: &IconId) -> Result<String> {
        let url = self.url(&format!("/{}/{}.svg", icon.prefix(), icon.name()));
        self.client.get_text(&url)
    }

    /// List collections via GET /collections
    fn collections(&self) -> Result<HashMap<String, CollectionInfo>> {
        let api: HashMap<String, ApiCollection> =
            self.client.get_json(&self.url("/collections"))?;
        Ok(api
            .into_iter()
            .map(|(prefix, info)| (prefix, info.into()))
            .collect())
    }

    fn cancel_pending(&self) {
        self.generation.cancel_all();
    }
}

// =============================================================================
// Tests
// =============================================================================
