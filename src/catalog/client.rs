//! Catalog client: fetches the paginated listing over HTTP.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use super::page::ListingPage;
use super::registry::CatalogRegistry;
use crate::core::{CatalogConfig, MatchError, Result};

/// Fetches catalog entries from the remote listing endpoint.
///
/// No retries: a failed page fails the whole load.
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    /// Returns `MatchError::Request` if the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, config })
    }

    /// URL of the first listing page.
    pub fn first_page_url(&self) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{}", self.config.resource))
            .map_err(|e| MatchError::Config(format!("bad catalog url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("limit", &self.config.page_size.to_string())
            .append_pair("offset", "0");
        Ok(url)
    }

    /// Fetch a single listing page.
    pub async fn fetch_page(&self, url: &Url) -> Result<ListingPage> {
        debug!(%url, "fetching catalog page");
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MatchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.json::<ListingPage>().await?)
    }

    /// Follow `next` links until the listing ends or `max_entries` is reached.
    pub async fn fetch_all(&self) -> Result<CatalogRegistry> {
        let mut registry = CatalogRegistry::new();
        let mut next = Some(self.first_page_url()?);

        while let Some(url) = next.take() {
            let page = self.fetch_page(&url).await?;
            let page_len = page.results.len();
            registry.extend(page.entries()?);

            if registry.len() >= self.config.max_entries {
                break;
            }
            if page_len == 0 {
                warn!(%url, "catalog page was empty, stopping");
                break;
            }

            next = match page.next {
                Some(raw) => Some(
                    Url::parse(&raw).map_err(|e| MatchError::Parse(format!("bad next link {raw}: {e}")))?,
                ),
                None => None,
            };
        }

        registry.truncate(self.config.max_entries);
        info!(entries = registry.len(), "catalog loaded");
        Ok(registry)
    }
}
