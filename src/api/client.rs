use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{DetailRecord, ListEntry, parse_catalog, parse_detail};
use super::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Large enough that the whole catalog comes back in one page.
pub const DEFAULT_CATALOG_LIMIT: u32 = 10_000;

/// The two remote calls the application makes.
///
/// Implementations must be shareable across tasks: the coordinator hands an
/// `Arc<dyn PokeApi>` to every background fetch.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetches the full catalog in a single request.
    async fn fetch_catalog(&self) -> Result<Vec<ListEntry>, ApiError>;

    /// Fetches detail for the entry whose locator is `locator`.
    async fn fetch_detail(&self, locator: &str) -> Result<DetailRecord, ApiError>;
}

/// HTTP implementation of [`PokeApi`] against a PokeAPI v2 server.
pub struct PokeApiClient {
    base_url: String,
    catalog_limit: u32,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>, catalog_limit: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            catalog_limit,
            client: reqwest::Client::new(),
        }
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.catalog_limit)
    }

    /// GETs `url` and returns the body, mapping transport and status failures.
    async fn get_body(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("PokeAPI error: {} from {}", status, url);
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn fetch_catalog(&self) -> Result<Vec<ListEntry>, ApiError> {
        let url = self.catalog_url();
        info!("Fetching catalog from {}", url);
        let body = self.get_body(&url).await?;
        let entries = parse_catalog(&body)?;
        info!("Catalog returned {} entries", entries.len());
        Ok(entries)
    }

    async fn fetch_detail(&self, locator: &str) -> Result<DetailRecord, ApiError> {
        let body = self.get_body(locator).await?;
        parse_detail(&body)
    }
}
