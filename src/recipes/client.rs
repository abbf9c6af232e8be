//! HTTP client for TheMealDB

use super::provider::{ProviderError, ProviderResult, RecipeProvider};
use super::types::{Category, Recipe};
use super::wire::{MealRecord, MealsResponse};
use crate::config::AppConfig;
use crate::{RecipeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// TheMealDB API client
#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RecipeError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and return its non-empty meal list
    async fn get_meals(&self, endpoint: &str, query: &[(&str, &str)]) -> ProviderResult<Vec<MealRecord>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Request to {} failed: {}", endpoint, e);
                ProviderError::Unreachable(e.to_string())
            })?;

        let body: MealsResponse = response.json().await.map_err(|e| {
            warn!("Undecodable response from {}: {}", endpoint, e);
            ProviderError::Unreachable(e.to_string())
        })?;

        let records = body.into_records();
        if records.is_empty() {
            return Err(ProviderError::NotFound);
        }
        Ok(records)
    }

    /// Take the first record, fetching full details when it is partial
    async fn resolve_first(&self, records: Vec<MealRecord>) -> ProviderResult<Recipe> {
        let first = records.into_iter().next().ok_or(ProviderError::NotFound)?;
        if first.is_complete() {
            Ok(first.into_recipe())
        } else {
            debug!("Resolving partial record {} by id", first.id);
            self.lookup_by_id(&first.id).await
        }
    }
}

#[async_trait]
impl RecipeProvider for MealDbClient {
    async fn search_by_name(&self, query: &str) -> ProviderResult<Recipe> {
        let records = self.get_meals("search.php", &[("s", query)]).await?;
        self.resolve_first(records).await
    }

    async fn random(&self) -> ProviderResult<Recipe> {
        let records = self.get_meals("random.php", &[]).await?;
        self.resolve_first(records).await
    }

    async fn filter_by_category(&self, category: Category) -> ProviderResult<Recipe> {
        let records = self
            .get_meals("filter.php", &[("c", category.as_str())])
            .await?;
        self.resolve_first(records).await
    }

    async fn lookup_by_id(&self, id: &str) -> ProviderResult<Recipe> {
        let records = self.get_meals("lookup.php", &[("i", id)]).await?;
        records
            .into_iter()
            .next()
            .map(MealRecord::into_recipe)
            .ok_or(ProviderError::NotFound)
    }

    async fn thumbnail(&self, url: &str) -> ProviderResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
