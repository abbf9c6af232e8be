//! Recipe provider interface

use super::types::{Category, Recipe, RecipeQuery};
use async_trait::async_trait;
use thiserror::Error;

/// Why a provider query produced no recipe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The service answered but nothing matched
    #[error("No recipe matched the query")]
    NotFound,

    /// Transport failure, timeout, error status or undecodable body
    #[error("Recipe service unreachable: {0}")]
    Unreachable(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// A source of recipes.
///
/// Each lookup returns the first matching recipe as a complete record.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn search_by_name(&self, query: &str) -> ProviderResult<Recipe>;

    async fn random(&self) -> ProviderResult<Recipe>;

    /// First recipe of the category, resolved to a full record by id
    async fn filter_by_category(&self, category: Category) -> ProviderResult<Recipe>;

    async fn lookup_by_id(&self, id: &str) -> ProviderResult<Recipe>;

    /// Raw bytes of a thumbnail image
    async fn thumbnail(&self, url: &str) -> ProviderResult<Vec<u8>>;

    async fn fetch(&self, query: &RecipeQuery) -> ProviderResult<Recipe> {
        match query {
            RecipeQuery::ByName(name) => self.search_by_name(name).await,
            RecipeQuery::Random => self.random().await,
            RecipeQuery::ByCategory(category) => self.filter_by_category(*category).await,
        }
    }
}
