//! Recipe lookups against TheMealDB
//!
//! [`RecipeProvider`] is the query interface, [`MealDbClient`] its HTTP
//! implementation, and [`ProviderPipeline`] runs queries off the UI thread.

pub mod client;
pub mod pipeline;
pub mod provider;
pub mod thumbnail;
pub mod types;
pub mod wire;

pub use client::MealDbClient;
pub use pipeline::{ProviderCommand, ProviderEvent, ProviderPipeline};
pub use provider::{ProviderError, ProviderResult, RecipeProvider};
pub use thumbnail::decode_thumbnail;
pub use types::{Category, Recipe, RecipeQuery};
