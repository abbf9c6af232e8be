pub mod config;
pub mod favorites;
pub mod recipes;
pub mod ui;

use recipes::ProviderError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("No recipe matched the query")]
    NotFound,

    #[error("Recipe service unreachable: {0}")]
    Unreachable(String),

    #[error("Favorites store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid recipe name: {0:?}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),
}

impl From<ProviderError> for RecipeError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::NotFound => RecipeError::NotFound,
            ProviderError::Unreachable(reason) => RecipeError::Unreachable(reason),
        }
    }
}

impl RecipeError {
    /// Wrap an I/O failure on the favorites file
    pub fn store(path: &Path, e: std::io::Error) -> Self {
        RecipeError::StoreUnavailable(format!("{}: {}", path.display(), e))
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The user can simply try another query
            RecipeError::NotFound => true,
            RecipeError::Unreachable(_) => true,
            RecipeError::InvalidName(_) => true,
            // Needs the user to fix permissions or disk space
            RecipeError::StoreUnavailable(_) => false,
            RecipeError::ConfigError(_) => false,
            RecipeError::ChannelError(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::NotFound => "No results found.".to_string(),
            RecipeError::Unreachable(_) => "API unreachable.".to_string(),
            RecipeError::StoreUnavailable(_) => {
                "The favorites file could not be read or written.".to_string()
            }
            RecipeError::InvalidName(_) => {
                "A recipe name must be a single non-empty line.".to_string()
            }
            RecipeError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            RecipeError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_map_to_taxonomy() {
        assert_eq!(RecipeError::from(ProviderError::NotFound), RecipeError::NotFound);
        assert_eq!(
            RecipeError::from(ProviderError::Unreachable("timeout".to_string())),
            RecipeError::Unreachable("timeout".to_string())
        );
    }

    #[test]
    fn test_store_error_names_the_file() {
        let err = RecipeError::store(
            Path::new("favorites.txt"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("favorites.txt"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(RecipeError::NotFound.user_message(), "No results found.");
        assert_eq!(
            RecipeError::Unreachable("dns".to_string()).user_message(),
            "API unreachable."
        );
    }
}
