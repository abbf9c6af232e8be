//! Favorite recipe names
//!
//! A deduplicated, insertion-ordered list of recipe names. The file-backed
//! store keeps one name per line; the in-memory store backs unit tests.

pub mod file;
pub mod memory;

pub use file::FileFavorites;
pub use memory::InMemoryFavorites;

use crate::{RecipeError, Result};

/// Result of [`FavoritesRepository::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of [`FavoritesRepository::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Storage for favorite recipe names.
///
/// Names are compared by exact, case-sensitive equality after trimming.
/// Implementations never hold duplicates or blank entries.
pub trait FavoritesRepository: Send + Sync {
    /// Append `name` unless it is already present
    fn add(&self, name: &str) -> Result<AddOutcome>;

    /// All entries in insertion order; empty when nothing was saved yet
    fn list(&self) -> Result<Vec<String>>;

    /// Remove the entry equal to `name`, keeping the order of the rest
    fn remove(&self, name: &str) -> Result<RemoveOutcome>;

    fn contains(&self, name: &str) -> Result<bool> {
        let name = name.trim();
        Ok(self.list()?.iter().any(|entry| entry == name))
    }
}

/// Trim a name and reject anything that cannot be stored as a single line
pub(crate) fn normalize_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['\n', '\r']) {
        return Err(RecipeError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

/// Non-blank, trimmed entries of a favorites file body
pub(crate) fn parse_entries(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().map(str::trim).filter(|line| !line.is_empty())
}
