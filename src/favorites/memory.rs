use super::{normalize_name, AddOutcome, FavoritesRepository, RemoveOutcome};
use crate::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Favorites kept in a shared in-memory list
#[derive(Debug, Clone)]
pub struct InMemoryFavorites {
    entries: Arc<RwLock<Vec<String>>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seed the store; blank and duplicate names are dropped
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::new();
        for entry in entries {
            let _ = store.add(entry.as_ref());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InMemoryFavorites {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesRepository for InMemoryFavorites {
    fn add(&self, name: &str) -> Result<AddOutcome> {
        let name = normalize_name(name)?;
        let mut entries = self.entries.write();
        if entries.iter().any(|entry| entry == name) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        entries.push(name.to_string());
        Ok(AddOutcome::Added)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().clone())
    }

    fn remove(&self, name: &str) -> Result<RemoveOutcome> {
        let name = normalize_name(name)?;
        let mut entries = self.entries.write();
        match entries.iter().position(|entry| entry == name) {
            Some(index) => {
                entries.remove(index);
                Ok(RemoveOutcome::Removed)
            }
            None => Ok(RemoveOutcome::NotFound),
        }
    }
}
