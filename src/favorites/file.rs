//! Flat-file favorites store
//!
//! One UTF-8 name per line, newline terminated, no header. Appends go
//! straight to the end of the file; removals rewrite it through a temporary
//! file in the same directory that is renamed over the original. A symlinked
//! path keeps its link and the rewrite replaces the file it points to.

use super::{normalize_name, parse_entries, AddOutcome, FavoritesRepository, RemoveOutcome};
use crate::{RecipeError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Favorites persisted to a plain text file
#[derive(Debug, Clone)]
pub struct FileFavorites {
    path: PathBuf,
}

impl FileFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole file body; a missing file reads as empty
    fn read_contents(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(RecipeError::store(&self.path, e)),
        }
    }

    /// Where a rewrite lands: the symlink target when the path is a link
    fn rewrite_target(&self) -> PathBuf {
        match fs::symlink_metadata(&self.path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
            }
            _ => self.path.clone(),
        }
    }

    fn write_entries(&self, entries: &[&str]) -> Result<()> {
        let target = self.rewrite_target();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut body = String::new();
        for entry in entries {
            body.push_str(entry);
            body.push('\n');
        }

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RecipeError::store(&self.path, e))?;
        tmp.write_all(body.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| RecipeError::store(&self.path, e))?;

        // The temp file is created 0600; the rewrite keeps the store's mode
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| RecipeError::store(&self.path, e))?;
        }

        tmp.persist(&target)
            .map_err(|e| RecipeError::store(&self.path, e.error))?;
        Ok(())
    }
}

impl FavoritesRepository for FileFavorites {
    fn add(&self, name: &str) -> Result<AddOutcome> {
        let name = normalize_name(name)?;
        let contents = self.read_contents()?;

        if parse_entries(&contents).any(|entry| entry == name) {
            debug!("{:?} already in {}", name, self.path.display());
            return Ok(AddOutcome::AlreadyPresent);
        }

        let mut line = String::with_capacity(name.len() + 2);
        if !contents.is_empty() && !contents.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(name);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| RecipeError::store(&self.path, e))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| RecipeError::store(&self.path, e))?;

        info!("Saved favorite {:?}", name);
        Ok(AddOutcome::Added)
    }

    fn list(&self) -> Result<Vec<String>> {
        let contents = self.read_contents()?;
        Ok(parse_entries(&contents).map(str::to_string).collect())
    }

    fn remove(&self, name: &str) -> Result<RemoveOutcome> {
        let name = normalize_name(name)?;
        let contents = self.read_contents()?;
        let mut entries: Vec<&str> = parse_entries(&contents).collect();

        let Some(index) = entries.iter().position(|entry| *entry == name) else {
            debug!("{:?} not in {}", name, self.path.display());
            return Ok(RemoveOutcome::NotFound);
        };

        entries.remove(index);
        self.write_entries(&entries)?;

        info!("Removed favorite {:?}", name);
        Ok(RemoveOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileFavorites {
        FileFavorites::new(dir.path().join("favorites.txt"))
    }

    #[test]
    fn test_missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_creates_file_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.add("Spaghetti Carbonara").unwrap(), AddOutcome::Added);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Spaghetti Carbonara\n");
    }

    #[test]
    fn test_add_does_not_rewrite_existing_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Kedgeree\n\nBurek\n").unwrap();

        store.add("Moussaka").unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Kedgeree\n\nBurek\nMoussaka\n"
        );
    }

    #[test]
    fn test_add_terminates_unterminated_last_line() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Kedgeree").unwrap();

        store.add("Burek").unwrap();
        assert_eq!(store.list().unwrap(), vec!["Kedgeree", "Burek"]);
    }

    #[test]
    fn test_add_matches_whole_lines_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("Chicken Curry Pie").unwrap();

        // A substring of an existing entry is a different recipe
        assert_eq!(store.add("Chicken Curry").unwrap(), AddOutcome::Added);
        assert_eq!(store.list().unwrap(), vec!["Chicken Curry Pie", "Chicken Curry"]);
    }

    #[test]
    fn test_remove_rewrites_without_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A\n\nB\n  C  \n").unwrap();

        assert_eq!(store.remove("B").unwrap(), RemoveOutcome::Removed);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "A\nC\n");
    }

    #[test]
    fn test_remove_absent_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A\n\nB\n").unwrap();

        assert_eq!(store.remove("Z").unwrap(), RemoveOutcome::NotFound);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "A\n\nB\n");
    }

    #[test]
    fn test_remove_on_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.remove("A").unwrap(), RemoveOutcome::NotFound);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_removing_last_entry_leaves_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("Spaghetti Carbonara").unwrap();

        assert_eq!(store.remove("Spaghetti Carbonara").unwrap(), RemoveOutcome::Removed);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert!(store.list().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A\nB\n").unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        store.remove("A").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_through_symlink_keeps_link() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("favorites.txt");
        fs::write(&real, "A\nB\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store = FileFavorites::new(&link);
        assert_eq!(store.remove("A").unwrap(), RemoveOutcome::Removed);

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "B\n");
        assert_eq!(store.list().unwrap(), vec!["B"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rewrite_is_store_unavailable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A\nB\n").unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users can still write into a read-only directory
        if NamedTempFile::new_in(dir.path()).is_ok() {
            fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = store.remove("A");
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(RecipeError::StoreUnavailable(_))));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "A\nB\n");
    }

    #[test]
    fn test_unreadable_path_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as the favorites file
        let store = FileFavorites::new(dir.path());
        assert!(matches!(store.list(), Err(RecipeError::StoreUnavailable(_))));
        assert!(matches!(store.add("A"), Err(RecipeError::StoreUnavailable(_))));
    }
}
