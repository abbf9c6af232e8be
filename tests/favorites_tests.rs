//! Behavior shared by every favorites store
//!
//! Each scenario runs against the file store and the in-memory store.

use recipe_workspace::favorites::{
    AddOutcome, FavoritesRepository, FileFavorites, InMemoryFavorites, RemoveOutcome,
};
use recipe_workspace::RecipeError;
use std::fs;
use tempfile::TempDir;

fn for_each_store(scenario: impl Fn(&dyn FavoritesRepository)) {
    let dir = TempDir::new().unwrap();
    scenario(&FileFavorites::new(dir.path().join("favorites.txt")));
    scenario(&InMemoryFavorites::new());
}

#[test]
fn test_add_is_idempotent() {
    for_each_store(|store| {
        assert_eq!(store.add("Pad Thai").unwrap(), AddOutcome::Added);
        assert_eq!(store.add("Pad Thai").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(store.add("  Pad Thai  ").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(store.list().unwrap(), vec!["Pad Thai".to_string()]);
    });
}

#[test]
fn test_list_keeps_insertion_order() {
    for_each_store(|store| {
        for name in ["Kumpir", "Beef Wellington", "Apam balik"] {
            store.add(name).unwrap();
        }
        assert_eq!(
            store.list().unwrap(),
            vec!["Kumpir", "Beef Wellington", "Apam balik"]
        );
    });
}

#[test]
fn test_remove_keeps_order_of_the_rest() {
    for_each_store(|store| {
        for name in ["A", "B", "C"] {
            store.add(name).unwrap();
        }
        assert_eq!(store.remove("B").unwrap(), RemoveOutcome::Removed);
        assert_eq!(store.list().unwrap(), vec!["A", "C"]);
        assert!(!store.contains("B").unwrap());
    });
}

#[test]
fn test_round_trip_to_empty() {
    for_each_store(|store| {
        assert_eq!(store.add("Spaghetti Carbonara").unwrap(), AddOutcome::Added);
        assert_eq!(store.list().unwrap(), vec!["Spaghetti Carbonara"]);

        assert_eq!(store.remove("Spaghetti Carbonara").unwrap(), RemoveOutcome::Removed);
        assert!(store.list().unwrap().is_empty());
        assert!(!store.contains("Spaghetti Carbonara").unwrap());
    });
}

#[test]
fn test_remove_absent_is_a_no_op() {
    for_each_store(|store| {
        store.add("Kumpir").unwrap();
        assert_eq!(store.remove("Burek").unwrap(), RemoveOutcome::NotFound);
        assert_eq!(store.list().unwrap(), vec!["Kumpir"]);
    });
}

#[test]
fn test_names_are_case_sensitive() {
    for_each_store(|store| {
        store.add("Sushi").unwrap();
        assert_eq!(store.add("sushi").unwrap(), AddOutcome::Added);
        assert_eq!(store.remove("SUSHI").unwrap(), RemoveOutcome::NotFound);
        assert_eq!(store.list().unwrap(), vec!["Sushi", "sushi"]);
    });
}

#[test]
fn test_blank_names_are_rejected() {
    for_each_store(|store| {
        assert!(matches!(store.add("   "), Err(RecipeError::InvalidName(_))));
        assert!(store.list().unwrap().is_empty());
    });
}

#[test]
fn test_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.txt");

    FileFavorites::new(&path).add("Spaghetti Carbonara").unwrap();
    FileFavorites::new(&path).add("Pad Thai").unwrap();

    let reopened = FileFavorites::new(&path);
    assert_eq!(reopened.list().unwrap(), vec!["Spaghetti Carbonara", "Pad Thai"]);
    assert!(reopened.contains("Spaghetti Carbonara").unwrap());
}

#[test]
fn test_file_store_reads_hand_edited_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.txt");
    fs::write(&path, "A\n\n  B  \n\n").unwrap();

    let store = FileFavorites::new(&path);
    assert_eq!(store.list().unwrap(), vec!["A", "B"]);

    store.remove("A").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "B\n");
}
