//! Comparison set that survives restarts.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{
    AddOutcome, Comparable, ComparisonSet, ComparisonStore, ComparisonStoreExt, JsonLoad,
    MIN_COMPARISON,
};

/// Store key for the catalog comparison.
pub const COMPARISON_KEY: &str = "compareMonitors";

/// A [`ComparisonSet`] mirrored to a [`ComparisonStore`].
///
/// The set is loaded once on [`open`](Self::open) and written back after
/// every change. Stored data that cannot be decoded is discarded and its key
/// removed, so a corrupt file never blocks the comparison.
pub struct PersistentComparison<T> {
    set: ComparisonSet<T>,
    store: Box<dyn ComparisonStore>,
    key: String,
}

impl<T> PersistentComparison<T>
where
    T: Comparable + Serialize + DeserializeOwned,
{
    /// Load the set stored under `key`, or start empty.
    #[must_use]
    pub fn open(store: Box<dyn ComparisonStore>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let items: Vec<T> = match store.load_json(&key) {
            JsonLoad::Found(items) => items,
            JsonLoad::Missing => Vec::new(),
            JsonLoad::Corrupt => {
                store.remove(&key);
                Vec::new()
            }
        };
        let set = ComparisonSet::from_items(capacity, items);
        tracing::debug!(key, items = set.len(), capacity, "opened comparison");
        Self { set, store, key }
    }

    /// Add an item and persist if it was accepted.
    pub fn add(&mut self, item: T) -> AddOutcome {
        let outcome = self.set.add(item);
        if outcome == AddOutcome::Added {
            self.persist();
        }
        outcome
    }

    /// Remove an item by id and persist if anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.set.remove(id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Remove every item and persist.
    pub fn clear(&mut self) {
        self.set.clear();
        self.persist();
    }

    /// Whether an item with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    /// Whether enough items are present to show a comparison.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.set.len() >= MIN_COMPARISON
    }

    /// The current set.
    #[must_use]
    pub fn set(&self) -> &ComparisonSet<T> {
        &self.set
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.set.items()
    }

    fn persist(&self) {
        self.store.save_json(&self.key, &self.set.items());
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::tests::CATALOG_JSON;
    use crate::{CATALOG_CAPACITY, Catalog, CatalogMonitor, FileStore, NullStore};

    fn open(root: &Path) -> PersistentComparison<CatalogMonitor> {
        PersistentComparison::open(
            Box::new(FileStore::new(root.to_path_buf())),
            COMPARISON_KEY,
            CATALOG_CAPACITY,
        )
    }

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG_JSON).unwrap()
    }

    fn ids(cmp: &PersistentComparison<CatalogMonitor>) -> Vec<&str> {
        cmp.items().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_state_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("state");
        let catalog = catalog();

        let mut cmp = open(&root);
        assert!(cmp.items().is_empty());
        assert_eq!(cmp.add(catalog.get("dell-u2723qe").unwrap().clone()), AddOutcome::Added);
        assert_eq!(cmp.add(catalog.get("lg-27gp850").unwrap().clone()), AddOutcome::Added);
        drop(cmp);

        let reopened = open(&root);
        assert_eq!(ids(&reopened), vec!["mon-1", "mon-3"]);
        assert_eq!(reopened.items()[0], *catalog.get("dell-u2723qe").unwrap());
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("state");
        let catalog = catalog();

        let mut cmp = open(&root);
        for m in catalog.iter() {
            cmp.add(m.clone());
        }
        assert!(cmp.remove("mon-2"));
        assert!(!cmp.remove("mon-2"));
        assert_eq!(ids(&open(&root)), vec!["mon-1", "mon-3"]);

        cmp.clear();
        assert!(open(&root).items().is_empty());
    }

    #[test]
    fn test_corrupt_state_is_discarded() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("state");
        let store = FileStore::new(root.clone());
        store.save(COMPARISON_KEY, b"{not json");

        let cmp = open(&root);
        assert!(cmp.items().is_empty());
        assert!(!root.join(COMPARISON_KEY).exists());
    }

    #[test]
    fn test_oversized_state_is_truncated() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("state");
        let template = catalog().get("dell-u2723qe").unwrap().clone();

        let stored: Vec<CatalogMonitor> = (0..6)
            .map(|i| CatalogMonitor {
                id: format!("id-{i}"),
                ..template.clone()
            })
            .collect();
        FileStore::new(root.clone()).save_json(COMPARISON_KEY, &stored);

        let cmp = open(&root);
        assert_eq!(ids(&cmp), vec!["id-0", "id-1", "id-2", "id-3"]);
        assert!(cmp.set().is_full());
    }

    #[test]
    fn test_ready_with_two_items() {
        let catalog = catalog();
        let mut cmp: PersistentComparison<CatalogMonitor> =
            PersistentComparison::open(Box::new(NullStore), COMPARISON_KEY, CATALOG_CAPACITY);
        assert!(!cmp.is_ready());

        cmp.add(catalog.get("dell-u2723qe").unwrap().clone());
        assert!(!cmp.is_ready());

        cmp.add(catalog.get("lg-27gp850").unwrap().clone());
        assert!(cmp.is_ready());
    }

    #[test]
    fn test_full_set_rejects_without_writing() {
        let catalog = catalog();
        let mut cmp: PersistentComparison<CatalogMonitor> =
            PersistentComparison::open(Box::new(NullStore), COMPARISON_KEY, 1);

        assert_eq!(cmp.add(catalog.get("dell-u2723qe").unwrap().clone()), AddOutcome::Added);
        assert_eq!(cmp.add(catalog.get("dell-u2723qe").unwrap().clone()), AddOutcome::AlreadyPresent);
        assert_eq!(cmp.add(catalog.get("lg-27gp850").unwrap().clone()), AddOutcome::Full);
        assert!(cmp.contains("mon-1"));
        assert!(!cmp.contains("mon-3"));
    }
}
