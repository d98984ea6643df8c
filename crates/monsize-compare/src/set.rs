//! Bounded, ordered set of items being compared.

use monsize_calc::MonitorConfiguration;

/// Maximum monitors in a catalog comparison.
pub const CATALOG_CAPACITY: usize = 4;

/// Maximum monitors in the size comparison tool.
pub const SIZE_TOOL_CAPACITY: usize = 6;

/// Fewest monitors worth showing side by side in a catalog comparison.
pub const MIN_COMPARISON: usize = 2;

/// Anything that can sit in a [`ComparisonSet`]: it needs a stable identity.
pub trait Comparable {
    /// Identifier used for membership checks.
    fn comparison_id(&self) -> &str;
}

impl Comparable for MonitorConfiguration {
    fn comparison_id(&self) -> &str {
        self.id()
    }
}

/// Result of [`ComparisonSet::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended.
    Added,
    /// An item with the same id is already present; nothing changed.
    AlreadyPresent,
    /// The set is at capacity; nothing changed.
    Full,
}

/// Ordered set with a fixed capacity and id-based membership.
///
/// Adding an item twice or removing a missing one is a no-op, so callers can
/// replay operations without checking membership first.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSet<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Comparable> ComparisonSet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a set from existing items, e.g. restored from storage.
    ///
    /// Items with an id already seen are dropped and anything beyond
    /// `capacity` is discarded, so the result always satisfies the set's
    /// invariants.
    #[must_use]
    pub fn from_items(capacity: usize, items: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self::new(capacity);
        for item in items {
            match set.add(item) {
                AddOutcome::Added => {}
                AddOutcome::AlreadyPresent => tracing::debug!("dropping duplicate comparison item"),
                AddOutcome::Full => {
                    tracing::debug!(capacity, "dropping comparison items beyond capacity");
                    break;
                }
            }
        }
        set
    }

    /// Append an item unless it is already present or the set is full.
    pub fn add(&mut self, item: T) -> AddOutcome {
        if self.contains(item.comparison_id()) {
            return AddOutcome::AlreadyPresent;
        }
        if self.is_full() {
            return AddOutcome::Full;
        }
        self.items.push(item);
        AddOutcome::Added
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.comparison_id() != id);
        self.items.len() != before
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether an item with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.comparison_id() == id)
    }

    /// Item with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.comparison_id() == id)
    }
}

impl<T> ComparisonSet<T> {
    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a ComparisonSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
