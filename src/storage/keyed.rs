//! Generic in-memory keyed storage
//!
//! `KeyedStore` keeps items in insertion order and looks them up by id. It is
//! the container behind both an account's transactions and the manager's
//! accounts.

use std::fmt;
use std::slice;

/// An item that carries an identifier
pub trait Identifiable {
    type Id: Copy + PartialEq + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Optional describe capability. Items that can render a description
    /// override this to return themselves.
    fn as_describable(&self) -> Option<&dyn Describable> {
        None
    }
}

/// An item that can render a one-line description of itself
pub trait Describable {
    fn describe(&self) -> String;
}

/// Ordered collection of identifiable items
///
/// Ids are not checked for uniqueness on insertion. Lookups return the first
/// match and removals drop every match.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedStore<T> {
    items: Vec<T>,
}

impl<T> Default for KeyedStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identifiable> KeyedStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove every item with the given id
    ///
    /// Returns true if anything was removed.
    pub fn remove_by_id(&mut self, id: T::Id) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() < initial_len
    }

    /// Get the first item with the given id
    pub fn get_by_id(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Get the first item with the given id, mutably
    pub fn get_by_id_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Check whether any item has the given id
    pub fn contains(&self, id: T::Id) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Iterate over the items in insertion order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Describe every item, substituting a placeholder for items that cannot
    /// describe themselves
    pub fn describe_all(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item.as_describable() {
                Some(describable) => describable.describe(),
                None => format!("Item {} has no description.", item.id()),
            })
            .collect()
    }
}

impl<T: Identifiable> KeyedStore<T>
where
    T::Id: Ord,
{
    /// The largest id currently stored
    pub fn max_id(&self) -> Option<T::Id> {
        self.items.iter().map(Identifiable::id).max()
    }
}

impl<T: Identifiable + Clone> KeyedStore<T> {
    /// Snapshot of all items; mutating it does not affect the store
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<'a, T> IntoIterator for &'a KeyedStore<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Identifiable> FromIterator<T> for KeyedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
