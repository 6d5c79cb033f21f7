use std::fmt;

use crate::{ContractError, Entity, ListField};

/// Order-preserving list restricted to one entity type, carrying the factory used to
/// build new items during inflate.
pub struct TypedList<T> {
    factory: fn() -> T,
    items: Vec<T>,
}

impl<T> TypedList<T> {
    pub fn new(factory: fn() -> T) -> Self {
        Self {
            factory,
            items: Vec::new(),
        }
    }

    /// Build a new, unattached item of the declared type.
    pub fn new_instance(&self) -> T {
        (self.factory)()
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Default> Default for TypedList<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: Clone> Clone for TypedList<T> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory,
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

// The factory is fixed by the item type, so only contents take part in equality.
impl<T: PartialEq> PartialEq for TypedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a TypedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for TypedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Entity> ListField for TypedList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &dyn Entity> + '_> {
        Box::new(self.items.iter().map(|item| item as &dyn Entity))
    }

    fn append_with(
        &mut self,
        populate: &mut dyn FnMut(&mut dyn Entity) -> Result<(), ContractError>,
    ) -> Result<(), ContractError> {
        let mut item = self.new_instance();
        populate(&mut item)?;
        self.append(item);
        Ok(())
    }
}
