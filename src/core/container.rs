use crate::domain::ports::Container;
use crate::utils::error::{CatalogError, Operation, Result};

/// `Vec`-backed [`Container`].
///
/// Never reorders or deduplicates; sorting is left to callers via
/// [`sort_natural`](crate::domain::model::sort_natural) on a snapshot.
///
/// Not synchronized. Callers sharing one across threads must wrap it
/// (e.g. in a `Mutex`) themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityContainer<T> {
    entities: Vec<T>,
}

impl<T> EntityContainer<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    fn check_index(&self, operation: Operation, index: usize) -> Result<()> {
        if index < self.entities.len() {
            Ok(())
        } else {
            Err(self.out_of_range(operation, index))
        }
    }

    fn out_of_range(&self, operation: Operation, index: usize) -> CatalogError {
        CatalogError::OutOfRange {
            operation,
            index,
            len: self.entities.len(),
        }
    }
}

impl<T> Default for EntityContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Container<T> for EntityContainer<T> {
    fn add(&mut self, index: usize, element: T) -> Result<()> {
        // 允許 index == len，等同於附加到尾端
        if index > self.entities.len() {
            return Err(self.out_of_range(Operation::Add, index));
        }
        self.entities.insert(index, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(Operation::Remove, index)?;
        Ok(self.entities.remove(index))
    }

    fn update(&mut self, index: usize, element: T) -> Result<()> {
        self.check_index(Operation::Update, index)?;
        self.entities[index] = element;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.entities
            .get(index)
            .ok_or_else(|| self.out_of_range(Operation::Get, index))
    }

    fn get_all(&self) -> Vec<T> {
        self.entities.clone()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}

impl<T> From<Vec<T>> for EntityContainer<T> {
    fn from(entities: Vec<T>) -> Self {
        Self { entities }
    }
}

impl<T> FromIterator<T> for EntityContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EntityContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
