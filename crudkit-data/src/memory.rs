use std::sync::Arc;

use tokio::sync::RwLock;

use crate::entity::Entity;
use crate::error::DataError;
use crate::repository::Repository;
use crate::sort::{Direction, Sort};

/// A `Repository` backed by a vector in process memory.
///
/// New ids are the id of the last stored record plus one, so ids freed by a
/// delete at the tail are handed out again. Unique columns are checked on
/// every write.
///
/// ```ignore
/// let products = MemoryRepository::seeded(vec![
///     Product::new("Laptop", 1200.0),
///     Product::new("Mouse", 25.0),
/// ]);
/// ```
pub struct MemoryRepository<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity + Clone> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository holding `items`, numbered from 1 in order.
    pub fn seeded(items: Vec<T>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(i, mut item)| {
                item.set_id(i as i64 + 1);
                item
            })
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl<T: Entity + Clone> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

fn check_unique<T: Entity>(items: &[T], candidate: &T) -> Result<(), DataError> {
    for column in T::unique_columns() {
        let value = candidate.value_of(column);
        let taken = items
            .iter()
            .filter(|item| item.id() != candidate.id())
            .any(|item| item.value_of(column) == value);
        if taken {
            return Err(DataError::duplicate(column));
        }
    }
    Ok(())
}

impl<T: Entity + Clone> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self, sort: &Sort) -> Result<Vec<T>, DataError> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| {
            let (a, b) = (a.value_of(&sort.column), b.value_of(&sort.column));
            let ord = match (a, b) {
                (Some(a), Some(b)) => a.sort_cmp(&b),
                _ => std::cmp::Ordering::Equal,
            };
            match sort.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DataError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn insert(&self, mut entity: T) -> Result<T, DataError> {
        let mut items = self.items.write().await;
        let next_id = items.last().map_or(1, |last| last.id() + 1);
        entity.set_id(next_id);
        check_unique(&items, &entity)?;
        items.push(entity.clone());
        tracing::debug!(table = T::table_name(), id = next_id, "inserted");
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> Result<bool, DataError> {
        let mut items = self.items.write().await;
        check_unique(&items, entity)?;
        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<T>, DataError> {
        let mut items = self.items.write().await;
        Ok(items
            .iter()
            .position(|item| item.id() == id)
            .map(|idx| items.remove(idx)))
    }

    async fn count(&self) -> Result<u64, DataError> {
        Ok(self.items.read().await.len() as u64)
    }
}
