use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::core::metrics;
use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum StoreError {
    #[error("item {0} not found")]
    NotFound(i32),
    #[error("item {0} already exists")]
    Conflict(i32),
}

/// In-memory item collection, kept in insertion order.
///
/// Every operation runs inside a single lock acquisition, so a check and the
/// mutation that depends on it are never interleaved with another request.
/// The `items_stored` gauge is published while the write guard is held.
#[derive(Debug, Default)]
pub(crate) struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seeded() -> Self {
        Self {
            items: RwLock::new(vec![
                Item::new(1, "Laptop", "High-performance laptop", 999.99),
                Item::new(2, "Mouse", "Wireless mouse", 29.99),
                Item::new(3, "Keyboard", "Mechanical keyboard", 79.99),
            ]),
        }
    }

    pub(crate) fn list_all(&self) -> Vec<Item> {
        self.read().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    pub(crate) fn get_by_id(&self, id: i32) -> Result<Item, StoreError> {
        self.read().iter().find(|item| item.id == id).cloned().ok_or(StoreError::NotFound(id))
    }

    pub(crate) fn create(&self, item: Item) -> Result<Item, StoreError> {
        let mut items = self.write();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::Conflict(item.id));
        }

        items.push(item.clone());
        metrics::record_item_count(items.len());
        Ok(item)
    }

    /// Replaces the item stored under `id`. The path id always wins over
    /// whatever id the replacement carries.
    pub(crate) fn update(&self, id: i32, item: Item) -> Result<Item, StoreError> {
        let mut items = self.write();
        let slot =
            items.iter_mut().find(|existing| existing.id == id).ok_or(StoreError::NotFound(id))?;

        *slot = item.with_id(id);
        Ok(slot.clone())
    }

    pub(crate) fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut items = self.write();
        let index =
            items.iter().position(|item| item.id == id).ok_or(StoreError::NotFound(id))?;

        items.remove(index);
        metrics::record_item_count(items.len());
        Ok(())
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}
