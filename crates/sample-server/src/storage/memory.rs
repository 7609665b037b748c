//! In-memory item store guarded by a tokio RwLock

use sample_types::{Item, ItemError, ItemFields, Result};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Default page size for [`ItemStore::list`]
pub const DEFAULT_LIMIT: usize = 10;

/// Insertion-ordered item collection plus the id counter
pub struct ItemStore {
    inner: RwLock<Inventory>,
}

struct Inventory {
    items: Vec<Item>,
    next_id: u64,
}

impl Inventory {
    /// Linear scan for the position of `id`
    fn position(&self, id: u64) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inventory {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Items in insertion order, starting at `skip`, at most `limit` of them
    pub async fn list(&self, skip: usize, limit: usize) -> Vec<Item> {
        let inventory = self.inner.read().await;
        inventory
            .items
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Result<Item> {
        debug!("Looking up item {}", id);
        let inventory = self.inner.read().await;
        let idx = inventory.position(id)?;
        Ok(inventory.items[idx].clone())
    }

    pub async fn create(&self, fields: ItemFields) -> Item {
        let mut inventory = self.inner.write().await;

        let item = Item::new(inventory.next_id, fields);
        inventory.items.push(item.clone());
        inventory.next_id += 1;

        info!("Created item: id={}, name={}", item.id, item.name);
        item
    }

    /// Overwrite name, description and price of an existing item
    pub async fn update(&self, id: u64, fields: ItemFields) -> Result<Item> {
        let mut inventory = self.inner.write().await;
        let idx = inventory.position(id)?;

        let item = &mut inventory.items[idx];
        item.apply(fields);

        info!("Updated item: id={}, name={}", item.id, item.name);
        Ok(item.clone())
    }

    /// Remove an item. Its id is never handed out again.
    pub async fn delete(&self, id: u64) -> Result<Item> {
        let mut inventory = self.inner.write().await;
        let idx = inventory.position(id)?;

        let item = inventory.items.remove(idx);
        info!("Deleted item: id={}", item.id);
        Ok(item)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
