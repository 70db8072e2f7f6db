use std::sync::Arc;

use itemservice_core::{DomainResult, ItemId};
use itemservice_items::{Item, ItemRepository, NewItem};

/// Repository access shared by all handlers.
pub struct AppServices {
    items: Arc<dyn ItemRepository>,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub fn items_list(&self) -> Vec<Item> {
        self.items.find_all()
    }

    pub fn items_get(&self, id: ItemId) -> DomainResult<Item> {
        self.items.find_by_id(id)
    }

    pub fn items_create(&self, fields: NewItem) -> Item {
        let item = self.items.save(fields);
        tracing::info!(item_id = %item.id(), "item created");
        item
    }

    pub fn items_update(&self, id: ItemId, fields: NewItem) -> DomainResult<()> {
        self.items.update(id, fields)?;
        tracing::info!(item_id = %id, "item updated");
        Ok(())
    }
}

/// Demo catalogue loaded at startup.
pub fn seed_items<R>(repository: &R) -> Vec<Item>
where
    R: ItemRepository + ?Sized,
{
    [
        NewItem::new("ItemA", 10000, 10),
        NewItem::new("ItemB", 20000, 20),
        NewItem::new("ItemC", 30000, 30),
    ]
    .into_iter()
    .map(|item| repository.save(item))
    .collect()
}
