//! Item storage abstraction and its in-memory implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use itemservice_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};

/// Owner of all stored items and the source of their identifiers.
///
/// Implementations hand out copies; mutating a returned `Item` never changes
/// what is stored.
pub trait ItemRepository: Send + Sync {
    /// Assign the next id to `item`, store it, and return the stored value.
    fn save(&self, item: NewItem) -> Item;
    fn find_by_id(&self, id: ItemId) -> DomainResult<Item>;
    fn find_all(&self) -> Vec<Item>;
    /// Replace name, price and quantity of the item stored under `id`.
    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<()>;
    /// Drop every stored item (test/reset support). Ids are not reused afterwards.
    fn clear_store(&self);
}

impl<R> ItemRepository for Arc<R>
where
    R: ItemRepository + ?Sized,
{
    fn save(&self, item: NewItem) -> Item {
        (**self).save(item)
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<()> {
        (**self).update(id, fields)
    }

    fn clear_store(&self) {
        (**self).clear_store()
    }
}

#[derive(Debug, Default)]
struct Store {
    sequence: u64,
    items: BTreeMap<ItemId, Item>,
}

/// In-memory item store.
///
/// The id counter and the map sit behind one mutex, so "increment then
/// insert" is a single critical section.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    inner: Mutex<Store>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the store half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn save(&self, item: NewItem) -> Item {
        let mut store = self.lock();
        store.sequence += 1;
        let id = ItemId::new(store.sequence);
        let item = item.into_item(id);
        store.items.insert(id, item.clone());
        tracing::debug!(item_id = %id, name = %item.name, "item saved");
        item
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or(DomainError::item_not_found(id))
    }

    fn find_all(&self) -> Vec<Item> {
        self.lock().items.values().cloned().collect()
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<()> {
        let mut store = self.lock();
        let stored = store
            .items
            .get_mut(&id)
            .ok_or(DomainError::item_not_found(id))?;
        stored.replace_fields(fields);
        tracing::debug!(item_id = %id, "item updated");
        Ok(())
    }

    fn clear_store(&self) {
        let mut store = self.lock();
        let removed = store.items.len();
        store.items.clear();
        tracing::debug!(removed, "item store cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn repo() -> InMemoryItemRepository {
        InMemoryItemRepository::new()
    }

    #[test]
    fn save_assigns_id_and_find_by_id_returns_equal_item() {
        let repo = repo();
        let saved = repo.save(NewItem::new("itemName", 10000, 10));

        let found = repo.find_by_id(saved.id()).unwrap();
        assert_eq!(found, saved);
    }

    #[test]
    fn find_all_returns_every_saved_item() {
        let repo = repo();
        repo.save(NewItem::new("itemName", 10000, 10));
        repo.save(NewItem::new("itemName", 20000, 10));

        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let repo = repo();
        let ids: Vec<u64> = (0..3)
            .map(|i| repo.save(NewItem::new(format!("item{i}"), 100, 1)).id().get())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn returned_items_are_copies() {
        let repo = repo();
        let saved = repo.save(NewItem::new("itemName", 10000, 10));

        let mut found = repo.find_by_id(saved.id()).unwrap();
        found.name = "itemName1".to_string();

        assert_eq!(repo.find_by_id(saved.id()).unwrap().name, "itemName");
    }

    #[test]
    fn item_returned_from_save_is_a_copy() {
        let repo = repo();
        let mut saved = repo.save(NewItem::new("itemName", 10000, 10));

        saved.name = "changed".to_string();
        saved.price = 1;
        saved.quantity = 0;

        let stored = repo.find_by_id(saved.id()).unwrap();
        assert_eq!(stored.to_new_item(), NewItem::new("itemName", 10000, 10));
    }

    #[test]
    fn save_find_update_scenario() {
        let repo = repo();
        let a = repo.save(NewItem::new("ItemA", 10000, 10));
        let b = repo.save(NewItem::new("ItemB", 20000, 20));
        assert_eq!(a.id(), ItemId::new(1));
        assert_eq!(b.id(), ItemId::new(2));

        let found = repo.find_by_id(ItemId::new(1)).unwrap();
        assert_eq!(found.name, "ItemA");
        assert_eq!(found.price, 10000);
        assert_eq!(found.quantity, 10);

        repo.update(ItemId::new(1), NewItem::new("ItemA-X", 15000, 5))
            .unwrap();

        let updated = repo.find_by_id(ItemId::new(1)).unwrap();
        assert_eq!(updated.id(), ItemId::new(1));
        assert_eq!(updated.name, "ItemA-X");
        assert_eq!(updated.price, 15000);
        assert_eq!(updated.quantity, 5);

        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found_for_read_and_update() {
        let repo = repo();
        repo.save(NewItem::new("ItemA", 10000, 10));

        let missing = ItemId::new(99);
        assert_eq!(
            repo.find_by_id(missing),
            Err(DomainError::ItemNotFound(missing))
        );
        assert_eq!(
            repo.update(missing, NewItem::new("ghost", 1, 1)),
            Err(DomainError::ItemNotFound(missing))
        );
        assert_eq!(repo.find_all().len(), 1);
    }

    #[test]
    fn clear_store_empties_but_keeps_counter() {
        let repo = repo();
        repo.save(NewItem::new("ItemA", 10000, 10));
        repo.save(NewItem::new("ItemB", 20000, 20));

        repo.clear_store();
        assert!(repo.find_all().is_empty());

        let next = repo.save(NewItem::new("ItemC", 30000, 30));
        assert_eq!(next.id(), ItemId::new(3));
    }

    #[test]
    fn concurrent_saves_get_unique_ids() {
        let repo = Arc::new(repo());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| repo.save(NewItem::new(format!("t{t}-{i}"), i, i)).id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<ItemId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(repo.find_all().len(), 400);
        assert_eq!(ids.iter().max(), Some(&ItemId::new(400)));
    }

    #[test]
    fn shared_through_arc_as_trait_object() {
        let repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
        let saved = repo.save(NewItem::new("ItemA", 10000, 10));
        assert_eq!(repo.find_by_id(saved.id()).unwrap(), saved);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn new_item() -> impl Strategy<Value = NewItem> {
            ("[A-Za-z][A-Za-z0-9 -]{0,30}", any::<i32>(), any::<i32>())
                .prop_map(|(name, price, quantity)| NewItem::new(name, price, quantity))
        }

        proptest! {
            /// Property: every saved item reads back equal, under its own id.
            #[test]
            fn saved_items_read_back_equal(items in prop::collection::vec(new_item(), 1..20)) {
                let repo = InMemoryItemRepository::new();
                let saved: Vec<Item> = items.iter().cloned().map(|i| repo.save(i)).collect();

                for (input, stored) in items.iter().zip(&saved) {
                    prop_assert_eq!(&stored.to_new_item(), input);
                    prop_assert_eq!(&repo.find_by_id(stored.id()).unwrap(), stored);
                }
                prop_assert_eq!(repo.find_all().len(), items.len());
            }

            /// Property: ids are exactly 1..=n in save order.
            #[test]
            fn ids_are_sequential(n in 1usize..50) {
                let repo = InMemoryItemRepository::new();
                for expected in 1..=n as u64 {
                    let saved = repo.save(NewItem::new("x", 0, 0));
                    prop_assert_eq!(saved.id().get(), expected);
                }
            }

            /// Property: update never touches the id or other items.
            #[test]
            fn update_only_touches_target(
                first in new_item(),
                second in new_item(),
                replacement in new_item(),
            ) {
                let repo = InMemoryItemRepository::new();
                let a = repo.save(first);
                let b = repo.save(second);

                repo.update(a.id(), replacement.clone()).unwrap();

                let updated = repo.find_by_id(a.id()).unwrap();
                prop_assert_eq!(updated.id(), a.id());
                prop_assert_eq!(updated.to_new_item(), replacement);
                prop_assert_eq!(repo.find_by_id(b.id()).unwrap(), b);
            }
        }
    }
}
