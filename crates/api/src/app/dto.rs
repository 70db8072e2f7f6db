use serde::Deserialize;

use itemservice_items::NewItem;

// -------------------------
// Form DTOs
// -------------------------

/// Body of the add and edit forms (`application/x-www-form-urlencoded`).
///
/// Extra fields (such as a hidden `id` on the edit form) are ignored.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub price: i32,
    pub quantity: i32,
}

impl From<ItemForm> for NewItem {
    fn from(form: ItemForm) -> Self {
        NewItem::new(form.item_name, form.price, form.quantity)
    }
}
