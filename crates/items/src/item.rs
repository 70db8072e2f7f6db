use itemservice_core::ItemId;

/// Field set of an item before the repository has assigned it an id.
///
/// Also used as the replacement payload for updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub price: i32,
    pub quantity: i32,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Bind the fields to an id. Only the repository does this.
    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// A stored, purchasable product.
///
/// The id field is private: an `Item` can only come out of the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    pub name: String,
    pub price: i32,
    pub quantity: i32,
}

impl Item {
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Overwrite every mutable field; the id is left as is.
    pub(crate) fn replace_fields(&mut self, fields: NewItem) {
        self.name = fields.name;
        self.price = fields.price;
        self.quantity = fields.quantity;
    }

    pub fn to_new_item(&self) -> NewItem {
        NewItem::new(self.name.clone(), self.price, self.quantity)
    }
}
