use crate::domain::shared::value_objects::ProductId;

/// Ordered, duplicate-free list of product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    items: Vec<ProductId>,
}

impl Wishlist {
    pub fn new(items: Vec<ProductId>) -> Self {
        let mut wishlist = Self::default();
        wishlist.absorb(&items);
        wishlist
    }

    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    /// Appends `product_id` unless already present. Returns whether it was added.
    pub fn add(&mut self, product_id: ProductId) -> bool {
        if self.contains(&product_id) {
            return false;
        }
        self.items.push(product_id);
        true
    }

    /// Unions `incoming` into the list keeping first-seen order. Returns how many were new.
    pub fn absorb(&mut self, incoming: &[ProductId]) -> usize {
        let mut added = 0;
        for product_id in incoming {
            if self.add(product_id.clone()) {
                added += 1;
            }
        }
        added
    }
}
