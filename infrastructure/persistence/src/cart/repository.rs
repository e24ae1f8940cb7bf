use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::StorageError;

use super::entity::StoredCart;
use crate::kv::{KeyValueStore, keys};

pub struct CartRepositorySqlite {
    store: KeyValueStore,
}

impl CartRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for CartRepositorySqlite {
    async fn load(&self) -> Result<Option<Cart>, StorageError> {
        self.store
            .get_json::<StoredCart>(keys::CART)
            .await?
            .map(StoredCart::into_domain)
            .transpose()
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.store
            .put_json(keys::CART, &StoredCart::from_domain(cart))
            .await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CART).await
    }
}
