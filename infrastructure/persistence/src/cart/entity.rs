use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine, CartOwner};
use business::domain::errors::StorageError;
use business::domain::shared::value_objects::{GuestId, ProductId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCartLine {
    pub product_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price: BigDecimal,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

/// Cart snapshot as written under the `cart` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
    #[serde(default)]
    pub products: Vec<StoredCartLine>,
    #[serde(default)]
    pub total_price: Option<BigDecimal>,
    #[serde(default)]
    pub total_items: Option<u32>,
}

impl StoredCart {
    pub fn from_domain(cart: &Cart) -> Self {
        let (user, guest_id) = match cart.owner() {
            CartOwner::User(id) => (Some(id.as_str().to_string()), None),
            CartOwner::Guest(id) => (None, Some(id.as_str().to_string())),
        };

        Self {
            user,
            guest_id,
            products: cart
                .lines()
                .iter()
                .map(|line| StoredCartLine {
                    product_id: line.product_id.as_str().to_string(),
                    name: line.name.clone(),
                    image: line.image.clone(),
                    price: line.price.clone(),
                    size: line.size.clone(),
                    color: line.color.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total_price: Some(cart.total_price().clone()),
            total_items: Some(cart.total_items()),
        }
    }

    /// A snapshot must name exactly one owner.
    pub fn into_domain(self) -> Result<Cart, StorageError> {
        let owner = match (self.user, self.guest_id) {
            (Some(user), None) => CartOwner::User(UserId::new(user)),
            (None, Some(guest)) => CartOwner::Guest(GuestId::new(guest)),
            _ => return Err(StorageError::corrupted()),
        };

        let lines = self
            .products
            .into_iter()
            .map(|p| CartLine {
                product_id: ProductId::new(p.product_id),
                size: p.size,
                color: p.color,
                quantity: p.quantity,
                price: p.price,
                name: p.name,
                image: p.image,
            })
            .collect();

        Ok(Cart::from_parts(
            owner,
            lines,
            self.total_price,
            self.total_items,
        ))
    }
}
