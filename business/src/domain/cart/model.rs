use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::shared::value_objects::{GuestId, ProductId, UserId};

use super::errors::CartError;

/// Who a cart belongs to. Exactly one of guest or account, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartOwner {
    Guest(GuestId),
    User(UserId),
}

impl CartOwner {
    pub fn is_guest(&self) -> bool {
        matches!(self, CartOwner::Guest(_))
    }

    pub fn guest_id(&self) -> Option<&GuestId> {
        match self {
            CartOwner::Guest(id) => Some(id),
            CartOwner::User(_) => None,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            CartOwner::User(id) => Some(id),
            CartOwner::Guest(_) => None,
        }
    }
}

impl std::fmt::Display for CartOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOwner::Guest(id) => write!(f, "guest {}", id),
            CartOwner::User(id) => write!(f, "user {}", id),
        }
    }
}

/// Identity of a cart line. Same product in another size or colour is another line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(product_id: ProductId, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub price: BigDecimal,
    pub name: String,
    pub image: Option<String>,
}

impl CartLine {
    pub fn new(
        key: LineKey,
        quantity: u32,
        price: BigDecimal,
        name: String,
        image: Option<String>,
    ) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        Ok(Self {
            product_id: key.product_id,
            size: key.size,
            color: key.color,
            quantity,
            price,
            name,
            image,
        })
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), &self.size, &self.color)
    }

    pub fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    pub fn subtotal(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// Client-side snapshot of a cart. Line arithmetic is the server's job; the
/// snapshot only guarantees that every line it holds has a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    owner: CartOwner,
    lines: Vec<CartLine>,
    total_price: BigDecimal,
    total_items: u32,
}

impl Cart {
    pub fn empty(owner: CartOwner) -> Self {
        Self {
            owner,
            lines: Vec::new(),
            total_price: BigDecimal::zero(),
            total_items: 0,
        }
    }

    /// Builds a cart from a server or storage payload.
    ///
    /// Lines with quantity 0 are dropped. Missing totals are derived from the
    /// remaining lines; totals the payload does carry are kept as given.
    pub fn from_parts(
        owner: CartOwner,
        lines: Vec<CartLine>,
        total_price: Option<BigDecimal>,
        total_items: Option<u32>,
    ) -> Self {
        let lines: Vec<CartLine> = lines.into_iter().filter(|l| l.quantity > 0).collect();
        let total_price = total_price.unwrap_or_else(|| Self::sum_price(&lines));
        let total_items = total_items.unwrap_or_else(|| Self::sum_items(&lines));

        Self {
            owner,
            lines,
            total_price,
            total_items,
        }
    }

    pub fn owner(&self) -> &CartOwner {
        &self.owner
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_price(&self) -> &BigDecimal {
        &self.total_price
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    fn sum_price(lines: &[CartLine]) -> BigDecimal {
        lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.subtotal())
    }

    fn sum_items(lines: &[CartLine]) -> u32 {
        lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }
}
