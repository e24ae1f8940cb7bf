use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::cart::model::{Cart, CartLine, CartOwner, LineKey};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::{CartItemRequest, CartService};
use crate::domain::errors::{GatewayError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::review::model::{PageRequest, Review, ReviewPage};
use crate::domain::review::services::ReviewService;
use crate::domain::review::votes::HelpfulVoteAck;
use crate::domain::session::credentials::CredentialSource;
use crate::domain::session::model::{
    AuthToken, AuthenticatedSession, LoginCredentials, Registration, SessionUser,
};
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::services::AuthService;
use crate::domain::shared::value_objects::{GuestId, ProductId, ReviewId, UserId};
use crate::domain::wishlist::repository::WishlistRepository;

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn load(&self) -> Result<Option<Cart>, StorageError>;
        async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
        async fn clear(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub CartApi {}

    #[async_trait]
    impl CartService for CartApi {
        async fn fetch(&self, owner: &CartOwner) -> Result<Cart, GatewayError>;
        async fn add_item(&self, owner: &CartOwner, item: &CartItemRequest) -> Result<Cart, GatewayError>;
        async fn update_quantity(&self, owner: &CartOwner, key: &LineKey, quantity: u32) -> Result<Cart, GatewayError>;
        async fn remove_item(&self, owner: &CartOwner, key: &LineKey) -> Result<Cart, GatewayError>;
        async fn merge(&self, guest_id: &GuestId, user: &SessionUser, token: Option<AuthToken>) -> Result<Cart, GatewayError>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionRepository for SessionRepo {
        async fn guest_id(&self) -> Result<Option<GuestId>, StorageError>;
        async fn save_guest_id(&self, guest_id: &GuestId) -> Result<(), StorageError>;
        async fn user(&self) -> Result<Option<SessionUser>, StorageError>;
        async fn save_session(&self, user: &SessionUser, token: &AuthToken) -> Result<(), StorageError>;
        async fn credential(&self, source: CredentialSource) -> Result<Option<String>, StorageError>;
        async fn clear_session(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub AuthApi {}

    #[async_trait]
    impl AuthService for AuthApi {
        async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticatedSession, GatewayError>;
        async fn register(&self, registration: &Registration) -> Result<AuthenticatedSession, GatewayError>;
    }
}

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn saved(&self) -> Result<Vec<ProductId>, StorageError>;
        async fn save(&self, items: &[ProductId]) -> Result<(), StorageError>;
        async fn pending(&self) -> Result<Vec<ProductId>, StorageError>;
        async fn save_pending(&self, items: &[ProductId]) -> Result<(), StorageError>;
        async fn clear_pending(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub ReviewApi {}

    #[async_trait]
    impl ReviewService for ReviewApi {
        async fn list_by_product(&self, product_id: &ProductId, page: PageRequest) -> Result<ReviewPage, GatewayError>;
        async fn toggle_helpful(&self, review_id: &ReviewId, token: Option<AuthToken>) -> Result<HelpfulVoteAck, GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user() -> SessionUser {
    SessionUser {
        id: UserId::new("u1"),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        role: "customer".to_string(),
    }
}

pub fn test_token() -> AuthToken {
    AuthToken::parse("header.payload.signature").unwrap()
}

pub fn guest_owner() -> CartOwner {
    CartOwner::Guest(GuestId::new("guest_1749767368868"))
}

pub fn jacket_line(quantity: u32) -> CartLine {
    CartLine {
        product_id: ProductId::new("p1"),
        size: "M".to_string(),
        color: "Red".to_string(),
        quantity,
        price: BigDecimal::from_str("15").unwrap(),
        name: "Winter Jacket".to_string(),
        image: Some("https://cdn.example.com/jacket.jpg".to_string()),
    }
}

pub fn jacket_key() -> LineKey {
    LineKey::new(ProductId::new("p1"), "M", "Red")
}

pub fn cart_with(owner: CartOwner, lines: Vec<CartLine>) -> Cart {
    Cart::from_parts(owner, lines, None, None)
}

pub fn review(id: &str, helpful_votes: u32, voters: &[&str], author: &str) -> Review {
    Review {
        id: ReviewId::new(id),
        product_id: ProductId::new("p1"),
        author_id: Some(UserId::new(author)),
        author_name: Some("Alex".to_string()),
        rating: 4,
        title: "Runs small".to_string(),
        comment: "Order one size up.".to_string(),
        verified_purchase: true,
        helpful_votes,
        helpful_votes_by: voters.iter().map(|v| UserId::new(*v)).collect::<BTreeSet<_>>(),
        created_at: None,
    }
}

/// Session repository answering reads for a fixed user, guest id and token.
pub fn session_repo(
    user: Option<SessionUser>,
    guest_id: Option<&'static str>,
    token: Option<&'static str>,
) -> MockSessionRepo {
    let mut repo = MockSessionRepo::new();
    repo.expect_user().returning(move || Ok(user.clone()));
    repo.expect_guest_id()
        .returning(move || Ok(guest_id.map(GuestId::new)));
    repo.expect_credential().returning(move |source| {
        Ok(match source {
            CredentialSource::UserToken => token.map(str::to_string),
            _ => None,
        })
    });
    repo
}
