use std::collections::BTreeSet;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine, CartOwner, LineKey};
use business::domain::errors::GatewayError;
use business::domain::review::model::{Review, ReviewPage};
use business::domain::review::votes::HelpfulVoteAck;
use business::domain::session::model::{AuthToken, AuthenticatedSession, SessionUser};
use business::domain::shared::value_objects::{GuestId, ProductId, ReviewId, UserId};

fn parse_decimal(number: &serde_json::Number) -> Result<BigDecimal, GatewayError> {
    BigDecimal::from_str(&number.to_string()).map_err(|_| GatewayError::decode())
}

// ---- cart ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: serde_json::Number,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub guest_id: Option<String>,
    #[serde(default)]
    pub products: Vec<CartLineDto>,
    #[serde(default)]
    pub total_price: Option<serde_json::Number>,
    #[serde(default)]
    pub total_items: Option<u32>,
}

impl CartDto {
    /// The owner named by the payload wins; `requested` is used when the
    /// server leaves both owner fields out.
    pub fn into_domain(self, requested: &CartOwner) -> Result<Cart, GatewayError> {
        let owner = match (self.user, self.guest_id) {
            (Some(user), _) => CartOwner::User(UserId::new(user)),
            (None, Some(guest)) => CartOwner::Guest(GuestId::new(guest)),
            (None, None) => requested.clone(),
        };

        let lines = self
            .products
            .into_iter()
            .map(|p| {
                Ok(CartLine {
                    product_id: ProductId::new(p.product_id),
                    size: p.size,
                    color: p.color,
                    quantity: p.quantity,
                    price: parse_decimal(&p.price)?,
                    name: p.name,
                    image: p.image,
                })
            })
            .collect::<Result<Vec<_>, GatewayError>>()?;

        let total_price = self.total_price.as_ref().map(parse_decimal).transpose()?;

        Ok(Cart::from_parts(owner, lines, total_price, self.total_items))
    }
}

/// Body for `POST`, `PUT` and `DELETE /cart`. Carries exactly one owner field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineRequestDto<'a> {
    pub product_id: &'a str,
    pub size: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

impl<'a> CartLineRequestDto<'a> {
    pub fn new(owner: &'a CartOwner, key: &'a LineKey, quantity: Option<u32>) -> Self {
        Self {
            product_id: key.product_id.as_str(),
            size: &key.size,
            color: &key.color,
            quantity,
            guest_id: owner.guest_id().map(GuestId::as_str),
            user_id: owner.user_id().map(UserId::as_str),
        }
    }
}

/// Query pair selecting a cart on `GET /cart`.
pub fn owner_query(owner: &CartOwner) -> (&'static str, &str) {
    match owner {
        CartOwner::User(id) => ("userId", id.as_str()),
        CartOwner::Guest(id) => ("guestId", id.as_str()),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequestDto<'a> {
    pub guest_id: &'a str,
    pub user: UserDto,
}

// ---- auth ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "customer".to_string()
}

impl UserDto {
    pub fn from_domain(user: &SessionUser) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }

    pub fn into_domain(self) -> SessionUser {
        SessionUser {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequestDto<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequestDto<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}

impl AuthResponseDto {
    pub fn into_domain(self) -> Result<AuthenticatedSession, GatewayError> {
        let token = AuthToken::parse(&self.token).ok_or_else(GatewayError::decode)?;
        Ok(AuthenticatedSession {
            user: self.user.into_domain(),
            token,
        })
    }
}

// ---- reviews ----

/// A reference the API sends either as a bare id or as a populated document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RefDto {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl RefDto {
    pub fn id(&self) -> &str {
        match self {
            RefDto::Id(id) => id,
            RefDto::Populated { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            RefDto::Id(_) => None,
            RefDto::Populated { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product: Option<RefDto>,
    #[serde(default)]
    pub user: Option<RefDto>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub verified_purchase: bool,
    #[serde(default)]
    pub helpful_votes: u32,
    #[serde(default)]
    pub helpful_votes_by: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewDto {
    pub fn into_domain(self, listed_for: &ProductId) -> Review {
        let product_id = self
            .product
            .as_ref()
            .map(|p| ProductId::new(p.id()))
            .unwrap_or_else(|| listed_for.clone());
        let author_name = self
            .user_name
            .or_else(|| self.user.as_ref().and_then(|u| u.name()).map(str::to_string));

        Review {
            id: ReviewId::new(self.id),
            product_id,
            author_id: self.user.as_ref().map(|u| UserId::new(u.id())),
            author_name,
            rating: self.rating,
            title: self.title,
            comment: self.comment,
            verified_purchase: self.verified_purchase,
            helpful_votes: self.helpful_votes,
            helpful_votes_by: self
                .helpful_votes_by
                .into_iter()
                .map(UserId::new)
                .collect::<BTreeSet<_>>(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewListDto {
    #[serde(default, alias = "reviews")]
    pub data: Vec<ReviewDto>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

impl ReviewListDto {
    pub fn into_domain(self, product_id: &ProductId, requested_page: u32) -> ReviewPage {
        let reviews: Vec<Review> = self
            .data
            .into_iter()
            .map(|r| r.into_domain(product_id))
            .collect();

        ReviewPage {
            total: self.total.unwrap_or(reviews.len() as u64),
            page: self.page.unwrap_or(requested_page),
            pages: self.pages.unwrap_or(1),
            reviews,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpfulFieldsDto {
    #[serde(default)]
    pub helpful_votes: Option<u32>,
    #[serde(default)]
    pub has_voted: Option<bool>,
}

/// `PUT /product-reviews/:id/helpful` reply. Values may sit under `data` or at
/// the top level.
#[derive(Debug, Deserialize)]
pub struct HelpfulResponseDto {
    #[serde(default)]
    pub data: Option<HelpfulFieldsDto>,
    #[serde(flatten)]
    pub top_level: HelpfulFieldsDto,
}

impl HelpfulResponseDto {
    pub fn into_ack(self) -> HelpfulVoteAck {
        let data = self.data.unwrap_or_default();
        HelpfulVoteAck {
            helpful_votes: data.helpful_votes.or(self.top_level.helpful_votes),
            has_voted: data.has_voted.or(self.top_level.has_voted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guest() -> CartOwner {
        CartOwner::Guest(GuestId::new("guest_1749767368868"))
    }

    #[test]
    fn should_decode_server_cart_with_decimal_prices() {
        let dto: CartDto = serde_json::from_value(json!({
            "_id": "684a0c1f9b1e8a0012345678",
            "guestId": "guest_1749767368868",
            "products": [{
                "productId": "p1",
                "name": "Winter Jacket",
                "image": "https://cdn.example.com/jacket.jpg",
                "price": 15.5,
                "size": "M",
                "color": "Red",
                "quantity": 2
            }],
            "totalPrice": 31
        }))
        .unwrap();

        let cart = dto.into_domain(&guest()).unwrap();

        assert_eq!(cart.owner(), &guest());
        assert_eq!(cart.lines()[0].price, BigDecimal::from_str("15.5").unwrap());
        assert_eq!(cart.total_price(), &BigDecimal::from(31));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn should_prefer_user_owner_from_merge_response() {
        let dto: CartDto = serde_json::from_value(json!({
            "user": "u1",
            "products": [],
            "totalPrice": 0
        }))
        .unwrap();

        let cart = dto.into_domain(&guest()).unwrap();

        assert_eq!(cart.owner(), &CartOwner::User(UserId::new("u1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn should_drop_zero_quantity_lines_from_server() {
        let dto: CartDto = serde_json::from_value(json!({
            "guestId": "guest_1",
            "products": [
                {"productId": "p1", "price": 10, "size": "S", "color": "Blue", "quantity": 0},
                {"productId": "p2", "price": 5, "size": "L", "color": "Black", "quantity": 3}
            ]
        }))
        .unwrap();

        let cart = dto.into_domain(&guest()).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), &BigDecimal::from(15));
    }

    #[test]
    fn should_send_single_owner_field_in_line_requests() {
        let key = LineKey::new(ProductId::new("p1"), "M", "Red");
        let owner = guest();

        let body = serde_json::to_value(CartLineRequestDto::new(&owner, &key, Some(2))).unwrap();

        assert_eq!(
            body,
            json!({
                "productId": "p1",
                "size": "M",
                "color": "Red",
                "quantity": 2,
                "guestId": "guest_1749767368868"
            })
        );
    }

    #[test]
    fn should_omit_quantity_for_removals() {
        let key = LineKey::new(ProductId::new("p1"), "M", "Red");
        let owner = CartOwner::User(UserId::new("u1"));

        let body = serde_json::to_value(CartLineRequestDto::new(&owner, &key, None)).unwrap();

        assert!(body.get("quantity").is_none());
        assert_eq!(body["userId"], "u1");
    }

    #[test]
    fn should_serialize_merge_body_with_user_document() {
        let user = SessionUser {
            id: UserId::new("u1"),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role: "customer".to_string(),
        };

        let body = serde_json::to_value(MergeRequestDto {
            guest_id: "guest_1",
            user: UserDto::from_domain(&user),
        })
        .unwrap();

        assert_eq!(body["guestId"], "guest_1");
        assert_eq!(body["user"]["_id"], "u1");
        assert_eq!(body["user"]["email"], "jane@example.com");
    }

    #[test]
    fn should_decode_login_response() {
        let dto: AuthResponseDto = serde_json::from_value(json!({
            "user": {
                "_id": "u1",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "role": "customer",
                "phone": null
            },
            "token": "abc.def.ghi"
        }))
        .unwrap();

        let session = dto.into_domain().unwrap();

        assert_eq!(session.user.id, UserId::new("u1"));
        assert_eq!(session.token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn should_reject_blank_token_in_auth_response() {
        let dto: AuthResponseDto = serde_json::from_value(json!({
            "user": {"id": "u1", "name": "Jane", "email": "jane@example.com"},
            "token": "  "
        }))
        .unwrap();

        assert_eq!(dto.into_domain().unwrap_err(), GatewayError::Decode);
    }

    #[test]
    fn should_decode_review_page_with_populated_and_bare_authors() {
        let dto: ReviewListDto = serde_json::from_value(json!({
            "success": true,
            "count": 2,
            "total": 12,
            "page": 2,
            "pages": 2,
            "data": [
                {
                    "_id": "r1",
                    "product": "p1",
                    "user": {"_id": "u2", "name": "Alex", "email": "alex@example.com"},
                    "rating": 5,
                    "title": "Great fit",
                    "comment": "True to size",
                    "verifiedPurchase": true,
                    "helpfulVotes": 2,
                    "helpfulVotesBy": ["u1", "u3"],
                    "createdAt": "2025-06-12T10:15:00.000Z"
                },
                {
                    "_id": "r2",
                    "user": "u4",
                    "rating": 3,
                    "helpfulVotes": 0
                }
            ]
        }))
        .unwrap();

        let page = dto.into_domain(&ProductId::new("p1"), 2);

        assert_eq!((page.total, page.page, page.pages), (12, 2, 2));
        let first = &page.reviews[0];
        assert_eq!(first.author_id, Some(UserId::new("u2")));
        assert_eq!(first.author_name.as_deref(), Some("Alex"));
        assert!(first.has_voted(&UserId::new("u1")));
        assert!(first.created_at.is_some());
        let second = &page.reviews[1];
        assert_eq!(second.author_id, Some(UserId::new("u4")));
        assert_eq!(second.product_id, ProductId::new("p1"));
        assert!(second.helpful_votes_by.is_empty());
    }

    #[test]
    fn should_accept_reviews_alias_and_missing_pagination() {
        let dto: ReviewListDto = serde_json::from_value(json!({
            "reviews": [{"_id": "r1", "user": null}]
        }))
        .unwrap();

        let page = dto.into_domain(&ProductId::new("p1"), 1);

        assert_eq!(page.total, 1);
        assert_eq!(page.reviews[0].author_id, None);
    }

    #[test]
    fn should_read_helpful_ack_from_data_envelope() {
        let dto: HelpfulResponseDto = serde_json::from_value(json!({
            "success": true,
            "message": "Marked as helpful",
            "data": {"helpfulVotes": 6, "helpfulCount": 6, "hasVoted": true, "isHelpful": true}
        }))
        .unwrap();

        assert_eq!(
            dto.into_ack(),
            HelpfulVoteAck {
                helpful_votes: Some(6),
                has_voted: Some(true)
            }
        );
    }

    #[test]
    fn should_read_helpful_ack_from_top_level_or_leave_it_empty() {
        let flat: HelpfulResponseDto =
            serde_json::from_value(json!({"helpfulVotes": 5, "hasVoted": false})).unwrap();
        let bare: HelpfulResponseDto =
            serde_json::from_value(json!({"success": true})).unwrap();

        assert_eq!(
            flat.into_ack(),
            HelpfulVoteAck {
                helpful_votes: Some(5),
                has_voted: Some(false)
            }
        );
        assert_eq!(bare.into_ack(), HelpfulVoteAck::default());
    }
}
