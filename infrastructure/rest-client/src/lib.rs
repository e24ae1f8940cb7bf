pub mod auth_gateway;
pub mod cart_gateway;
pub mod client;
pub mod dto;
pub mod review_gateway;
