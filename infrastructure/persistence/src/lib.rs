pub mod db;
pub mod kv;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod session {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod repository;
}
