pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod fetch;
        pub mod load;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod review {
        pub mod get_product_reviews;
        pub mod toggle_helpful;
    }
    pub mod session {
        pub mod complete_login;
        pub mod login;
        pub mod logout;
        pub mod register;
    }
    pub mod wishlist {
        pub mod save_for_later;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod fetch;
            pub mod load;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod votes;
        pub mod use_cases {
            pub mod get_product_reviews;
            pub mod toggle_helpful;
        }
    }
    pub mod session {
        pub mod credentials;
        pub mod errors;
        pub mod model;
        pub mod owner;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod complete_login;
            pub mod login;
            pub mod logout;
            pub mod register;
        }
    }
    pub mod shared {
        pub mod cancellation;
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod save_for_later;
        }
    }
}

#[cfg(test)]
mod test_support;
