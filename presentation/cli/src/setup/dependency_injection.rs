use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositorySqlite;
use persistence::kv::KeyValueStore;
use persistence::session::repository::SessionRepositorySqlite;
use persistence::wishlist::repository::WishlistRepositorySqlite;

use rest_client::auth_gateway::AuthServiceRest;
use rest_client::cart_gateway::CartServiceRest;
use rest_client::client::ApiClient;
use rest_client::review_gateway::ReviewServiceRest;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::fetch::FetchCartUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::review::get_product_reviews::GetProductReviewsUseCaseImpl;
use business::application::review::toggle_helpful::ToggleHelpfulUseCaseImpl;
use business::application::session::complete_login::CompleteLoginUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::application::session::register::RegisterUseCaseImpl;
use business::application::wishlist::save_for_later::SaveForLaterUseCaseImpl;
use business::domain::cart::use_cases::add_item::AddToCartUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::fetch::FetchCartUseCase;
use business::domain::cart::use_cases::load::LoadCartUseCase;
use business::domain::cart::use_cases::remove_item::RemoveFromCartUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateCartItemQuantityUseCase;
use business::domain::review::use_cases::get_product_reviews::GetProductReviewsUseCase;
use business::domain::review::use_cases::toggle_helpful::ToggleHelpfulUseCase;
use business::domain::review::votes::VoteBoard;
use business::domain::session::use_cases::complete_login::CompleteLoginUseCase;
use business::domain::session::use_cases::login::LoginUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::session::use_cases::register::RegisterUseCase;
use business::domain::wishlist::use_cases::save_for_later::SaveForLaterUseCase;

use crate::config::api_config::ApiConfig;

pub struct CartUseCases {
    pub load: Arc<dyn LoadCartUseCase>,
    pub fetch: Arc<dyn FetchCartUseCase>,
    pub add_item: Arc<dyn AddToCartUseCase>,
    pub update_quantity: Arc<dyn UpdateCartItemQuantityUseCase>,
    pub remove_item: Arc<dyn RemoveFromCartUseCase>,
    pub clear: Arc<dyn ClearCartUseCase>,
}

pub struct SessionUseCases {
    pub login: Arc<dyn LoginUseCase>,
    pub register: Arc<dyn RegisterUseCase>,
    pub complete_login: Arc<dyn CompleteLoginUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
}

pub struct ReviewUseCases {
    pub list: Arc<dyn GetProductReviewsUseCase>,
    pub toggle_helpful: Arc<dyn ToggleHelpfulUseCase>,
    pub board: Arc<Mutex<VoteBoard>>,
}

pub struct DependencyContainer {
    pub cart: CartUseCases,
    pub session: SessionUseCases,
    pub reviews: ReviewUseCases,
    pub save_for_later: Arc<dyn SaveForLaterUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::SqlitePool, api: &ApiConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let store = KeyValueStore::new(pool);
        let cart_repository = Arc::new(CartRepositorySqlite::new(store.clone()));
        let session_repository = Arc::new(SessionRepositorySqlite::new(store.clone()));
        let wishlist_repository = Arc::new(WishlistRepositorySqlite::new(store));

        let client = ApiClient::new(&api.base_url, api.timeout)
            .map_err(|e| anyhow::anyhow!("API client for {} not created: {}", api.base_url, e))?;
        let cart_service = Arc::new(CartServiceRest::new(client.clone()));
        let review_service = Arc::new(ReviewServiceRest::new(client.clone()));
        let auth_service = Arc::new(AuthServiceRest::new(client));

        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let session_logger = Arc::new(TracingLogger::new("session"));
        let review_logger = Arc::new(TracingLogger::new("reviews"));
        let wishlist_logger = Arc::new(TracingLogger::new("wishlist"));

        // One board per process; listing seeds it, toggling reads and writes it.
        let board = Arc::new(Mutex::new(VoteBoard::new()));

        // Cart use cases
        let cart = CartUseCases {
            load: Arc::new(LoadCartUseCaseImpl {
                repository: cart_repository.clone(),
                sessions: session_repository.clone(),
                logger: cart_logger.clone(),
            }),
            fetch: Arc::new(FetchCartUseCaseImpl {
                service: cart_service.clone(),
                repository: cart_repository.clone(),
                sessions: session_repository.clone(),
                logger: cart_logger.clone(),
            }),
            add_item: Arc::new(AddToCartUseCaseImpl {
                service: cart_service.clone(),
                repository: cart_repository.clone(),
                sessions: session_repository.clone(),
                logger: cart_logger.clone(),
            }),
            update_quantity: Arc::new(UpdateCartItemQuantityUseCaseImpl {
                service: cart_service.clone(),
                repository: cart_repository.clone(),
                sessions: session_repository.clone(),
                logger: cart_logger.clone(),
            }),
            remove_item: Arc::new(RemoveFromCartUseCaseImpl {
                service: cart_service.clone(),
                repository: cart_repository.clone(),
                sessions: session_repository.clone(),
                logger: cart_logger.clone(),
            }),
            clear: Arc::new(ClearCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: cart_logger,
            }),
        };

        // Session use cases
        let session = SessionUseCases {
            login: Arc::new(LoginUseCaseImpl {
                auth: auth_service.clone(),
                sessions: session_repository.clone(),
                logger: session_logger.clone(),
            }),
            register: Arc::new(RegisterUseCaseImpl {
                auth: auth_service,
                sessions: session_repository.clone(),
                logger: session_logger.clone(),
            }),
            complete_login: Arc::new(CompleteLoginUseCaseImpl {
                cart_service,
                carts: cart_repository.clone(),
                sessions: session_repository.clone(),
                wishlist: wishlist_repository.clone(),
                logger: session_logger.clone(),
            }),
            logout: Arc::new(LogoutUseCaseImpl {
                sessions: session_repository.clone(),
                carts: cart_repository,
                logger: session_logger,
            }),
        };

        // Review use cases
        let reviews = ReviewUseCases {
            list: Arc::new(GetProductReviewsUseCaseImpl {
                service: review_service.clone(),
                sessions: session_repository.clone(),
                board: board.clone(),
                logger: review_logger.clone(),
            }),
            toggle_helpful: Arc::new(ToggleHelpfulUseCaseImpl {
                service: review_service,
                sessions: session_repository.clone(),
                board: board.clone(),
                logger: review_logger,
            }),
            board,
        };

        let save_for_later = Arc::new(SaveForLaterUseCaseImpl {
            wishlist: wishlist_repository,
            sessions: session_repository,
            logger: wishlist_logger,
        });

        Ok(Self {
            cart,
            session,
            reviews,
            save_for_later,
        })
    }
}
