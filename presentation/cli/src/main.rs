use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands {
    pub mod cart;
    pub mod output;
    pub mod reviews;
    pub mod session;
    pub mod wishlist;
}
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
}

use commands::{cart, reviews, session, wishlist};
use config::{app_config::AppConfig, storage_config};
use setup::dependency_injection::DependencyContainer;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
    /// Sign in, then merge the guest cart and pending wishlist
    Login(session::LoginArgs),
    /// Create an account, then merge the guest cart and pending wishlist
    Register(session::RegisterArgs),
    /// Sign out and start a fresh guest session
    Logout,
    Wishlist(wishlist::WishlistCommand),
    Reviews(reviews::ReviewsCommand),
}

/// Storefront CLI Entry Point
///
/// - config/: API and local store settings from the environment
/// - setup/: dependency wiring
/// - commands/: argument parsing and terminal output per feature
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the local store
    let pool = storage_config::init_storage(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.api)?;

    // 6. Run command
    match cli.command {
        Commands::Cart(command) => cart::run(command, &container.cart).await,
        Commands::Login(args) => session::login(args, &container.session).await,
        Commands::Register(args) => session::register(args, &container.session).await,
        Commands::Logout => session::logout(&container.session).await,
        Commands::Wishlist(command) => {
            wishlist::run(command, container.save_for_later.as_ref()).await
        }
        Commands::Reviews(command) => reviews::run(command, &container.reviews).await,
    }
}
