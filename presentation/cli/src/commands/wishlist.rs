use clap::{Args, Subcommand};

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::use_cases::save_for_later::{
    SaveForLaterParams, SaveForLaterUseCase, WishlistPlacement,
};

use crate::commands::output::failure;

#[derive(Debug, Args)]
pub struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Debug, Subcommand)]
enum WishlistSubcommand {
    /// Save a product for later
    Save {
        #[arg(long)]
        product: String,
    },
}

pub async fn run(command: WishlistCommand, save: &dyn SaveForLaterUseCase) -> anyhow::Result<()> {
    match command.command {
        WishlistSubcommand::Save { product } => {
            let placement = save
                .execute(SaveForLaterParams {
                    product_id: ProductId::new(product.clone()),
                })
                .await
                .map_err(|e| failure(e.category(), &e))?;

            match placement {
                WishlistPlacement::Saved => println!("{} added to your wishlist", product),
                WishlistPlacement::Pending => {
                    println!("{} will be added to your wishlist after you sign in", product)
                }
                WishlistPlacement::AlreadyPresent => {
                    println!("{} is already saved", product)
                }
            }
            Ok(())
        }
    }
}
