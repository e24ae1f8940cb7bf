use clap::{Args, Subcommand};

use business::domain::cart::use_cases::add_item::AddToCartParams;
use business::domain::cart::use_cases::remove_item::RemoveFromCartParams;
use business::domain::cart::use_cases::update_quantity::UpdateCartItemQuantityParams;
use business::domain::shared::value_objects::ProductId;

use crate::commands::output::{failure, render_cart};
use crate::setup::dependency_injection::CartUseCases;

#[derive(Debug, Args)]
pub struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Print the locally stored cart
    Show,
    /// Refresh the cart from the API
    Fetch,
    /// Add a product variant to the cart
    Add {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line; 0 removes it
    Update {
        #[command(flatten)]
        line: LineArgs,
        #[arg(long)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        #[command(flatten)]
        line: LineArgs,
    },
    /// Forget the local cart
    Clear,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Product id
    #[arg(long)]
    product: String,
    #[arg(long)]
    size: String,
    #[arg(long)]
    color: String,
}

pub async fn run(command: CartCommand, cart: &CartUseCases) -> anyhow::Result<()> {
    let result = match command.command {
        CartSubcommand::Show => cart.load.execute().await,
        CartSubcommand::Fetch => cart.fetch.execute().await,
        CartSubcommand::Add { line, quantity } => {
            cart.add_item
                .execute(AddToCartParams {
                    product_id: ProductId::new(line.product),
                    size: line.size,
                    color: line.color,
                    quantity,
                })
                .await
        }
        CartSubcommand::Update { line, quantity } => {
            cart.update_quantity
                .execute(UpdateCartItemQuantityParams {
                    product_id: ProductId::new(line.product),
                    size: line.size,
                    color: line.color,
                    quantity,
                })
                .await
        }
        CartSubcommand::Remove { line } => {
            cart.remove_item
                .execute(RemoveFromCartParams {
                    product_id: ProductId::new(line.product),
                    size: line.size,
                    color: line.color,
                })
                .await
        }
        CartSubcommand::Clear => {
            cart.clear
                .execute()
                .await
                .map_err(|e| failure(e.category(), &e))?;
            println!("Cart cleared");
            return Ok(());
        }
    };

    let cart = result.map_err(|e| failure(e.category(), &e))?;
    println!("{}", render_cart(&cart));
    Ok(())
}
