use clap::{Args, Subcommand};

use business::domain::review::model::PageRequest;
use business::domain::review::use_cases::get_product_reviews::GetProductReviewsParams;
use business::domain::review::use_cases::toggle_helpful::{
    ToggleHelpfulOutcome, ToggleHelpfulParams,
};
use business::domain::shared::cancellation::CancellationToken;
use business::domain::shared::value_objects::{ProductId, ReviewId};

use crate::commands::output::{failure, render_reviews};
use crate::setup::dependency_injection::ReviewUseCases;

#[derive(Debug, Args)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReviewsSubcommand {
    /// List reviews of a product
    List {
        #[arg(long)]
        product: String,
        #[arg(long, default_value_t = PageRequest::default().page())]
        page: u32,
        #[arg(long, default_value_t = PageRequest::default().limit())]
        limit: u32,
    },
    /// Toggle your helpful vote on a review
    Helpful {
        #[arg(long)]
        review: String,
        /// Product the review belongs to; its reviews are loaded first
        #[arg(long)]
        product: String,
    },
}

/// Token cancelled when the user hits Ctrl-C, so a late reply is dropped.
fn cancel_on_interrupt() -> CancellationToken {
    let token = CancellationToken::new();
    let handle = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted, discarding pending reply");
            handle.cancel();
        }
    });
    token
}

/// Lists the product's review pages until the board holds `review_id`.
async fn load_review(
    reviews: &ReviewUseCases,
    product_id: ProductId,
    review_id: &ReviewId,
) -> anyhow::Result<()> {
    let mut page = PageRequest::default().page();
    loop {
        let listed = reviews
            .list
            .execute(GetProductReviewsParams {
                product_id: product_id.clone(),
                page,
                limit: PageRequest::default().limit(),
                cancellation: cancel_on_interrupt(),
            })
            .await
            .map_err(|e| failure(e.category(), &e))?;

        if reviews.board.lock().await.get(review_id).is_some() {
            return Ok(());
        }
        if listed.reviews.is_empty() || page >= listed.pages {
            anyhow::bail!("review {} not found for product {}", review_id, product_id);
        }
        page += 1;
    }
}

pub async fn run(command: ReviewsCommand, reviews: &ReviewUseCases) -> anyhow::Result<()> {
    match command.command {
        ReviewsSubcommand::List {
            product,
            page,
            limit,
        } => {
            let page = reviews
                .list
                .execute(GetProductReviewsParams {
                    product_id: ProductId::new(product),
                    page,
                    limit,
                    cancellation: cancel_on_interrupt(),
                })
                .await
                .map_err(|e| failure(e.category(), &e))?;

            let board = reviews.board.lock().await;
            println!("{}", render_reviews(&page, &board));
            Ok(())
        }
        ReviewsSubcommand::Helpful { review, product } => {
            let review_id = ReviewId::new(review.clone());
            load_review(reviews, ProductId::new(product), &review_id).await?;

            let outcome = reviews
                .toggle_helpful
                .execute(ToggleHelpfulParams {
                    review_id,
                    cancellation: cancel_on_interrupt(),
                })
                .await
                .map_err(|e| failure(e.category(), &e))?;

            match outcome {
                ToggleHelpfulOutcome::Reconciled(vote) => println!(
                    "Review {}: {} found this helpful{}",
                    review,
                    vote.count(),
                    if vote.voted() { ", including you" } else { "" }
                ),
                ToggleHelpfulOutcome::AlreadyPending => {
                    println!("A vote on review {} is already being sent", review)
                }
                ToggleHelpfulOutcome::Discarded => println!("Vote reply discarded"),
            }
            Ok(())
        }
    }
}
