use std::fmt::Display;

use business::domain::cart::model::Cart;
use business::domain::errors::ErrorCategory;
use business::domain::review::model::ReviewPage;
use business::domain::review::votes::VoteBoard;

/// Error surfaced to the terminal, tagged with how the user should react.
pub fn failure(category: ErrorCategory, error: impl Display) -> anyhow::Error {
    let hint = match category {
        ErrorCategory::Validation => "check the arguments and try again",
        ErrorCategory::Network => "the storefront API failed, try again later",
        ErrorCategory::Authorization => "sign in with `storefront login` first",
        ErrorCategory::Storage => "the local store could not be read or written",
    };
    anyhow::anyhow!("{} ({})", error, hint)
}

pub fn render_cart(cart: &Cart) -> String {
    let mut out = format!("Cart of {}\n", cart.owner());
    if cart.is_empty() {
        out.push_str("  (empty)\n");
    }
    for line in cart.lines() {
        out.push_str(&format!(
            "  {} x{}  {} / {}  @ {}  [{}]\n",
            line.name, line.quantity, line.size, line.color, line.price, line.product_id
        ));
    }
    out.push_str(&format!(
        "Items: {}  Total: {}",
        cart.total_items(),
        cart.total_price()
    ));
    out
}

pub fn render_reviews(page: &ReviewPage, board: &VoteBoard) -> String {
    let mut out = format!(
        "Page {} of {} ({} reviews)\n",
        page.page, page.pages, page.total
    );
    for review in &page.reviews {
        let vote = board.snapshot(&review.id);
        out.push_str(&format!(
            "  [{}] {}/5 {} by {}{}\n    {}\n    helpful: {}{}\n",
            review.id,
            review.rating,
            review.title,
            review.author_name.as_deref().unwrap_or("anonymous"),
            if review.verified_purchase {
                " (verified)"
            } else {
                ""
            },
            review.comment,
            vote.count(),
            if vote.voted() { " (you)" } else { "" },
        ));
    }
    out.trim_end().to_string()
}
