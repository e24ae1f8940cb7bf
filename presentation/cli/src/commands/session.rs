use clap::Args;

use business::domain::session::model::LoginContext;
use business::domain::session::use_cases::complete_login::{
    CompleteLoginParams, LoginFollowUp, MergeOutcome, MergeSkipReason,
};
use business::domain::session::use_cases::login::LoginParams;
use business::domain::session::use_cases::register::RegisterParams;

use crate::commands::output::{failure, render_cart};
use crate::setup::dependency_injection::SessionUseCases;

/// Where the user was headed before signing in
#[derive(Debug, Args)]
pub struct NavigationArgs {
    /// `redirect` query of the login page, e.g. `/checkout`
    #[arg(long)]
    redirect: Option<String>,
    /// Page that sent the user to sign in
    #[arg(long)]
    from: Option<String>,
}

impl NavigationArgs {
    fn into_context(self) -> LoginContext {
        LoginContext {
            redirect: self.redirect,
            from: self.from,
        }
    }
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long, env = "STOREFRONT_EMAIL")]
    email: String,
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
    #[command(flatten)]
    navigation: NavigationArgs,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[command(flatten)]
    navigation: NavigationArgs,
}

pub async fn login(args: LoginArgs, session: &SessionUseCases) -> anyhow::Result<()> {
    let user = session
        .login
        .execute(LoginParams {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|e| failure(e.category(), &e))?;
    println!("Signed in as {} <{}>", user.name, user.email);

    follow_up(args.navigation, session).await
}

pub async fn register(args: RegisterArgs, session: &SessionUseCases) -> anyhow::Result<()> {
    let user = session
        .register
        .execute(RegisterParams {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|e| failure(e.category(), &e))?;
    println!("Account created for {} <{}>", user.name, user.email);

    follow_up(args.navigation, session).await
}

pub async fn logout(session: &SessionUseCases) -> anyhow::Result<()> {
    let guest_id = session
        .logout
        .execute()
        .await
        .map_err(|e| failure(e.category(), &e))?;
    println!("Signed out, browsing as {}", guest_id);
    Ok(())
}

async fn follow_up(navigation: NavigationArgs, session: &SessionUseCases) -> anyhow::Result<()> {
    let follow_up = session
        .complete_login
        .execute(CompleteLoginParams {
            context: navigation.into_context(),
        })
        .await
        .map_err(|e| failure(e.category(), &e))?;

    println!("{}", describe_follow_up(&follow_up));
    Ok(())
}

fn describe_follow_up(follow_up: &LoginFollowUp) -> String {
    let merge = match &follow_up.merge {
        MergeOutcome::Merged(cart) => format!("Guest cart merged.\n{}", render_cart(cart)),
        MergeOutcome::Skipped(MergeSkipReason::EmptyGuestCart) => {
            "No guest cart to merge.".to_string()
        }
        MergeOutcome::Skipped(MergeSkipReason::NoGuestId) => {
            "No guest session found, nothing to merge.".to_string()
        }
        MergeOutcome::Skipped(MergeSkipReason::LocalStateUnreadable) => {
            "Local guest cart could not be read, it was left for the next sign in.".to_string()
        }
        MergeOutcome::Failed(e) => format!(
            "Guest cart could not be merged ({}), it was kept for the next sign in.",
            e.server_message().map(str::to_string).unwrap_or_else(|| e.to_string())
        ),
    };

    let mut out = merge;
    if follow_up.wishlist_absorbed > 0 {
        out.push_str(&format!(
            "\n{} saved item(s) moved to your wishlist.",
            follow_up.wishlist_absorbed
        ));
    }
    out.push_str(&format!("\nContinue at {}", follow_up.destination));
    out
}
