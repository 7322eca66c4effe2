//! Account overview command.

use clap::Args;
use shiba_storefront::account::{self, AccountSummary};
use shiba_storefront::services::LoginFlow;
use shiba_storefront::{AppError, Store, StorefrontConfig};

use super::{CommandError, print_json};

/// Inputs for the account command.
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Log in with this 10-digit mobile number first
    #[arg(long, requires = "otp")]
    pub phone: Option<String>,

    /// 6-digit OTP for `--phone`
    #[arg(long, requires = "phone")]
    pub otp: Option<String>,

    /// Sign out after showing the account
    #[arg(long)]
    pub logout: bool,
}

/// Show the account, optionally logging in first and signing out after.
///
/// # Errors
///
/// Returns `CommandError::App` if the login fails.
pub async fn run(
    store: &Store,
    config: &StorefrontConfig,
    args: AccountArgs,
    json: bool,
) -> Result<(), CommandError> {
    if let (Some(phone), Some(otp)) = (&args.phone, &args.otp) {
        let mut login = LoginFlow::new(store.clone(), config.auth_service());
        login.send_otp(phone).await.map_err(AppError::from)?;
        login.verify_otp(otp).await.map_err(AppError::from)?;
    }

    let mut summaries = vec![AccountSummary::from_store(store)];
    if args.logout {
        summaries.push(account::sign_out(store));
    }

    if json {
        return print_json(&summaries);
    }

    for summary in &summaries {
        print_summary(summary);
    }
    Ok(())
}

fn print_summary(summary: &AccountSummary) {
    if summary.is_logged_in {
        println!("Welcome back, {}", summary.display_name);
    } else {
        println!("{} (not logged in)", summary.display_name);
    }
    if let Some(email) = &summary.email {
        println!("Email:      {email}");
    }
    println!("Cart items: {}", summary.cart_items);
}
