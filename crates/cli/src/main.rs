//! Shiba Phone CLI - Browse the catalog and run a purchase from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List budget phones, cheapest first
//! shiba-cli products --category budget --sort price-low
//!
//! # Categories with product counts
//! shiba-cli categories
//!
//! # Log in, show the account, then sign out
//! shiba-cli account --phone 9876543210 --otp 123456 --logout
//!
//! # Show one product with its plans and reviews
//! shiba-cli show 1
//!
//! # Buy product 1 on plan 2
//! shiba-cli purchase --product 1 --plan 2 --phone 9876543210 --otp 123456 \
//!     --name "Asha Rao" --email asha@example.com --address "12 MG Road" \
//!     --city Bengaluru --pincode 560001 --signature "Asha Rao" \
//!     --accept-terms --accept-privacy
//! ```
//!
//! # Commands
//!
//! - `products` - List products with optional filters
//! - `categories` - Categories with product counts
//! - `show` - Product detail
//! - `account` - Session overview, optional login and sign-out
//! - `purchase` - Cart, login, personal info and contract in one go
//!
//! Pass `--json` to any command for machine-readable output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shiba_core::ProductId;
use shiba_storefront::{Store, StorefrontConfig, telemetry};

mod commands;

use commands::account::AccountArgs;
use commands::purchase::PurchaseArgs;

#[derive(Parser)]
#[command(name = "shiba-cli")]
#[command(author, version, about = "Shiba Phone storefront CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Category ID (`flagship`, `budget`, `gaming`, `accessories` or `all`)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text to find in name or description
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (`name`, `price-low`, `price-high`, `rating`)
        #[arg(long)]
        sort: Option<String>,
    },
    /// List categories with product counts
    Categories,
    /// Show a product's details, plans and reviews
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Show the account overview
    Account(AccountArgs),
    /// Run the purchase flow for one product
    Purchase(PurchaseArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Still log the failure with the default filter
            telemetry::init(&StorefrontConfig::default());
            return Err(e.into());
        }
    };
    telemetry::init(&config);

    let store = Store::new();

    match cli.command {
        Commands::Products {
            category,
            search,
            sort,
        } => {
            commands::catalog::list(
                &store,
                category.as_deref(),
                search.as_deref(),
                sort.as_deref(),
                cli.json,
            )?;
        }
        Commands::Categories => commands::catalog::categories(&store, cli.json)?,
        Commands::Show { id } => commands::catalog::show(&store, id, cli.json)?,
        Commands::Account(args) => {
            commands::account::run(&store, &config, args, cli.json).await?;
        }
        Commands::Purchase(args) => {
            commands::purchase::run(&store, &config, args, cli.json).await?;
        }
    }
    Ok(())
}
