//! CLI command implementations.

pub mod browse;
pub mod checkout;
pub mod config;
pub mod login;
pub mod product;
pub mod replay;
pub mod track;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Listing page: products, new-arrivals, co-ords, bestsellers.
    #[arg(short, long, default_value = "products")]
    pub page: String,

    /// Category filter (tees, shirts, bottoms, co-ords, jackets, or all).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-text search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key: newest, price-low, price-high, rating, name.
    #[arg(long)]
    pub sort: Option<String>,

    /// Minimum price in rupees.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price in rupees.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Size filter; repeat for several.
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Badge filter (NEW, BESTSELLER, LIMITED, TRENDING); repeat for several.
    #[arg(long = "badge")]
    pub badges: Vec<String>,

    /// Only show products in stock.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of actions.
    pub script: String,

    /// Stop at the first rejected action.
    #[arg(long)]
    pub strict: bool,

    /// Write the final store state to this file.
    #[arg(long)]
    pub save_state: Option<String>,

    /// Start from a state file written by an earlier replay.
    #[arg(long)]
    pub load_state: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart line as ID:SIZE[:QTY]; repeat for several.
    #[arg(short, long = "add", required = true)]
    pub items: Vec<String>,

    /// Coupon code.
    #[arg(long)]
    pub coupon: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Create an account instead of signing in.
    #[arg(long)]
    pub signup: bool,

    /// Display name (sign-up).
    #[arg(long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password; prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,

    /// Phone number (sign-up, optional).
    #[arg(long, requires = "signup")]
    pub phone: Option<String>,

    /// Sign in through a provider instead (google, phone).
    #[arg(long, conflicts_with_all = ["signup", "email", "password", "name", "phone"])]
    pub provider: Option<String>,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Order number.
    pub order_number: String,

    /// Email used for the order.
    #[arg(short, long)]
    pub email: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write storefront.json instead of storefront.toml.
        #[arg(long)]
        json: bool,
    },
    /// Validate the config file.
    Validate,
}
