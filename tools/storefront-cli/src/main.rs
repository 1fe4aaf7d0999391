//! Storefront CLI - drive the storefront logic from the terminal.
//!
//! Commands:
//! - `storefront browse` - List products with filters and sorting
//! - `storefront product` - Show one product
//! - `storefront replay` - Apply a JSON action script to a store
//! - `storefront checkout` - Fill a cart and check out interactively
//! - `storefront login` - Sign in or create an account
//! - `storefront track` - Track an order
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BrowseArgs, CheckoutArgs, ConfigArgs, LoginArgs, ProductArgs, ReplayArgs, TrackArgs,
};

/// Storefront CLI - browse, shop and track orders
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file (overrides the configured catalog)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters and sorting
    Browse(BrowseArgs),

    /// Show product details
    Product(ProductArgs),

    /// Apply a JSON action script to a fresh store
    Replay(ReplayArgs),

    /// Build a cart and check out
    Checkout(CheckoutArgs),

    /// Sign in or create an account
    Login(LoginArgs),

    /// Track an order
    Track(TrackArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config; the config commands may inspect a broken one
    let allow_invalid = matches!(cli.command, Commands::Config(_));
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.catalog,
        output.clone(),
        allow_invalid,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Replay(args) => commands::replay::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Login(args) => commands::login::run(args, &ctx).await,
        Commands::Track(args) => commands::track::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
