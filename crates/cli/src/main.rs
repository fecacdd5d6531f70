//! Termocolor CLI - cart inspection and management.
//!
//! Operates on the file-backed cart in the data directory, the same record
//! a session store reads at startup.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! tc-cli show
//!
//! # Add two 5L buckets of a product
//! tc-cli add -p vopsea-01 -t "Vopsea lavabilă" -v 5L --price 120 -q 2
//!
//! # Change a line's quantity (0 removes it)
//! tc-cli set-quantity -p vopsea-01 -v 5L -q 3
//!
//! # Remove a line / empty the cart
//! tc-cli remove -p vopsea-01 -v 5L
//! tc-cli clear
//! ```
//!
//! # Environment
//!
//! - `TERMOCOLOR_DATA_DIR` - cart data directory (default: `.termocolor`);
//!   a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use termocolor_cart::{CartStore, FileStorage};

mod commands;

const DEFAULT_DATA_DIR: &str = ".termocolor";

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(author, version, about = "Termocolor cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart lines and aggregates
    Show,
    /// Add a product variant to the cart
    Add {
        /// Catalog product ID
        #[arg(short, long)]
        product_id: String,

        /// Product title (snapshotted onto the cart line)
        #[arg(short, long)]
        title: String,

        /// Product image URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Variant label (e.g., 5L, 20kg)
        #[arg(short, long)]
        variant: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Package-quantity label (e.g., `bucată`, `set`)
        #[arg(short, long, default_value = "bucată")]
        unit: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Catalog product ID
        #[arg(short, long)]
        product_id: String,

        /// Variant label
        #[arg(short, long)]
        variant: String,
    },
    /// Set a line's quantity (0 removes the line)
    SetQuantity {
        /// Catalog product ID
        #[arg(short, long)]
        product_id: String,

        /// Variant label
        #[arg(short, long)]
        variant: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    run(cli);
}

fn run(cli: Cli) {
    let data_dir =
        std::env::var("TERMOCOLOR_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let mut store = CartStore::open(FileStorage::new(data_dir));

    match cli.command {
        Commands::Show => {}
        Commands::Add {
            product_id,
            title,
            image,
            variant,
            price,
            unit,
            quantity,
        } => commands::add(
            &mut store, &product_id, &title, &image, &variant, price, &unit, quantity,
        ),
        Commands::Remove {
            product_id,
            variant,
        } => commands::remove(&mut store, &product_id, &variant),
        Commands::SetQuantity {
            product_id,
            variant,
            quantity,
        } => commands::set_quantity(&mut store, &product_id, &variant, quantity),
        Commands::Clear => commands::clear(&mut store),
    }

    commands::print_cart(&store);
}
