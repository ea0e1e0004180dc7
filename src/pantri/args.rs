use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pantri::model::{Category, Unit};

#[derive(Parser, Debug)]
#[command(name = "pantri")]
#[command(about = "Track groceries and expiry dates from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, with warnings for expired and expiring ones
    #[command(alias = "ls")]
    List,

    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Category: fruit, vegetable, meat, dairy or staple
        #[arg(short, long)]
        category: Category,

        /// Quantity (non-negative)
        #[arg(short, long)]
        quantity: f64,

        /// Unit: kg, g, l, ml or pcs
        #[arg(short, long)]
        unit: Unit,

        /// Expiry date (YYYY-MM-DD); omit for items that do not expire
        #[arg(short, long)]
        expires: Option<NaiveDate>,
    },

    /// Edit an item by its list index
    #[command(alias = "e")]
    Edit {
        /// Index from the list output (e.g. 2)
        index: usize,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<Category>,

        /// New quantity
        #[arg(short, long)]
        quantity: Option<f64>,

        /// New unit
        #[arg(short, long)]
        unit: Option<Unit>,

        /// New expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: Option<NaiveDate>,

        /// Clear the expiry date
        #[arg(long, conflicts_with = "expires")]
        no_expiry: bool,
    },

    /// Delete one or more items by index
    #[command(alias = "rm")]
    Delete {
        /// Indexes from the list output (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., endpoint)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
