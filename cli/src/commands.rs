pub mod order;
pub mod rank;
pub mod select;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{ArgAction, Parser, Subcommand};
use courier_common::config::{Config, DEFAULT_MAX_DISTANCE};
use courier_common::time::parse_delivery_time;

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Assigns delivery drivers to orders and ranks them by distance.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON snapshot to use instead of the built-in demo data
    #[arg(long, global = true, env = "COURIER_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Write placed orders back to the dataset
    #[arg(long, global = true, requires = "dataset")]
    pub save: bool,

    /// Seed for the delivery distance estimator
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Upper bound of an estimated delivery distance
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: f64,

    /// Less output (-q hides headers, -qq prints results only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Place an order and assign a driver to it
    #[command(alias = "o")]
    Order {
        customer: String,
        restaurant: String,
        /// Delivery time, e.g. "01-10-2021 15:00"
        #[arg(value_parser = parse_delivery_time)]
        time: NaiveDateTime,
    },
    /// Show which driver an order would get, without placing it
    #[command(alias = "s")]
    Select {
        city: String,
        /// Delivery time, e.g. "01-10-2021 15:00"
        #[arg(value_parser = parse_delivery_time)]
        time: NaiveDateTime,
    },
    /// Rank drivers by total distance
    #[command(alias = "r")]
    Rank {
        /// Only rank drivers of this city
        #[arg(long)]
        city: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            max_distance: self.max_distance,
            seed: self.seed,
            dataset: self.dataset.clone(),
            save: self.save,
        }
    }
}
