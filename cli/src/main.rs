mod commands;
mod dataset;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, Commands, order, rank, select};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = commands.config();
    let store = Arc::new(dataset::open(&cfg)?);

    match commands.command {
        Commands::Order {
            customer,
            restaurant,
            time,
        } => {
            print::header("placing order", cfg.quiet);
            let placed = order::order(store.clone(), customer, restaurant, time, &cfg).await?;
            if placed {
                dataset::save(&store, &cfg)?;
            }
        }
        Commands::Select { city, time } => {
            print::header("selecting driver", cfg.quiet);
            select::select(store, &city, time, &cfg).await?;
        }
        Commands::Rank { city } => {
            print::header("distance ranking", cfg.quiet);
            rank::rank(store, city.as_deref(), &cfg).await?;
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
