use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDateTime;
use colored::*;
use courier_common::config::Config;
use courier_common::order::{Assignment, OrderRequest};
use courier_common::time::format_delivery_time;
use courier_core::distance::RandomDistance;
use courier_core::intake::OrderIntake;
use courier_core::store::InMemoryStore;

use crate::terminal::{colors, format, print};

/// Places an order. Returns whether a delivery was committed.
pub async fn order(
    store: Arc<InMemoryStore>,
    customer: String,
    restaurant: String,
    time: NaiveDateTime,
    cfg: &Config,
) -> anyhow::Result<bool> {
    let estimator =
        RandomDistance::new(cfg.max_distance, cfg.seed).context("invalid --max-distance")?;
    let intake = OrderIntake::new(store, Box::new(estimator));

    let request = OrderRequest {
        customer,
        restaurant,
        delivery_time: time,
    };

    if cfg.quiet == 0 {
        print::print_status(format!(
            "{} orders from {} for {}",
            request.customer.as_str().color(colors::PRIMARY),
            request.restaurant.as_str().color(colors::PRIMARY),
            format_delivery_time(&request.delivery_time).color(colors::ACCENT)
        ));
    }

    match intake.place_order(&request).await? {
        Assignment::Assigned(delivery) => {
            print::tree_head(0, "Delivery created");
            print::as_tree_one_level(format::delivery_to_details(&delivery));
            Ok(true)
        }
        Assignment::NoDriverAvailable { city, time } => {
            print::no_results(&format!(
                "No driver available in {city} at {}",
                format_delivery_time(&time)
            ));
            Ok(false)
        }
    }
}
