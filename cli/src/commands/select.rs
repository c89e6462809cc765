use std::sync::Arc;

use chrono::NaiveDateTime;
use courier_common::config::Config;
use courier_common::store::CityRepository;
use courier_common::time::format_delivery_time;
use courier_core::selector::DriverSelector;
use courier_core::store::InMemoryStore;

use crate::terminal::{format, print};

pub async fn select(
    store: Arc<InMemoryStore>,
    city: &str,
    time: NaiveDateTime,
    cfg: &Config,
) -> anyhow::Result<()> {
    let Some(city) = store.city_by_name(city).await? else {
        anyhow::bail!("unknown city '{city}'");
    };

    let selector = DriverSelector::from_store(store);
    match selector.select_driver(&city, &time).await? {
        Some(driver) => {
            if cfg.quiet < 2 {
                print::aligned_line("Slot", format_delivery_time(&time), 4);
            }
            print::tree_head(0, &driver.name);
            print::as_tree_one_level(format::driver_to_details(&driver));
        }
        None => print::no_results(&format!(
            "No driver available in {city} at {}",
            format_delivery_time(&time)
        )),
    }
    Ok(())
}
