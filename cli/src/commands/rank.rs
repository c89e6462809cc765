use std::sync::Arc;

use courier_common::config::Config;
use courier_common::store::CityRepository;
use courier_core::ranking::RankingEngine;
use courier_core::store::InMemoryStore;

use crate::terminal::{format, print};

pub async fn rank(
    store: Arc<InMemoryStore>,
    city: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let engine = RankingEngine::new(store.clone());

    let report = match city {
        Some(name) => {
            // An unknown city is a typo here, not an empty city.
            let Some(city) = store.city_by_name(name).await? else {
                anyhow::bail!("unknown city '{name}'");
            };
            engine.rank_by_distance_in_city(&city).await?
        }
        None => engine.rank_all().await?,
    };

    if report.is_empty() {
        print::no_results("No drivers to rank");
        return Ok(());
    }

    let name_width: usize = report
        .iter()
        .map(|row| row.driver().name.chars().count())
        .max()
        .unwrap_or(0);

    for (idx, row) in report.iter().enumerate() {
        print::print(&format::ranking_row(idx + 1, row, name_width));
    }

    if cfg.quiet == 0 {
        let total: i64 = report.iter().map(|row| row.total_distance()).sum();
        print::aligned_line("Drivers", report.len().to_string(), 7);
        print::aligned_line("Total", total.to_string(), 7);
    }
    Ok(())
}
