//! # Distance Ranking
//!
//! Reports drivers by accumulated distance, longest first. The sort is stable
//! so drivers with equal distances keep their input order. Sorting uses the
//! full-precision distance; only the reported total is truncated.

use std::sync::Arc;

use tracing::debug;

use courier_common::error::StoreError;
use courier_common::model::{City, Driver, DriverDistance};
use courier_common::store::DriverRepository;

/// Ranks `drivers` by distance, descending.
pub fn rank_by_distance(mut drivers: Vec<Driver>) -> Vec<DriverDistance> {
    drivers.sort_by(|a, b| b.distance().total_cmp(&a.distance()));
    drivers.into_iter().map(DriverDistance::new).collect()
}

pub struct RankingEngine {
    drivers: Arc<dyn DriverRepository>,
}

impl RankingEngine {
    pub fn new(drivers: Arc<dyn DriverRepository>) -> Self {
        Self { drivers }
    }

    /// Ranking of every driver in the store.
    pub async fn rank_all(&self) -> Result<Vec<DriverDistance>, StoreError> {
        let drivers = self.drivers.all_drivers().await?;
        debug!("Ranking {} drivers", drivers.len());
        Ok(rank_by_distance(drivers))
    }

    /// Ranking of the drivers working in `city`. Unknown cities rank nobody.
    pub async fn rank_by_distance_in_city(
        &self,
        city: &City,
    ) -> Result<Vec<DriverDistance>, StoreError> {
        let drivers = self.drivers.drivers_in_city(city).await?;
        debug!("Ranking {} drivers in {city}", drivers.len());
        Ok(rank_by_distance(drivers))
    }
}
