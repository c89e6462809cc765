//! # Driver Selection
//!
//! A driver is *available* for a time slot when none of their deliveries is
//! scheduled at exactly that time. Among available drivers the one with the
//! fewest deliveries overall wins. Equal counts keep the driver that came
//! first in the store's by-city order.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use courier_common::error::StoreError;
use courier_common::model::{City, Delivery, Driver};
use courier_common::store::{CourierStore, DeliveryRepository, DriverRepository};
use courier_common::time::format_delivery_time;

pub struct DriverSelector {
    drivers: Arc<dyn DriverRepository>,
    deliveries: Arc<dyn DeliveryRepository>,
}

impl DriverSelector {
    pub fn new(drivers: Arc<dyn DriverRepository>, deliveries: Arc<dyn DeliveryRepository>) -> Self {
        Self {
            drivers,
            deliveries,
        }
    }

    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CourierStore + 'static,
    {
        Self::new(store.clone(), store)
    }

    /// Returns the least busy driver in `city` that is free at `requested_time`.
    ///
    /// `Ok(None)` means nobody is free, including when the city has no drivers.
    pub async fn select_driver(
        &self,
        city: &City,
        requested_time: &NaiveDateTime,
    ) -> Result<Option<Driver>, StoreError> {
        let candidates = self.available_drivers(city, requested_time).await?;
        let chosen = least_busy(candidates);

        match &chosen {
            Some(driver) => debug!("Selected {} in {city}", driver.name),
            None => debug!(
                "No driver free in {city} at {}",
                format_delivery_time(requested_time)
            ),
        }
        Ok(chosen)
    }

    /// Free drivers of `city` with their delivery counts, in by-city order.
    async fn available_drivers(
        &self,
        city: &City,
        requested_time: &NaiveDateTime,
    ) -> Result<Vec<(Driver, usize)>, StoreError> {
        let drivers = self.drivers.drivers_in_city(city).await?;
        let mut available = Vec::with_capacity(drivers.len());

        for driver in drivers {
            let history = self.deliveries.deliveries_for_driver(&driver).await?;
            match busyness(&history, requested_time) {
                Some(count) => {
                    debug!("{} is free ({count} deliveries so far)", driver.name);
                    available.push((driver, count));
                }
                None => debug!("{} is busy at the requested time", driver.name),
            }
        }
        Ok(available)
    }
}

/// Size of `history`, or `None` when a delivery in it is scheduled at `time`.
pub fn busyness(history: &[Delivery], time: &NaiveDateTime) -> Option<usize> {
    if history.iter().any(|delivery| delivery.is_scheduled_at(time)) {
        None
    } else {
        Some(history.len())
    }
}

/// Minimum by count. Only a strictly smaller count replaces the incumbent.
pub fn least_busy(candidates: Vec<(Driver, usize)>) -> Option<Driver> {
    candidates
        .into_iter()
        .fold(None, |best: Option<(Driver, usize)>, (driver, count)| match best {
            Some((incumbent, min)) if min <= count => Some((incumbent, min)),
            _ => Some((driver, count)),
        })
        .map(|(driver, _)| driver)
}
