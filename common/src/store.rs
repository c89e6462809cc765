//! # Store Ports
//!
//! The contracts the dispatch core needs from a data store.
//!
//! ## Rules
//! 1. Everything here is a trait. Implementations live in `courier-core`.
//! 2. Sequences are returned in store order. The selector's tie-break depends
//!    on [`DriverRepository::drivers_in_city`] returning a stable order.
//! 3. An empty result is `Ok(vec![])` or `Ok(None)`, never an error.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{City, Customer, Delivery, Driver, NewDelivery, Restaurant};

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn city_by_name(&self, name: &str) -> Result<Option<City>, StoreError>;
}

#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Drivers working in `city`, in store order.
    async fn drivers_in_city(&self, city: &City) -> Result<Vec<Driver>, StoreError>;

    async fn all_drivers(&self) -> Result<Vec<Driver>, StoreError>;

    async fn driver_by_name(&self, name: &str) -> Result<Option<Driver>, StoreError>;
}

#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Full delivery history of `driver`.
    async fn deliveries_for_driver(&self, driver: &Driver) -> Result<Vec<Delivery>, StoreError>;

    /// Stores `delivery` and adds its distance to the driver's total as one step.
    ///
    /// # Errors
    /// * [`StoreError::DuplicateDelivery`] if the driver already has a delivery
    ///   at the same time. Nothing is written in that case.
    /// * [`StoreError::UnknownDriver`] if the driver does not exist.
    async fn commit_delivery(&self, delivery: NewDelivery) -> Result<Delivery, StoreError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn customer_by_name(&self, name: &str) -> Result<Option<Customer>, StoreError>;
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn restaurant_by_name(&self, name: &str) -> Result<Option<Restaurant>, StoreError>;
}

/// A store that serves every repository.
pub trait CourierStore:
    CityRepository + DriverRepository + DeliveryRepository + CustomerRepository + RestaurantRepository
{
}

impl<T> CourierStore for T where
    T: CityRepository
        + DriverRepository
        + DeliveryRepository
        + CustomerRepository
        + RestaurantRepository
{
}
