//! # Order Intake
//!
//! Turns an [`OrderRequest`] into a committed delivery.
//!
//! The process involves:
//! 1. **Resolution**: Looking up the customer and the restaurant.
//! 2. **Validation**: Both must be in the same city, otherwise the order is rejected.
//! 3. **Selection**: Asking the [`DriverSelector`] for a free driver.
//! 4. **Commit**: Estimating the distance and storing the delivery, which also
//!    credits the driver's distance.
//!
//! Steps 3 and 4 run under a per-city lock. Two orders for the same city
//! cannot both see the same driver as free.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use courier_common::error::OrderError;
use courier_common::model::{City, Customer, NewDelivery, Restaurant};
use courier_common::order::{Assignment, OrderRequest};
use courier_common::store::{
    CourierStore, CustomerRepository, DeliveryRepository, RestaurantRepository,
};
use courier_common::time::format_delivery_time;

use crate::distance::DistanceEstimator;
use crate::selector::DriverSelector;

pub struct OrderIntake {
    customers: Arc<dyn CustomerRepository>,
    restaurants: Arc<dyn RestaurantRepository>,
    deliveries: Arc<dyn DeliveryRepository>,
    selector: DriverSelector,
    estimator: Box<dyn DistanceEstimator>,
    city_locks: Mutex<HashMap<City, Arc<tokio::sync::Mutex<()>>>>,
}

impl OrderIntake {
    pub fn new<S>(store: Arc<S>, estimator: Box<dyn DistanceEstimator>) -> Self
    where
        S: CourierStore + 'static,
    {
        Self {
            customers: store.clone(),
            restaurants: store.clone(),
            deliveries: store.clone(),
            selector: DriverSelector::from_store(store),
            estimator,
            city_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Places an order and assigns it to the least busy free driver.
    ///
    /// # Errors
    /// * [`OrderError::UnknownCustomer`] / [`OrderError::UnknownRestaurant`]
    /// * [`OrderError::CityMismatch`] when the two are in different cities.
    /// * [`OrderError::Store`] when the store fails or refuses the commit.
    ///
    /// A city with no free driver is not an error: it yields
    /// [`Assignment::NoDriverAvailable`].
    pub async fn place_order(&self, request: &OrderRequest) -> Result<Assignment, OrderError> {
        let customer = self
            .customers
            .customer_by_name(&request.customer)
            .await?
            .ok_or_else(|| OrderError::UnknownCustomer(request.customer.clone()))?;

        let restaurant = self
            .restaurants
            .restaurant_by_name(&request.restaurant)
            .await?
            .ok_or_else(|| OrderError::UnknownRestaurant(request.restaurant.clone()))?;

        if let Err(err) = ensure_same_city(&customer, &restaurant) {
            warn!("Rejected order from {} for {}: {err}", restaurant.name, customer.name);
            return Err(err);
        }

        let city = customer.city.clone();
        let time = request.delivery_time;

        let lock = self.city_lock(&city);
        let _guard = lock.lock().await;

        let Some(driver) = self.selector.select_driver(&city, &time).await? else {
            warn!(
                "No driver available in {city} at {}",
                format_delivery_time(&time)
            );
            return Ok(Assignment::NoDriverAvailable { city, time });
        };

        let distance = self.estimator.estimate(&restaurant, &customer);
        let delivery = self
            .deliveries
            .commit_delivery(NewDelivery {
                driver: driver.name,
                restaurant: restaurant.name,
                customer: customer.name,
                delivery_time: time,
                distance,
            })
            .await?;

        info!(
            "Delivery {} assigned to {} at {}",
            delivery.id,
            delivery.driver,
            format_delivery_time(&delivery.delivery_time)
        );
        Ok(Assignment::Assigned(delivery))
    }

    fn city_lock(&self, city: &City) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.city_locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(city.clone()).or_default().clone()
    }
}

/// Orders never cross cities.
pub fn ensure_same_city(customer: &Customer, restaurant: &Restaurant) -> Result<(), OrderError> {
    if customer.city == restaurant.city {
        Ok(())
    } else {
        Err(OrderError::CityMismatch {
            customer_city: customer.city.name.clone(),
            restaurant_city: restaurant.city.name.clone(),
        })
    }
}
