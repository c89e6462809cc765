//! # In-Memory Store
//!
//! Keeps every entity in insertion order behind one `RwLock`. Insertion order
//! is the store order the selector relies on for tie-breaks.
//!
//! Writes validate referential integrity: names are unique per kind, every
//! entity points at a known city, and a driver never gets two deliveries at
//! the same time.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::trace;

use courier_common::error::StoreError;
use courier_common::model::{
    City, Customer, Delivery, DeliveryId, Driver, NewDelivery, Restaurant, validate_distance,
};
use courier_common::store::{
    CityRepository, CustomerRepository, DeliveryRepository, DriverRepository,
    RestaurantRepository,
};

use super::snapshot::Snapshot;

#[derive(Debug, Default)]
struct State {
    cities: Vec<City>,
    drivers: Vec<Driver>,
    customers: Vec<Customer>,
    restaurants: Vec<Restaurant>,
    deliveries: Vec<Delivery>,
    next_id: u64,
}

impl State {
    fn ensure_city(&self, kind: &'static str, name: &str, city: &City) -> Result<(), StoreError> {
        if self.cities.contains(city) {
            Ok(())
        } else {
            Err(StoreError::UnknownCity {
                kind,
                name: name.to_string(),
                city: city.name.clone(),
            })
        }
    }

    fn driver_index(&self, name: &str) -> Option<usize> {
        self.drivers.iter().position(|driver| driver.name == name)
    }

    /// Checks that `delivery` may be added; returns the driver's index.
    fn check_delivery(
        &self,
        driver: &str,
        restaurant: &str,
        customer: &str,
        time: &chrono::NaiveDateTime,
    ) -> Result<usize, StoreError> {
        let idx = self
            .driver_index(driver)
            .ok_or_else(|| StoreError::UnknownDriver(driver.to_string()))?;

        if !self.restaurants.iter().any(|r| r.name == restaurant) {
            return Err(StoreError::UnknownReference {
                kind: "restaurant",
                name: restaurant.to_string(),
            });
        }
        if !self.customers.iter().any(|c| c.name == customer) {
            return Err(StoreError::UnknownReference {
                kind: "customer",
                name: customer.to_string(),
            });
        }

        let double_booked = self
            .deliveries
            .iter()
            .any(|d| d.driver == driver && d.is_scheduled_at(time));
        if double_booked {
            return Err(StoreError::DuplicateDelivery {
                driver: driver.to_string(),
                time: *time,
            });
        }

        Ok(idx)
    }

    fn commit(&mut self, new: NewDelivery) -> Result<Delivery, StoreError> {
        let idx = self.check_delivery(&new.driver, &new.restaurant, &new.customer, &new.delivery_time)?;

        // Credit first: a rejected distance leaves the store untouched.
        self.drivers[idx].update_distance(new.distance)?;

        let delivery = Delivery::from_new(DeliveryId(self.next_id), new);
        self.next_id += 1;
        self.deliveries.push(delivery.clone());
        Ok(delivery)
    }

    /// Adds a historical delivery without touching the driver's distance.
    fn restore(&mut self, delivery: Delivery) -> Result<(), StoreError> {
        validate_distance(delivery.distance)?;
        self.check_delivery(
            &delivery.driver,
            &delivery.restaurant,
            &delivery.customer,
            &delivery.delivery_time,
        )?;
        if self.deliveries.iter().any(|d| d.id == delivery.id) {
            return Err(StoreError::DuplicateEntity {
                kind: "delivery",
                name: delivery.id.to_string(),
            });
        }

        self.next_id = self.next_id.max(delivery.id.0 + 1);
        self.deliveries.push(delivery);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_city(&self, city: City) -> Result<(), StoreError> {
        let mut state = self.write();
        if state.cities.contains(&city) {
            return Err(StoreError::DuplicateEntity {
                kind: "city",
                name: city.name,
            });
        }
        state.cities.push(city);
        Ok(())
    }

    pub fn add_driver(&self, driver: Driver) -> Result<(), StoreError> {
        let mut state = self.write();
        validate_distance(driver.distance())?;
        state.ensure_city("driver", &driver.name, &driver.city)?;
        if state.driver_index(&driver.name).is_some() {
            return Err(StoreError::DuplicateEntity {
                kind: "driver",
                name: driver.name,
            });
        }
        state.drivers.push(driver);
        Ok(())
    }

    pub fn add_customer(&self, customer: Customer) -> Result<(), StoreError> {
        let mut state = self.write();
        state.ensure_city("customer", &customer.name, &customer.city)?;
        if state.customers.iter().any(|c| c.name == customer.name) {
            return Err(StoreError::DuplicateEntity {
                kind: "customer",
                name: customer.name,
            });
        }
        state.customers.push(customer);
        Ok(())
    }

    pub fn add_restaurant(&self, restaurant: Restaurant) -> Result<(), StoreError> {
        let mut state = self.write();
        state.ensure_city("restaurant", &restaurant.name, &restaurant.city)?;
        if state.restaurants.iter().any(|r| r.name == restaurant.name) {
            return Err(StoreError::DuplicateEntity {
                kind: "restaurant",
                name: restaurant.name,
            });
        }
        state.restaurants.push(restaurant);
        Ok(())
    }

    /// Synchronous form of [`DeliveryRepository::commit_delivery`] for seeding.
    pub fn record_delivery(&self, delivery: NewDelivery) -> Result<Delivery, StoreError> {
        self.write().commit(delivery)
    }

    pub fn deliveries_of(&self, driver: &str) -> Vec<Delivery> {
        self.read()
            .deliveries
            .iter()
            .filter(|d| d.driver == driver)
            .cloned()
            .collect()
    }

    pub fn delivery_count(&self) -> usize {
        self.read().deliveries.len()
    }

    /// Builds a store from a snapshot, validating it entity by entity.
    ///
    /// Driver distances are taken as stored. Deliveries do not credit them again.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let store = Self::new();
        for city in snapshot.cities {
            store.add_city(city)?;
        }
        for driver in snapshot.drivers {
            store.add_driver(driver)?;
        }
        for customer in snapshot.customers {
            store.add_customer(customer)?;
        }
        for restaurant in snapshot.restaurants {
            store.add_restaurant(restaurant)?;
        }
        {
            let mut state = store.write();
            for delivery in snapshot.deliveries {
                state.restore(delivery)?;
            }
        }
        Ok(store)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        let state = self.read();
        Snapshot {
            cities: state.cities.clone(),
            drivers: state.drivers.clone(),
            customers: state.customers.clone(),
            restaurants: state.restaurants.clone(),
            deliveries: state.deliveries.clone(),
        }
    }
}

#[async_trait]
impl CityRepository for InMemoryStore {
    async fn city_by_name(&self, name: &str) -> Result<Option<City>, StoreError> {
        Ok(self.read().cities.iter().find(|c| c.name == name).cloned())
    }
}

#[async_trait]
impl DriverRepository for InMemoryStore {
    async fn drivers_in_city(&self, city: &City) -> Result<Vec<Driver>, StoreError> {
        Ok(self
            .read()
            .drivers
            .iter()
            .filter(|driver| driver.works_in(city))
            .cloned()
            .collect())
    }

    async fn all_drivers(&self) -> Result<Vec<Driver>, StoreError> {
        Ok(self.read().drivers.clone())
    }

    async fn driver_by_name(&self, name: &str) -> Result<Option<Driver>, StoreError> {
        let state = self.read();
        Ok(state.driver_index(name).map(|idx| state.drivers[idx].clone()))
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryStore {
    async fn deliveries_for_driver(&self, driver: &Driver) -> Result<Vec<Delivery>, StoreError> {
        Ok(self.deliveries_of(&driver.name))
    }

    async fn commit_delivery(&self, delivery: NewDelivery) -> Result<Delivery, StoreError> {
        let committed = self.write().commit(delivery)?;
        trace!(
            "Committed delivery {} for {} ({:.2})",
            committed.id, committed.driver, committed.distance
        );
        Ok(committed)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn customer_by_name(&self, name: &str) -> Result<Option<Customer>, StoreError> {
        Ok(self.read().customers.iter().find(|c| c.name == name).cloned())
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn restaurant_by_name(&self, name: &str) -> Result<Option<Restaurant>, StoreError> {
        Ok(self.read().restaurants.iter().find(|r| r.name == name).cloned())
    }
}
