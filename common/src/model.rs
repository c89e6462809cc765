//! # Domain Models
//!
//! Every entity is identified by its name, except deliveries which get a
//! sequential id from the store. Entities reference each other by name so
//! they can be stored and serialized independently.
//!
//! ## Entities
//! * [`city::City`]: The unit of dispatch. Orders never cross cities.
//! * [`driver::Driver`]: Works in one city and accumulates driven distance.
//! * [`customer::Customer`] and [`restaurant::Restaurant`]: The two ends of an order.
//! * [`delivery::Delivery`]: One driver, one restaurant, one customer, one time slot.
//!
//! ## Projections
//! * [`ranking::DriverDistance`]: A driver paired with its truncated total distance.

pub mod city;
pub mod customer;
pub mod delivery;
pub mod driver;
pub mod ranking;
pub mod restaurant;

pub use city::City;
pub use customer::Customer;
pub use delivery::{Delivery, DeliveryId, NewDelivery, validate_distance};
pub use driver::Driver;
pub use ranking::DriverDistance;
pub use restaurant::Restaurant;
