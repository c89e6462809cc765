//! # Error Types
//!
//! Failures are split by who raises them:
//!
//! * [`ModelError`]: an entity was asked to take an invalid value.
//! * [`StoreError`]: a repository could not satisfy a query or a commit.
//! * [`OrderError`]: order intake refused or failed to place an order.
//! * [`TimeParseError`]: a delivery time string could not be read.
//!
//! "No driver available" and "empty report" are not errors. They are normal
//! return values of the selector and the ranking engine.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::time::format_delivery_time;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Distances are added to a running total and must be finite and non-negative.
    #[error("invalid distance {0}: must be a finite, non-negative number")]
    InvalidDistance(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A driver already has a delivery scheduled at this exact time.
    #[error("driver '{driver}' already has a delivery at {}", format_delivery_time(.time))]
    DuplicateDelivery { driver: String, time: NaiveDateTime },

    #[error("unknown driver '{0}'")]
    UnknownDriver(String),

    #[error("duplicate {kind} '{name}'")]
    DuplicateEntity { kind: &'static str, name: String },

    #[error("{kind} '{name}' refers to unknown city '{city}'")]
    UnknownCity {
        kind: &'static str,
        name: String,
        city: String,
    },

    #[error("delivery refers to unknown {kind} '{name}'")]
    UnknownReference { kind: &'static str, name: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("unknown customer '{0}'")]
    UnknownCustomer(String),

    #[error("unknown restaurant '{0}'")]
    UnknownRestaurant(String),

    /// The customer and the restaurant are in different cities.
    #[error("customer city '{customer_city}' is not the restaurant city '{restaurant_city}'")]
    CityMismatch {
        customer_city: String,
        restaurant_city: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid delivery time '{input}': expected 'dd-mm-yyyy HH:MM' or 'yyyy-mm-ddTHH:MM'")]
pub struct TimeParseError {
    pub input: String,
}
