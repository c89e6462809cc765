use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Accepts finite, non-negative distances.
pub fn validate_distance(distance: f64) -> Result<f64, ModelError> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(distance)
    } else {
        Err(ModelError::InvalidDistance(distance))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryId(pub u64);

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A delivery that has been decided on but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub driver: String,
    pub restaurant: String,
    pub customer: String,
    pub delivery_time: NaiveDateTime,
    pub distance: f64,
}

/// A stored delivery. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub driver: String,
    pub restaurant: String,
    pub customer: String,
    pub delivery_time: NaiveDateTime,
    pub distance: f64,
}

impl Delivery {
    pub fn from_new(id: DeliveryId, new: NewDelivery) -> Self {
        Self {
            id,
            driver: new.driver,
            restaurant: new.restaurant,
            customer: new.customer,
            delivery_time: new.delivery_time,
            distance: new.distance,
        }
    }

    pub fn is_scheduled_at(&self, time: &NaiveDateTime) -> bool {
        &self.delivery_time == time
    }
}
