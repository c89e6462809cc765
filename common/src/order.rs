use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{City, Delivery};

/// A request to deliver from `restaurant` to `customer` at `delivery_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: String,
    pub restaurant: String,
    pub delivery_time: NaiveDateTime,
}

/// Outcome of a valid order.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    Assigned(Delivery),
    /// Every driver in the city is busy at that time, or the city has none.
    NoDriverAvailable { city: City, time: NaiveDateTime },
}

impl Assignment {
    pub fn delivery(&self) -> Option<&Delivery> {
        match self {
            Assignment::Assigned(delivery) => Some(delivery),
            Assignment::NoDriverAvailable { .. } => None,
        }
    }
}
