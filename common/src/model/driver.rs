use serde::{Deserialize, Serialize};

use super::City;
use super::delivery::validate_distance;
use crate::error::ModelError;

/// A driver working in a single city.
///
/// `distance` is the total distance of every delivery assigned to the driver.
/// It starts at zero and only ever grows through [`Driver::update_distance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub city: City,
    #[serde(default)]
    distance: f64,
}

impl Driver {
    pub fn new(name: impl Into<String>, city: City) -> Self {
        Self {
            name: name.into(),
            city,
            distance: 0.0,
        }
    }

    /// Restores a driver with an already accumulated distance (e.g. from a snapshot).
    pub fn with_distance(
        name: impl Into<String>,
        city: City,
        distance: f64,
    ) -> Result<Self, ModelError> {
        let mut driver = Self::new(name, city);
        driver.update_distance(distance)?;
        Ok(driver)
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Adds `delta` to the accumulated distance.
    pub fn update_distance(&mut self, delta: f64) -> Result<(), ModelError> {
        self.distance += validate_distance(delta)?;
        Ok(())
    }

    pub fn works_in(&self, city: &City) -> bool {
        &self.city == city
    }
}
