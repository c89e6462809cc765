//! Distance of a new delivery.
//!
//! Routing is out of scope. The estimate is an opaque number the core only
//! stores and adds up.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use courier_common::error::ModelError;
use courier_common::model::{Customer, Restaurant, validate_distance};

pub trait DistanceEstimator: Send + Sync {
    fn estimate(&self, restaurant: &Restaurant, customer: &Customer) -> f64;
}

/// Uniformly random distance in `[0, max_distance)`.
pub struct RandomDistance {
    max_distance: f64,
    rng: Mutex<StdRng>,
}

impl RandomDistance {
    pub fn new(max_distance: f64, seed: Option<u64>) -> Result<Self, ModelError> {
        if validate_distance(max_distance)? == 0.0 {
            return Err(ModelError::InvalidDistance(max_distance));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            max_distance,
            rng: Mutex::new(rng),
        })
    }
}

impl DistanceEstimator for RandomDistance {
    fn estimate(&self, _restaurant: &Restaurant, _customer: &Customer) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0.0..self.max_distance)
    }
}

/// Same distance for every delivery.
#[derive(Debug, Clone, Copy)]
pub struct FixedDistance(pub f64);

impl DistanceEstimator for FixedDistance {
    fn estimate(&self, _restaurant: &Restaurant, _customer: &Customer) -> f64 {
        self.0
    }
}
