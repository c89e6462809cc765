use super::Driver;

/// A ranking report row.
///
/// The total is the driver's accumulated distance truncated toward zero.
/// The driver itself keeps full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDistance {
    driver: Driver,
    total_distance: i64,
}

impl DriverDistance {
    pub fn new(driver: Driver) -> Self {
        let total_distance = driver.distance().trunc() as i64;
        Self {
            driver,
            total_distance,
        }
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }
}
