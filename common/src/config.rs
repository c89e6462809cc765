use std::path::PathBuf;

/// Upper bound of the randomly estimated distance of a single delivery.
pub const DEFAULT_MAX_DISTANCE: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct Config {
    /// Reduces terminal output. `1` hides headers, `2` prints results only.
    pub quiet: u8,
    /// Exclusive upper bound for the distance estimator.
    pub max_distance: f64,
    /// Seeds the distance estimator so runs can be reproduced.
    pub seed: Option<u64>,
    /// JSON snapshot to load instead of the built-in demo data.
    pub dataset: Option<PathBuf>,
    /// Writes the updated snapshot back to `dataset` after a command.
    pub save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            max_distance: DEFAULT_MAX_DISTANCE,
            seed: None,
            dataset: None,
            save: false,
        }
    }
}
