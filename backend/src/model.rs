//! Fire risk model
//!
//! A standardize-then-score classifier over the four measurements:
//! each feature is z-scored with the scaler statistics from the offline
//! training run on the Algerian forest fires dataset, then pushed through
//! a logistic fit. Parameters are embedded so the service has no model
//! artifacts to load at startup.

use shared::{PredictionInput, FIRE_LABEL, NO_FIRE_LABEL};

/// Feature order on the wire and in the parameter arrays: temp, rh, ws, rain
const FEATURES: usize = 4;

/// Embedded classifier with scaler statistics
#[derive(Debug, Clone)]
pub struct FireModel {
    means: [f64; FEATURES],
    stds: [f64; FEATURES],
    weights: [f64; FEATURES],
    bias: f64,
}

impl FireModel {
    /// Parameters exported from the offline training run
    pub fn new() -> Self {
        Self {
            means: [32.15, 62.04, 15.50, 0.76],
            stds: [3.63, 14.83, 2.81, 2.00],
            weights: [1.6, -1.1, 0.3, -2.3],
            bias: 0.6,
        }
    }

    /// Probability of the fire class, in [0, 1]
    pub fn probability(&self, input: &PredictionInput) -> f64 {
        let features = [input.temp, input.rh, input.ws, input.rain];
        let mut z = self.bias;
        for i in 0..FEATURES {
            z += self.weights[i] * (features[i] - self.means[i]) / self.stds[i];
        }
        1.0 / (1.0 + (-z).exp())
    }

    /// Binary classification at the 0.5 threshold
    pub fn predict(&self, input: &PredictionInput) -> &'static str {
        if self.probability(input) >= 0.5 {
            FIRE_LABEL
        } else {
            NO_FIRE_LABEL
        }
    }
}

impl Default for FireModel {
    fn default() -> Self {
        Self::new()
    }
}
