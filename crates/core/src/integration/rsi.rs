//! Rapid Spread Index (RSI)
//!
//! ```text
//! RSI = Σ(αᵢ · Nᵢ) / Σ(αᵢ)
//! ```
//!
//! Both sums run over the parameters that are present in the normalized map. Omitting a
//! parameter therefore re-weights the remaining ones instead of pulling the index down.

use crate::core_types::fuel::{FuelType, RsiWeights};
use crate::core_types::parameters::{NormalizedParameters, ParameterContributions};

/// RSI reported when no parameter carries weight: indeterminate, not zero-hazard
pub const NEUTRAL_RSI: f64 = 0.5;

/// Weighted-average index over normalized parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiCalculator {
    weights: RsiWeights,
}

impl RsiCalculator {
    /// Calculator with the fuel type's weight table
    pub fn new(fuel_type: FuelType) -> Self {
        Self::with_weights(fuel_type.profile().rsi_weights)
    }

    /// Calculator for a free-form fuel identifier, falling back to Aleppo pine weights
    pub fn for_identifier(identifier: &str) -> Self {
        Self::new(FuelType::resolve(identifier))
    }

    /// Calculator with custom weights
    pub fn with_weights(weights: RsiWeights) -> Self {
        Self { weights }
    }

    /// Weight table in use
    pub fn weights(&self) -> &RsiWeights {
        &self.weights
    }

    /// Rapid Spread Index in [0, 1]
    pub fn calculate_rsi(&self, normalized: &NormalizedParameters) -> f64 {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (key, value) in normalized.iter() {
            let weight = self.weights.weight(key);
            weighted_sum += weight * value;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            (weighted_sum / total_weight).clamp(0.0, 1.0)
        } else {
            NEUTRAL_RSI
        }
    }

    /// Each parameter's `weight·value / RSI`; empty when the RSI is zero
    pub fn parameter_contributions(
        &self,
        normalized: &NormalizedParameters,
    ) -> ParameterContributions {
        let mut contributions = ParameterContributions::default();
        let rsi = self.calculate_rsi(normalized);
        if rsi <= 0.0 {
            return contributions;
        }

        for (key, value) in normalized.iter() {
            contributions.insert(key, self.weights.weight(key) * value / rsi);
        }
        contributions
    }
}
