//! Surface Rate of Spread (Mediterranean linear calibration)
//!
//! A reduced Rothermel-style model: the full reaction-intensity formulation collapses to a
//! per-fuel linear response in wind and dead fuel moisture, with a linear slope factor.
//!
//! ```text
//! ROS = max(1.0, (a + b·U − c·M) × (1 + 0.05·θ))
//! ```
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.

use crate::core_types::fuel::{BaseRosModel, FuelType};

/// Spread-rate gain per degree of slope
pub const SLOPE_FACTOR_PER_DEG: f64 = 0.05;

/// A fire is modeled as always creeping at least this fast (m/min)
pub const MIN_RATE_OF_SPREAD: f64 = 1.0;

/// Calculate surface rate of spread (m/min)
///
/// # Arguments
/// * `fuel_moisture` - Dead fuel moisture (%)
/// * `wind_speed` - Wind speed (m/s)
/// * `slope` - Terrain slope (degrees)
/// * `model` - Base linear model for the fuel
///
/// # Returns
/// Rate of spread in meters per minute, never below [`MIN_RATE_OF_SPREAD`]
pub fn calculate_rate_of_spread(
    fuel_moisture: f64,
    wind_speed: f64,
    slope: f64,
    model: &BaseRosModel,
) -> f64 {
    let base = model.base_rate(fuel_moisture, wind_speed);
    let ros = base * (1.0 + slope * SLOPE_FACTOR_PER_DEG);

    if ros.is_nan() {
        return MIN_RATE_OF_SPREAD;
    }
    ros.max(MIN_RATE_OF_SPREAD)
}

/// Rate-of-spread model bound to one fuel's base coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadRateModel {
    base: BaseRosModel,
}

impl SpreadRateModel {
    /// Spread model with the fuel type's own coefficients
    pub fn new(fuel_type: FuelType) -> Self {
        Self {
            base: fuel_type.profile().base_ros,
        }
    }

    /// Model for a free-form identifier; unknown fuels get [`BaseRosModel::GENERIC`]
    pub fn for_identifier(identifier: &str) -> Self {
        Self {
            base: BaseRosModel::for_identifier(identifier),
        }
    }

    /// Base linear model in use
    pub fn base(&self) -> &BaseRosModel {
        &self.base
    }

    /// Rate of spread (m/min) for this fuel; see [`calculate_rate_of_spread`]
    pub fn calculate_rate_of_spread(&self, fuel_moisture: f64, wind_speed: f64, slope: f64) -> f64 {
        calculate_rate_of_spread(fuel_moisture, wind_speed, slope, &self.base)
    }
}
