//! Rapid Spread Forecast Core
//!
//! Estimates the probability that a Mediterranean wildfire undergoes rapid, hazardous spread
//! within the next 60-180 minutes from nine fuel, weather and terrain parameters.
//!
//! ## Pipeline
//!
//! 1. Normalize raw parameters onto a hazard-aligned [0, 1] scale
//! 2. Combine them into the Rapid Spread Index with fuel-specific weights
//! 3. Score confidence from completeness and plausibility
//! 4. Calibrate RSI and confidence into a probability (quadratic logistic)
//! 5. Estimate surface rate of spread, hazard level and warning lead time
//!
//! Everything is synchronous and side-effect free; coefficient tables are compile-time
//! constants shared by every [`Forecaster`].

// Core types and utilities
pub mod core_types;
pub mod error;

// Forecast pipeline
pub mod forecast;
pub mod integration;
pub mod parameters;
pub mod physics;
pub mod validation;

// Re-export core types
pub use core_types::{FuelProfile, FuelType, ParameterKey, RawParameters};
pub use error::ForecastError;

// Re-export forecast types
pub use forecast::{
    forecast_all_fuel_types, DecisionSupport, ForecastInput, ForecastResult, Forecaster,
    HazardLevel,
};
pub use integration::{ConfidenceCategory, ConfidenceEstimator};
