//! Forecast orchestration: one call from raw conditions to hazard level and lead time

pub mod batch;
pub mod forecaster;
pub mod hazard;

pub use batch::{forecast_all_fuel_types, forecast_fuel_types, most_hazardous};
pub use forecaster::{ForecastInput, ForecastResult, Forecaster};
pub use hazard::{decision_support, lead_time_minutes, DecisionSupport, HazardLevel};
