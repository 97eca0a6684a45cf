//! Rapid spread forecaster
//!
//! Composes the pipeline for one fuel type:
//!
//! ```text
//! raw → normalize → RSI ─┐
//!   └──→ confidence ─────┴→ calibrated P → hazard level, lead time
//! dfm, wind, slope ──────→ rate of spread
//! ```
//!
//! A forecaster holds only immutable coefficient tables, so `predict` is a pure function of
//! its input and instances can be shared freely across threads.

use serde::{Deserialize, Serialize};

use crate::core_types::fuel::FuelType;
use crate::core_types::parameters::{
    NormalizedParameters, ParameterContributions, ParameterKey, RawParameters,
};
use crate::error::ForecastError;
use crate::forecast::hazard::{lead_time_minutes, DecisionSupport, HazardLevel};
use crate::integration::{
    normalize_parameters, ConfidenceCategory, ConfidenceEstimator, ProbabilityCalibrator,
    RsiCalculator,
};
use crate::physics::spread_rate::SpreadRateModel;

/// Dead fuel moisture assumed for spread rate when `dfm` is absent (%)
pub const DEFAULT_SPREAD_FUEL_MOISTURE: f64 = 15.0;

/// Wind speed assumed for spread rate when `wind_speed` is absent (m/s)
pub const DEFAULT_SPREAD_WIND_SPEED: f64 = 5.0;

/// Forecast input: the nine optional parameters plus slope
///
/// Deserializes from the same keys the raw parameter map uses; `slope` defaults to flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastInput {
    pub lfm: Option<f64>,
    pub dfm: Option<f64>,
    pub cbd: Option<f64>,
    pub sfl: Option<f64>,
    pub fbd: Option<f64>,
    pub wind_speed: Option<f64>,
    pub vpd: Option<f64>,
    pub aspect: Option<f64>,
    pub drought_code: Option<f64>,
    /// Terrain slope (degrees), used only for rate of spread
    pub slope: f64,
}

impl ForecastInput {
    fn value(&self, key: ParameterKey) -> Option<f64> {
        match key {
            ParameterKey::Lfm => self.lfm,
            ParameterKey::Dfm => self.dfm,
            ParameterKey::Cbd => self.cbd,
            ParameterKey::Sfl => self.sfl,
            ParameterKey::Fbd => self.fbd,
            ParameterKey::WindSpeed => self.wind_speed,
            ParameterKey::Vpd => self.vpd,
            ParameterKey::Aspect => self.aspect,
            ParameterKey::DroughtCode => self.drought_code,
        }
    }

    /// Collect the present parameters
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteParameter`] if any present value is NaN or infinite.
    pub fn raw_parameters(&self) -> Result<RawParameters, ForecastError> {
        let mut raw = RawParameters::new();
        for key in ParameterKey::ALL {
            if let Some(value) = self.value(key) {
                raw.set(key, value)?;
            }
        }
        Ok(raw)
    }
}

/// Result of one forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub fuel_type: FuelType,
    /// Calibrated probability of rapid spread in [0, 1]
    pub probability: f64,
    /// Forecast confidence in [0.2, 0.9]
    pub confidence: f64,
    pub confidence_category: ConfidenceCategory,
    /// Rapid Spread Index in [0, 1]
    pub rsi: f64,
    /// Surface rate of spread (m/min), at least 1.0
    pub rate_of_spread: f64,
    pub hazard_level: HazardLevel,
    pub lead_time_minutes: u32,
    pub parameter_contributions: ParameterContributions,
    /// Raw parameters used
    pub parameters: RawParameters,
    pub normalized_parameters: NormalizedParameters,
}

impl ForecastResult {
    /// Recommended action and public message for the hazard level
    pub fn decision_support(&self) -> DecisionSupport {
        self.hazard_level.decision_support()
    }
}

/// Forecasting engine for one fuel type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecaster {
    fuel_type: FuelType,
    rsi_calculator: RsiCalculator,
    calibrator: ProbabilityCalibrator,
    confidence_estimator: ConfidenceEstimator,
    spread_model: SpreadRateModel,
}

impl Forecaster {
    /// Forecaster with the fuel type's tables and default confidence
    pub fn new(fuel_type: FuelType) -> Self {
        Self {
            fuel_type,
            rsi_calculator: RsiCalculator::new(fuel_type),
            calibrator: ProbabilityCalibrator::new(fuel_type),
            confidence_estimator: ConfidenceEstimator::default(),
            spread_model: SpreadRateModel::new(fuel_type),
        }
    }

    /// Forecaster for a free-form fuel identifier
    ///
    /// An unknown identifier gets the Aleppo pine RSI weights and calibration but the generic
    /// spread-rate model. The two fallbacks are intentionally different.
    pub fn for_identifier(identifier: &str) -> Self {
        let fuel_type = FuelType::resolve(identifier);
        Self {
            spread_model: SpreadRateModel::for_identifier(identifier),
            ..Self::new(fuel_type)
        }
    }

    /// Replace the confidence estimator (e.g. to inject a model-uncertainty score)
    pub fn with_confidence_estimator(mut self, estimator: ConfidenceEstimator) -> Self {
        self.confidence_estimator = estimator;
        self
    }

    /// Fuel type whose tables are in use
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// RSI stage
    pub fn rsi_calculator(&self) -> &RsiCalculator {
        &self.rsi_calculator
    }

    /// Calibration stage
    pub fn calibrator(&self) -> &ProbabilityCalibrator {
        &self.calibrator
    }

    /// Spread-rate stage
    pub fn spread_model(&self) -> &SpreadRateModel {
        &self.spread_model
    }

    /// Predict rapid spread probability and derived metrics
    ///
    /// # Errors
    /// Returns an error only for NaN or infinite inputs.
    pub fn predict(&self, input: &ForecastInput) -> Result<ForecastResult, ForecastError> {
        let raw = input.raw_parameters()?;
        self.predict_parameters(&raw, input.slope)
    }

    /// Predict from an already validated parameter map
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteSlope`] if `slope` is NaN or infinite.
    pub fn predict_parameters(
        &self,
        raw: &RawParameters,
        slope: f64,
    ) -> Result<ForecastResult, ForecastError> {
        if !slope.is_finite() {
            return Err(ForecastError::NonFiniteSlope(slope));
        }

        let normalized = normalize_parameters(raw);
        let rsi = self.rsi_calculator.calculate_rsi(&normalized);
        let confidence = self.confidence_estimator.estimate(raw);
        let probability = self.calibrator.calibrate_probability(rsi, confidence);

        let rate_of_spread = self.spread_model.calculate_rate_of_spread(
            raw.get(ParameterKey::Dfm)
                .unwrap_or(DEFAULT_SPREAD_FUEL_MOISTURE),
            raw.get(ParameterKey::WindSpeed)
                .unwrap_or(DEFAULT_SPREAD_WIND_SPEED),
            slope,
        );

        let hazard_level = HazardLevel::from_probability(probability);
        let lead_time_minutes = lead_time_minutes(probability);
        let parameter_contributions = self.rsi_calculator.parameter_contributions(&normalized);

        tracing::debug!(
            fuel = %self.fuel_type,
            parameters = raw.len(),
            rsi,
            confidence,
            probability,
            rate_of_spread,
            hazard = %hazard_level,
            "Rapid spread forecast"
        );

        Ok(ForecastResult {
            fuel_type: self.fuel_type,
            probability,
            confidence,
            confidence_category: ConfidenceCategory::from_confidence(confidence),
            rsi,
            rate_of_spread,
            hazard_level,
            lead_time_minutes,
            parameter_contributions,
            parameters: raw.clone(),
            normalized_parameters: normalized,
        })
    }

    /// Decision support for a probability
    pub fn get_decision_support(&self, probability: f64) -> DecisionSupport {
        HazardLevel::from_probability(probability).decision_support()
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Forecaster::new(FuelType::FALLBACK)
    }
}
