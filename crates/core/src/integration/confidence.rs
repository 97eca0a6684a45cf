//! Forecast confidence from data completeness and plausibility
//!
//! ```text
//! raw        = 0.5·completeness + 0.3·quality + 0.2·model_uncertainty
//! confidence = clip(0.4 + 0.4·raw, 0.2, 0.9)
//! ```
//!
//! The affine rescale keeps confidence in an operational 0.4-0.8 band; completeness and range
//! checks alone never justify near-certain or near-worthless forecasts.

use serde::{Deserialize, Serialize};

use crate::core_types::parameters::{ParameterKey, RawParameters};
use crate::error::ForecastError;

/// Default model-uncertainty score until a data-driven estimate exists
pub const DEFAULT_MODEL_UNCERTAINTY: f64 = 0.7;

/// Hard bounds on the final confidence score
pub const MIN_CONFIDENCE: f64 = 0.2;
pub const MAX_CONFIDENCE: f64 = 0.9;

const COMPLETENESS_WEIGHT: f64 = 0.5;
const QUALITY_WEIGHT: f64 = 0.3;
const MODEL_WEIGHT: f64 = 0.2;

const BASE_QUALITY: f64 = 0.8;
const MIN_QUALITY: f64 = 0.4;
const QUALITY_PENALTY: f64 = 0.2;

/// Physically plausible bands; values outside cost [`QUALITY_PENALTY`] each
const PLAUSIBLE_RANGES: [(ParameterKey, f64, f64); 3] = [
    (ParameterKey::Lfm, 30.0, 200.0),
    (ParameterKey::Dfm, 1.0, 30.0),
    (ParameterKey::WindSpeed, 0.0, 40.0),
];

/// Parameters a forecast always needs; canopy bulk density joins them when supplied
const CORE_REQUIRED: [ParameterKey; 3] = [
    ParameterKey::Lfm,
    ParameterKey::Dfm,
    ParameterKey::WindSpeed,
];

/// Scores forecast trustworthiness in [0.2, 0.9]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEstimator {
    model_uncertainty: f64,
}

impl Default for ConfidenceEstimator {
    fn default() -> Self {
        Self {
            model_uncertainty: DEFAULT_MODEL_UNCERTAINTY,
        }
    }
}

impl ConfidenceEstimator {
    /// Estimator with [`DEFAULT_MODEL_UNCERTAINTY`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the model-uncertainty score (clipped to [0, 1])
    ///
    /// # Errors
    /// Returns [`ForecastError::NonFiniteModelUncertainty`] for NaN or infinite scores.
    pub fn with_model_uncertainty(model_uncertainty: f64) -> Result<Self, ForecastError> {
        if !model_uncertainty.is_finite() {
            return Err(ForecastError::NonFiniteModelUncertainty(model_uncertainty));
        }
        Ok(Self {
            model_uncertainty: model_uncertainty.clamp(0.0, 1.0),
        })
    }

    /// Model-uncertainty score blended into the estimate
    pub fn model_uncertainty(&self) -> f64 {
        self.model_uncertainty
    }

    /// Fraction of required parameters present
    ///
    /// Supplying `cbd` adds it to the required set, so a canopy-aware forecast is judged
    /// against the stricter bar.
    pub fn completeness(&self, params: &RawParameters) -> f64 {
        let cbd_required = params.contains(ParameterKey::Cbd);
        let required = CORE_REQUIRED.len() + usize::from(cbd_required);
        let present = CORE_REQUIRED
            .iter()
            .filter(|&&key| params.contains(key))
            .count()
            + usize::from(cbd_required);
        present as f64 / required as f64
    }

    /// Range-plausibility score in [0.4, 0.8]
    pub fn quality(&self, params: &RawParameters) -> f64 {
        let implausible = PLAUSIBLE_RANGES
            .iter()
            .filter(|(key, min, max)| {
                params
                    .get(*key)
                    .is_some_and(|value| value < *min || value > *max)
            })
            .count();
        (BASE_QUALITY - QUALITY_PENALTY * implausible as f64).max(MIN_QUALITY)
    }

    /// Overall forecast confidence
    pub fn estimate(&self, params: &RawParameters) -> f64 {
        let raw = COMPLETENESS_WEIGHT * self.completeness(params)
            + QUALITY_WEIGHT * self.quality(params)
            + MODEL_WEIGHT * self.model_uncertainty;
        (0.4 + raw * 0.4).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}

/// Qualitative confidence band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceCategory {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ConfidenceCategory {
    /// Band a confidence score
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.75 {
            ConfidenceCategory::VeryHigh
        } else if confidence >= 0.65 {
            ConfidenceCategory::High
        } else if confidence >= 0.50 {
            ConfidenceCategory::Moderate
        } else if confidence >= 0.35 {
            ConfidenceCategory::Low
        } else {
            ConfidenceCategory::VeryLow
        }
    }

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceCategory::VeryLow => "Very Low",
            ConfidenceCategory::Low => "Low",
            ConfidenceCategory::Moderate => "Moderate",
            ConfidenceCategory::High => "High",
            ConfidenceCategory::VeryHigh => "Very High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(pairs: &[(&str, f64)]) -> RawParameters {
        RawParameters::try_from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_complete_plausible_input() {
        let estimator = ConfidenceEstimator::new();
        let p = params(&[("lfm", 90.0), ("dfm", 8.0), ("wind_speed", 6.0)]);

        assert_eq!(estimator.completeness(&p), 1.0);
        assert_relative_eq!(estimator.quality(&p), 0.8);
        // raw = 0.5 + 0.24 + 0.14 = 0.88 → 0.4 + 0.352
        assert_relative_eq!(estimator.estimate(&p), 0.752, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let estimator = ConfidenceEstimator::new();
        let p = RawParameters::new();
        assert_eq!(estimator.completeness(&p), 0.0);
        // raw = 0.24 + 0.14 = 0.38 → 0.552
        assert_relative_eq!(estimator.estimate(&p), 0.552, epsilon = 1e-12);
    }

    #[test]
    fn test_cbd_raises_the_bar() {
        let estimator = ConfidenceEstimator::new();
        let without = params(&[("lfm", 90.0), ("wind_speed", 6.0)]);
        let with_cbd = params(&[("lfm", 90.0), ("wind_speed", 6.0), ("cbd", 0.12)]);

        assert_relative_eq!(estimator.completeness(&without), 2.0 / 3.0);
        assert_relative_eq!(estimator.completeness(&with_cbd), 3.0 / 4.0);

        let full_with_cbd = params(&[
            ("lfm", 90.0),
            ("dfm", 8.0),
            ("wind_speed", 6.0),
            ("cbd", 0.12),
        ]);
        assert_eq!(estimator.completeness(&full_with_cbd), 1.0);
    }

    #[test]
    fn test_implausible_values_penalized() {
        let estimator = ConfidenceEstimator::new();

        let one_bad = params(&[("lfm", 250.0), ("dfm", 8.0), ("wind_speed", 6.0)]);
        assert_relative_eq!(estimator.quality(&one_bad), 0.6, epsilon = 1e-12);

        // Three penalties would reach 0.2 but quality floors at 0.4
        let all_bad = params(&[("lfm", 10.0), ("dfm", 45.0), ("wind_speed", -1.0)]);
        assert_relative_eq!(estimator.quality(&all_bad), 0.4, epsilon = 1e-12);
        assert_relative_eq!(estimator.estimate(&all_bad), 0.704, epsilon = 1e-12);

        // Band edges are plausible
        let edges = params(&[("lfm", 30.0), ("dfm", 30.0), ("wind_speed", 40.0)]);
        assert_relative_eq!(estimator.quality(&edges), 0.8);
    }

    #[test]
    fn test_model_uncertainty_injectable() {
        let p = params(&[("lfm", 90.0), ("dfm", 8.0), ("wind_speed", 6.0)]);
        let low = ConfidenceEstimator::with_model_uncertainty(0.0)
            .unwrap()
            .estimate(&p);
        let high = ConfidenceEstimator::with_model_uncertainty(1.0)
            .unwrap()
            .estimate(&p);
        assert_relative_eq!(high - low, 0.08, epsilon = 1e-12);
        assert_eq!(
            ConfidenceEstimator::with_model_uncertainty(3.0)
                .unwrap()
                .model_uncertainty(),
            1.0
        );
    }

    #[test]
    fn test_non_finite_model_uncertainty_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ConfidenceEstimator::with_model_uncertainty(bad).unwrap_err();
            assert!(matches!(err, ForecastError::NonFiniteModelUncertainty(_)));
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(ConfidenceCategory::from_confidence(0.8), ConfidenceCategory::VeryHigh);
        assert_eq!(ConfidenceCategory::from_confidence(0.752), ConfidenceCategory::VeryHigh);
        assert_eq!(ConfidenceCategory::from_confidence(0.7), ConfidenceCategory::High);
        assert_eq!(ConfidenceCategory::from_confidence(0.552), ConfidenceCategory::Moderate);
        assert_eq!(ConfidenceCategory::from_confidence(0.4), ConfidenceCategory::Low);
        assert_eq!(ConfidenceCategory::from_confidence(0.2), ConfidenceCategory::VeryLow);
        assert_eq!(ConfidenceCategory::VeryHigh.label(), "Very High");
    }
}
