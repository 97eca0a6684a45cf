//! RSI → probability calibration
//!
//! ```text
//! P(RS) = 1 / (1 + e^−(β₀ + β₁·RSI + β₂·RSI² + β₃·C))
//! ```
//!
//! The quadratic RSI term bends the curve so probability accelerates as several adverse
//! conditions co-occur.

use crate::core_types::fuel::{CalibrationCoefficients, FuelType};

/// Fuel-specific quadratic-logistic calibrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityCalibrator {
    coefficients: CalibrationCoefficients,
}

impl ProbabilityCalibrator {
    /// Calibrator with the fuel type's coefficients
    pub fn new(fuel_type: FuelType) -> Self {
        Self::with_coefficients(fuel_type.profile().calibration)
    }

    /// Calibrator for a free-form fuel identifier, falling back to Aleppo pine coefficients
    pub fn for_identifier(identifier: &str) -> Self {
        Self::new(FuelType::resolve(identifier))
    }

    /// Calibrator with custom coefficients
    pub fn with_coefficients(coefficients: CalibrationCoefficients) -> Self {
        Self { coefficients }
    }

    /// Coefficients in use
    pub fn coefficients(&self) -> &CalibrationCoefficients {
        &self.coefficients
    }

    /// Linear predictor before the logistic transform
    pub fn logit(&self, rsi: f64, confidence: f64) -> f64 {
        let c = &self.coefficients;
        c.beta_0 + c.beta_1 * rsi + c.beta_2 * rsi * rsi + c.beta_3 * confidence
    }

    /// Calibrated probability of rapid spread in [0, 1]
    pub fn calibrate_probability(&self, rsi: f64, confidence: f64) -> f64 {
        let probability = 1.0 / (1.0 + (-self.logit(rsi, confidence)).exp());
        if probability.is_nan() {
            return 0.0;
        }
        probability.clamp(0.0, 1.0)
    }

    /// Whether the logit is non-decreasing in RSI over [0, 1]
    ///
    /// The RSI derivative `β₁ + 2·β₂·RSI` is linear, so checking both ends is sufficient.
    /// A `false` here means high RSI can lower probability: a calibration inversion.
    pub fn is_monotonic_in_rsi(&self) -> bool {
        let c = &self.coefficients;
        c.beta_1 >= 0.0 && c.beta_1 + 2.0 * c.beta_2 >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logistic_midpoint() {
        let calibrator = ProbabilityCalibrator::with_coefficients(CalibrationCoefficients {
            beta_0: 0.0,
            beta_1: 0.0,
            beta_2: 0.0,
            beta_3: 0.0,
        });
        assert_relative_eq!(calibrator.calibrate_probability(0.7, 0.5), 0.5);
    }

    #[test]
    fn test_aleppo_pine_reference_value() {
        let calibrator = ProbabilityCalibrator::new(FuelType::PinusHalepensis);
        // logit = −4.8 + 9.2·0.5 − 4.1·0.25 + 1.4·0.7 = −0.245
        assert_relative_eq!(calibrator.logit(0.5, 0.7), -0.245, epsilon = 1e-12);
        let expected = 1.0 / (1.0 + 0.245_f64.exp());
        assert_relative_eq!(
            calibrator.calibrate_probability(0.5, 0.7),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_extreme_logits_stay_bounded() {
        let calibrator = ProbabilityCalibrator::with_coefficients(CalibrationCoefficients {
            beta_0: 0.0,
            beta_1: 1.0e6,
            beta_2: 0.0,
            beta_3: 0.0,
        });
        assert_eq!(calibrator.calibrate_probability(1.0, 0.5), 1.0);
        assert_eq!(calibrator.calibrate_probability(-1.0, 0.5), 0.0);
    }

    #[test]
    fn test_confidence_raises_probability() {
        let calibrator = ProbabilityCalibrator::new(FuelType::MediterraneanMaquis);
        assert!(
            calibrator.calibrate_probability(0.6, 0.8) > calibrator.calibrate_probability(0.6, 0.4)
        );
    }

    #[test]
    fn test_all_fuel_tables_monotonic() {
        for fuel in FuelType::ALL {
            let calibrator = ProbabilityCalibrator::new(fuel);
            assert!(calibrator.is_monotonic_in_rsi(), "{fuel} calibration inverts");

            let mut previous = 0.0;
            for step in 0..=100 {
                let rsi = f64::from(step) / 100.0;
                let p = calibrator.calibrate_probability(rsi, 0.75);
                assert!(p >= previous, "{fuel}: P dropped at RSI {rsi}");
                previous = p;
            }
        }
    }

    #[test]
    fn test_inversion_detected() {
        let calibrator = ProbabilityCalibrator::with_coefficients(CalibrationCoefficients {
            beta_0: -4.0,
            beta_1: 6.0,
            beta_2: -4.0,
            beta_3: 1.0,
        });
        assert!(!calibrator.is_monotonic_in_rsi());
    }

    #[test]
    fn test_unknown_identifier_uses_aleppo_pine() {
        assert_eq!(
            ProbabilityCalibrator::for_identifier("eucalyptus_regnans"),
            ProbabilityCalibrator::new(FuelType::PinusHalepensis)
        );
    }
}
