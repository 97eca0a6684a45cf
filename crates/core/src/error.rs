//! Input boundary errors
//!
//! The numerical pipeline itself never fails: out-of-range values are clipped, unknown fuel
//! identifiers fall back, and missing parameters are skipped. The only rejected inputs are
//! values the formulas cannot accept at all.

/// Errors that can occur when building forecast inputs
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// A parameter value was NaN or infinite
    NonFiniteParameter {
        /// Raw parameter key (e.g. `wind_speed`)
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Parameter name is not one of the nine forecast parameters
    UnknownParameter(String),
    /// Slope was NaN or infinite
    NonFiniteSlope(f64),
    /// Injected model-uncertainty score was NaN or infinite
    NonFiniteModelUncertainty(f64),
    /// Observed and forecast series differ in length
    LengthMismatch {
        /// Number of observations
        observed: usize,
        /// Number of forecast probabilities
        forecast: usize,
    },
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::NonFiniteParameter { name, value } => {
                write!(f, "Parameter '{name}' must be finite, got {value}")
            }
            ForecastError::UnknownParameter(name) => write!(f, "Unknown parameter '{name}'"),
            ForecastError::NonFiniteSlope(value) => write!(f, "Slope must be finite, got {value}"),
            ForecastError::NonFiniteModelUncertainty(value) => {
                write!(f, "Model uncertainty must be finite, got {value}")
            }
            ForecastError::LengthMismatch { observed, forecast } => write!(
                f,
                "Observed series has {observed} entries but forecast series has {forecast}"
            ),
        }
    }
}

impl std::error::Error for ForecastError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ForecastError::NonFiniteParameter {
            name: "lfm",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Parameter 'lfm' must be finite, got NaN");

        let err = ForecastError::UnknownParameter("humidity".to_string());
        assert_eq!(err.to_string(), "Unknown parameter 'humidity'");

        let err = ForecastError::NonFiniteModelUncertainty(f64::INFINITY);
        assert_eq!(err.to_string(), "Model uncertainty must be finite, got inf");

        let err = ForecastError::LengthMismatch {
            observed: 3,
            forecast: 2,
        };
        assert!(err.to_string().contains("3 entries"));
    }
}
