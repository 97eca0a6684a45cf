//! Integration stages: normalize → RSI → confidence → calibrated probability

pub mod calibration;
pub mod confidence;
pub mod normalizer;
pub mod rsi;

pub use calibration::ProbabilityCalibrator;
pub use confidence::{ConfidenceCategory, ConfidenceEstimator};
pub use normalizer::{
    normalize_aspect, normalize_negative, normalize_parameters, normalize_positive,
    NormalizationRule,
};
pub use rsi::RsiCalculator;
