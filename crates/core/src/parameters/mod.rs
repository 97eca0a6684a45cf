//! Per-parameter hazard classes and inputs derived from routine observations

pub mod classification;
pub mod terrain;
pub mod weather;

pub use classification::{
    assess_lfm, classify_cbd, classify_drought_code, classify_lfm, classify_parameters,
    classify_vpd, LfmAssessment, ParameterHazardClass,
};
pub use terrain::{assess_aspect, AspectAssessment, AspectClass};
pub use weather::{
    calculate_vpd, estimate_lfm_from_ndwi, update_drought_code, wind_adjustment_factor,
};
