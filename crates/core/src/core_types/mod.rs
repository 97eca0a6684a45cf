//! Core value types shared by every stage of the forecast pipeline

pub mod fuel;
pub mod parameters;

pub use fuel::{
    BaseRosModel, CalibrationCoefficients, FuelProfile, FuelStructureDefaults, FuelType, RsiWeights,
    UnknownFuelType,
};
pub use parameters::{NormalizedParameters, ParameterContributions, ParameterKey, RawParameters};
