//! Multi-fuel forecasts for report cycles
//!
//! Report generators run the same conditions through every fuel type. Forecasters share no
//! mutable state, so the fuel types are evaluated in parallel.

use rayon::prelude::*;

use crate::core_types::fuel::FuelType;
use crate::error::ForecastError;
use crate::forecast::forecaster::{ForecastInput, ForecastResult, Forecaster};

/// Forecast the same input for every fuel type, in [`FuelType::ALL`] order
///
/// # Errors
/// Returns an error if the input contains NaN or infinite values.
pub fn forecast_all_fuel_types(input: &ForecastInput) -> Result<Vec<ForecastResult>, ForecastError> {
    forecast_fuel_types(&FuelType::ALL, input)
}

/// Forecast the same input for a chosen set of fuel types, preserving their order
///
/// # Errors
/// Returns an error if the input contains NaN or infinite values.
pub fn forecast_fuel_types(
    fuel_types: &[FuelType],
    input: &ForecastInput,
) -> Result<Vec<ForecastResult>, ForecastError> {
    let raw = input.raw_parameters()?;
    let results = fuel_types
        .par_iter()
        .map(|&fuel| Forecaster::new(fuel).predict_parameters(&raw, input.slope))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(fuel_types = results.len(), "Multi-fuel forecast complete");
    Ok(results)
}

/// Result with the highest rapid-spread probability, if any
pub fn most_hazardous(results: &[ForecastResult]) -> Option<&ForecastResult> {
    results
        .iter()
        .max_by(|a, b| a.probability.total_cmp(&b.probability))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summer_afternoon() -> ForecastInput {
        ForecastInput {
            lfm: Some(85.0),
            dfm: Some(7.0),
            cbd: Some(0.12),
            wind_speed: Some(8.0),
            vpd: Some(28.0),
            aspect: Some(200.0),
            drought_code: Some(380.0),
            slope: 12.0,
            ..ForecastInput::default()
        }
    }

    #[test]
    fn test_matches_sequential_forecasts() {
        let input = summer_afternoon();
        let results = forecast_all_fuel_types(&input).unwrap();
        assert_eq!(results.len(), FuelType::ALL.len());

        for (result, fuel) in results.iter().zip(FuelType::ALL) {
            assert_eq!(result.fuel_type, fuel);
            let sequential = Forecaster::new(fuel).predict(&input).unwrap();
            assert_eq!(result, &sequential);
        }
    }

    #[test]
    fn test_subset_preserves_order() {
        let fuels = [FuelType::DryGrassland, FuelType::QuercusIlex];
        let results = forecast_fuel_types(&fuels, &summer_afternoon()).unwrap();
        assert_eq!(results[0].fuel_type, FuelType::DryGrassland);
        assert_eq!(results[1].fuel_type, FuelType::QuercusIlex);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let input = ForecastInput {
            vpd: Some(f64::NAN),
            ..summer_afternoon()
        };
        assert!(forecast_all_fuel_types(&input).is_err());
    }

    #[test]
    fn test_most_hazardous() {
        let results = forecast_all_fuel_types(&summer_afternoon()).unwrap();
        let worst = most_hazardous(&results).unwrap();
        assert!(results.iter().all(|r| r.probability <= worst.probability));
        assert!(most_hazardous(&[]).is_none());
    }
}
