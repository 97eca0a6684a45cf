//! Forecast verification metrics
//!
//! Binary contingency scores for probabilistic forecasts thresholded into yes/no events:
//! - **POD** (Probability of Detection) = hits / (hits + misses)
//! - **FAR** (False Alarm Ratio) = false alarms / (hits + false alarms)
//! - **CSI** (Critical Success Index) = hits / (hits + misses + false alarms)

use serde::Serialize;

use crate::error::ForecastError;

/// 2×2 contingency table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    pub hits: usize,
    pub false_alarms: usize,
    pub misses: usize,
    pub correct_negatives: usize,
}

impl ContingencyTable {
    /// Tabulate observed events against forecast probabilities
    ///
    /// A forecast counts as positive when its probability is at least `threshold`.
    ///
    /// # Errors
    /// Returns [`ForecastError::LengthMismatch`] if the slices differ in length.
    pub fn from_forecasts(
        observed: &[bool],
        probabilities: &[f64],
        threshold: f64,
    ) -> Result<Self, ForecastError> {
        if observed.len() != probabilities.len() {
            return Err(ForecastError::LengthMismatch {
                observed: observed.len(),
                forecast: probabilities.len(),
            });
        }

        let mut table = ContingencyTable::default();
        for (&event, &probability) in observed.iter().zip(probabilities) {
            match (probability >= threshold, event) {
                (true, true) => table.hits += 1,
                (true, false) => table.false_alarms += 1,
                (false, true) => table.misses += 1,
                (false, false) => table.correct_negatives += 1,
            }
        }
        Ok(table)
    }

    /// Number of forecast/observation pairs
    pub fn total(&self) -> usize {
        self.hits + self.false_alarms + self.misses + self.correct_negatives
    }

    /// Probability of Detection, `None` when no events were observed
    pub fn pod(&self) -> Option<f64> {
        ratio(self.hits, self.hits + self.misses)
    }

    /// False Alarm Ratio, `None` when no events were forecast
    pub fn far(&self) -> Option<f64> {
        ratio(self.false_alarms, self.hits + self.false_alarms)
    }

    /// Critical Success Index
    pub fn csi(&self) -> Option<f64> {
        ratio(self.hits, self.hits + self.misses + self.false_alarms)
    }

    /// POD, FAR and CSI together
    pub fn scores(&self) -> VerificationScores {
        VerificationScores {
            pod: self.pod(),
            far: self.far(),
            csi: self.csi(),
            table: *self,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// All verification scores for one threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerificationScores {
    pub pod: Option<f64>,
    pub far: Option<f64>,
    pub csi: Option<f64>,
    pub table: ContingencyTable,
}

/// Tabulate and score in one step
///
/// # Errors
/// Returns [`ForecastError::LengthMismatch`] if the slices differ in length.
pub fn verify(
    observed: &[bool],
    probabilities: &[f64],
    threshold: f64,
) -> Result<VerificationScores, ForecastError> {
    Ok(ContingencyTable::from_forecasts(observed, probabilities, threshold)?.scores())
}
