//! Verification of forecast skill against observed outcomes

pub mod metrics;

pub use metrics::{verify, ContingencyTable, VerificationScores};
