//! Fire behavior physics used alongside the probability pipeline

pub mod byram;
pub mod crown_fire;
pub mod spread_rate;

pub use byram::{fireline_intensity, flame_length, FireBehavior, FireBehaviorClass};
pub use crown_fire::{assess_crown_fire, CrownFireAssessment, CrownFireStatus};
pub use spread_rate::{calculate_rate_of_spread, SpreadRateModel};
