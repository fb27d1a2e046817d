//! Calculator modules for tea scoring
//!
//! Each calculator lives in its own module and is a pure function of a
//! `TeaProfile`. The two relaxation variants are independent algorithms;
//! `RelaxationStrategy` selects between them explicitly.

pub mod mood;
pub mod relaxation_by_method;
pub mod relaxation_by_temperature;

// Re-export calculator functions
pub use mood::{calculate_mood, classify_mood, Mood, MoodResult};
pub use relaxation_by_method::{calculate_relaxation_by_method, score_relaxation_by_method};
pub use relaxation_by_temperature::{
    calculate_relaxation_by_temperature, score_relaxation_by_temperature,
};

use crate::error::Result;
use crate::profile::TeaProfile;
use serde::{Deserialize, Serialize};

/// Result of either relaxation calculator
#[derive(Debug, Clone)]
pub struct RelaxationResult {
    /// Accumulated score before normalization
    pub raw: f64,
    /// Value that gets rounded (equals `raw` for the method variant)
    pub scaled: f64,
    /// Final level, 1-10
    pub score: u8,
    /// Matched aroma tier (None means the unmatched bonus was applied)
    pub aroma_tier: Option<&'static str>,
}

/// Which relaxation algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationStrategy {
    ByMethod,
    ByTemperature,
}

impl RelaxationStrategy {
    /// Pick the variant whose input field is present, preferring the processing method
    pub fn for_profile(profile: &TeaProfile) -> Option<Self> {
        if profile.processing_method.is_some() {
            Some(RelaxationStrategy::ByMethod)
        } else if profile.brewing_temp.is_some() {
            Some(RelaxationStrategy::ByTemperature)
        } else {
            None
        }
    }

    pub fn calculate(&self, profile: &TeaProfile) -> Result<RelaxationResult> {
        match self {
            RelaxationStrategy::ByMethod => calculate_relaxation_by_method(profile),
            RelaxationStrategy::ByTemperature => calculate_relaxation_by_temperature(profile),
        }
    }
}

/// Relaxation level 1-10 using the requested variant
pub fn score_relaxation(profile: &TeaProfile, strategy: RelaxationStrategy) -> Result<u8> {
    strategy.calculate(profile).map(|result| result.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        let base = TeaProfile::new("green", 6.0, 8.0, "grassy");
        assert_eq!(RelaxationStrategy::for_profile(&base), None);

        let by_temp = base.clone().with_brewing_temp(60.0);
        assert_eq!(
            RelaxationStrategy::for_profile(&by_temp),
            Some(RelaxationStrategy::ByTemperature)
        );

        let both = by_temp.with_processing_method("shade-grown");
        assert_eq!(
            RelaxationStrategy::for_profile(&both),
            Some(RelaxationStrategy::ByMethod)
        );
    }

    #[test]
    fn test_variants_disagree_on_same_profile() {
        let profile = TeaProfile::new("black", 8.0, 4.0, "smoky")
            .with_processing_method("smoked")
            .with_brewing_temp(95.0);

        // method: 1 + 7 + 1 + 0 = 9; temperature: (0 + 7 + 0.5 + 0) * 2/3 = 5
        assert_eq!(score_relaxation(&profile, RelaxationStrategy::ByMethod).unwrap(), 9);
        assert_eq!(score_relaxation(&profile, RelaxationStrategy::ByTemperature).unwrap(), 5);
    }
}
