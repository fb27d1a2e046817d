//! RELAXATION LEVEL (BREWING TEMPERATURE VARIANT)
//!
//! Independent of the processing-method variant: its own type weights, its own
//! aroma tiers, and brewing temperature in place of the processing method.
//!
//! Temperature bands (Celsius): <70 adds 2, 70-80 adds 1.5, 80-90 adds 1,
//! 90 and above adds nothing.
//!
//! The raw total is rescaled by 2/3 before rounding half up and clamping to 1-10.

use super::RelaxationResult;
use crate::error::Result;
use crate::profile::TeaProfile;
use crate::utils::lookup_tables::{
    temperature_bonus, temperature_variant_aroma_tier, temperature_variant_type_bonus,
};
use crate::utils::{to_relaxation_scale, UNMATCHED_AROMA_RELAXATION_BONUS};

/// Calculate the relaxation breakdown using the brewing temperature
pub fn calculate_relaxation_by_temperature(profile: &TeaProfile) -> Result<RelaxationResult> {
    profile.validate_levels()?;
    let brewing_temp = profile.require_brewing_temp()?;

    let mut raw = temperature_variant_type_bonus(profile.parsed_type());
    raw += (11.0 - profile.caffeine_level) + profile.l_theanine_level;

    let aroma_tier = temperature_variant_aroma_tier(&profile.aroma_primary);
    raw += aroma_tier.map_or(UNMATCHED_AROMA_RELAXATION_BONUS, |tier| tier.bonus);

    raw += temperature_bonus(brewing_temp);

    let scaled = raw / 3.0 * 2.0;
    let score = to_relaxation_scale(scaled);
    tracing::trace!(raw, scaled, score, "Relaxation scored by temperature");

    Ok(RelaxationResult {
        raw,
        scaled,
        score,
        aroma_tier: aroma_tier.map(|tier| tier.name),
    })
}

/// Relaxation level 1-10 using the brewing temperature
pub fn score_relaxation_by_temperature(profile: &TeaProfile) -> Result<u8> {
    calculate_relaxation_by_temperature(profile).map(|result| result.score)
}
