//! RELAXATION LEVEL (PROCESSING METHOD VARIANT)
//!
//! Accumulates a relaxation score from:
//!   1. Tea type          - herbal 5, white 4, green/oolong 3, puerh/yellow 2, black 1
//!   2. Caffeine          - (11 - caffeine), so low caffeine relaxes more
//!   3. L-theanine        - added as-is
//!   4. Primary aroma     - relaxing 3, neutral 1.5, stimulating 0.5, unmatched 1
//!   5. Processing method - grouped bonuses from 0 to 2
//!
//! The raw total is rounded half up and clamped to 1-10. No rescaling.

use super::RelaxationResult;
use crate::error::Result;
use crate::profile::TeaProfile;
use crate::utils::lookup_tables::{
    method_relaxation_bonus, method_variant_aroma_tier, method_variant_type_bonus,
};
use crate::utils::{to_relaxation_scale, UNMATCHED_AROMA_RELAXATION_BONUS};

/// Calculate the relaxation breakdown using the processing method
pub fn calculate_relaxation_by_method(profile: &TeaProfile) -> Result<RelaxationResult> {
    profile.validate_levels()?;
    let method = profile.require_processing_method()?;

    let mut raw = method_variant_type_bonus(profile.parsed_type());

    raw += (11.0 - profile.caffeine_level) + profile.l_theanine_level;

    let aroma_tier = method_variant_aroma_tier(&profile.aroma_primary);
    raw += aroma_tier.map_or(UNMATCHED_AROMA_RELAXATION_BONUS, |tier| tier.bonus);

    match method_relaxation_bonus(method) {
        Some(bonus) => raw += bonus,
        None => tracing::debug!("Unrecognised processing method '{}' adds no relaxation", method),
    }

    let score = to_relaxation_scale(raw);
    tracing::trace!(raw, score, "Relaxation scored by method");

    Ok(RelaxationResult {
        raw,
        scaled: raw,
        score,
        aroma_tier: aroma_tier.map(|tier| tier.name),
    })
}

/// Relaxation level 1-10 using the processing method
pub fn score_relaxation_by_method(profile: &TeaProfile) -> Result<u8> {
    calculate_relaxation_by_method(profile).map(|result| result.score)
}
