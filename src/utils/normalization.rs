//! Normalization Utilities
//!
//! Converts accumulated raw scores onto the 1-10 relaxation scale.

/// Lowest relaxation level reported
pub const SCORE_MIN: u8 = 1;
/// Highest relaxation level reported
pub const SCORE_MAX: u8 = 10;

/// Round to the nearest integer with halves going toward +infinity.
///
/// Differs from `f64::round` for negative halves: -2.5 rounds to -2 here.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up, then clamp into [SCORE_MIN, SCORE_MAX]
pub fn to_relaxation_scale(raw: f64) -> u8 {
    let rounded = round_half_up(raw);
    rounded.clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX)) as u8
}
