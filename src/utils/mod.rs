//! Utility modules for tea scoring
//!
//! Contains shared functionality used across the calculators:
//! - Lookup tables: Immutable weight tables and case-insensitive lookups
//! - Normalization: Rounding and clamping onto the 1-10 scale

pub mod lookup_tables;
pub mod normalization;

// Re-export commonly used types
pub use lookup_tables::{
    AromaTier, MoodWeights, UNMATCHED_AROMA_MOOD_BONUS, UNMATCHED_AROMA_RELAXATION_BONUS,
};
pub use normalization::{round_half_up, to_relaxation_scale, SCORE_MAX, SCORE_MIN};
