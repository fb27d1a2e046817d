//! MOOD CLASSIFICATION
//!
//! Scores a tea on four mood axes and resolves them into a label.
//!
//! Contributions (all additive, starting from zero):
//!   1. Tea type          - fixed weights per family, unknown types add nothing
//!   2. Caffeine          - raises Energy, lowers Calm via (11 - caffeine)
//!   3. L-theanine        - raises Calm
//!   4. Primary aroma     - +3 on the matching axis, or +0.75 on every axis
//!   5. Processing method - fixed weights per method, unknown methods add nothing
//!
//! Resolution: axes are ranked with a stable sort (ties keep the order
//! Energy, Calm, Refresh, Comfort). A lead of more than 2 points gives the top
//! label alone, otherwise the runner-up is appended as "with notes of ...".

use crate::error::Result;
use crate::profile::TeaProfile;
use crate::utils::lookup_tables::{
    mood_aroma_category, mood_method_weights, mood_type_weights, MoodWeights,
};
use crate::utils::UNMATCHED_AROMA_MOOD_BONUS;
use std::fmt;

/// Minimum lead the top axis needs over the runner-up to stand alone
pub const DOMINANT_MOOD_MARGIN: f64 = 2.0;

/// The four mood categories, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Energising,
    Calm,
    Refreshing,
    Comforting,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Energising, Mood::Calm, Mood::Refreshing, Mood::Comforting];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Energising => "Energising & Uplifting",
            Mood::Calm => "Calm & Focused",
            Mood::Refreshing => "Serene & Refreshing",
            Mood::Comforting => "Cosy & Comforting",
        }
    }

    fn score_in(&self, scores: &MoodWeights) -> f64 {
        match self {
            Mood::Energising => scores.energy,
            Mood::Calm => scores.calm,
            Mood::Refreshing => scores.refresh,
            Mood::Comforting => scores.comfort,
        }
    }
}

/// Result of mood classification
#[derive(Debug, Clone)]
pub struct MoodResult {
    /// Accumulated axis scores
    pub scores: MoodWeights,
    /// Highest-scoring mood
    pub primary: Mood,
    /// Runner-up, present when it is within the dominance margin
    pub secondary: Option<Mood>,
    /// Matched aroma category (None means the uniform fallback was applied)
    pub aroma_category: Option<&'static str>,
}

impl MoodResult {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoodResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(
                f,
                "{} with notes of {}",
                self.primary.label(),
                secondary.label().to_lowercase()
            ),
            None => f.write_str(self.primary.label()),
        }
    }
}

/// Calculate the mood breakdown for a profile
pub fn calculate_mood(profile: &TeaProfile) -> Result<MoodResult> {
    profile.validate_levels()?;
    let method = profile.require_processing_method()?;

    let mut scores = MoodWeights::ZERO;

    let tea_type = profile.parsed_type();
    if tea_type.is_none() {
        tracing::debug!("Unrecognised tea type '{}' adds no mood weight", profile.tea_type);
    }
    scores += mood_type_weights(tea_type);

    scores.energy += profile.caffeine_level;
    scores.calm += (11.0 - profile.caffeine_level) + profile.l_theanine_level;

    let aroma_category = match mood_aroma_category(&profile.aroma_primary) {
        Some((category, weights)) => {
            scores += weights;
            Some(category)
        }
        None => {
            tracing::debug!(
                "Aroma '{}' matches no mood category, applying uniform {}",
                profile.aroma_primary,
                UNMATCHED_AROMA_MOOD_BONUS
            );
            scores += MoodWeights::uniform(UNMATCHED_AROMA_MOOD_BONUS);
            None
        }
    };

    match mood_method_weights(method) {
        Some(weights) => scores += weights,
        None => tracing::debug!("Unrecognised processing method '{}' adds no mood weight", method),
    }

    let (primary, secondary) = resolve(&scores);
    tracing::trace!(?scores, ?primary, ?secondary, "Mood classified");

    Ok(MoodResult {
        scores,
        primary,
        secondary,
        aroma_category,
    })
}

/// Classify a profile into its mood label
pub fn classify_mood(profile: &TeaProfile) -> Result<String> {
    calculate_mood(profile).map(|result| result.label())
}

fn resolve(scores: &MoodWeights) -> (Mood, Option<Mood>) {
    let mut ranked = Mood::ALL.map(|mood| (mood, mood.score_in(scores)));
    // slice::sort_by is stable, so equal scores keep declaration order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (top, top_score) = ranked[0];
    let (runner_up, runner_up_score) = ranked[1];

    if top_score > runner_up_score + DOMINANT_MOOD_MARGIN {
        (top, None)
    } else {
        (top, Some(runner_up))
    }
}
