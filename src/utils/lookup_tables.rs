//! Scoring Lookup Tables
//!
//! Every weight used by the calculators lives here as an immutable table so
//! the scoring rules can be audited (and tested) against the literal values.
//!
//! Tables:
//! - Mood: tea type, aroma category and processing method weights on the
//!   four mood axes (Energy, Calm, Refresh, Comfort)
//! - Relaxation by method: type, aroma tier and method group bonuses
//! - Relaxation by temperature: type, aroma tier and brewing temperature bands
//!
//! The two relaxation variants deliberately keep separate aroma tables.

use crate::profile::TeaType;
use std::ops::AddAssign;

// ============================================================================
// MOOD AXES
// ============================================================================

/// Additive contribution on the four mood axes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoodWeights {
    pub energy: f64,
    pub calm: f64,
    pub refresh: f64,
    pub comfort: f64,
}

impl MoodWeights {
    pub const ZERO: MoodWeights = MoodWeights::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(energy: f64, calm: f64, refresh: f64, comfort: f64) -> Self {
        Self { energy, calm, refresh, comfort }
    }

    /// Same amount on every axis
    pub const fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}

impl AddAssign for MoodWeights {
    fn add_assign(&mut self, rhs: Self) {
        self.energy += rhs.energy;
        self.calm += rhs.calm;
        self.refresh += rhs.refresh;
        self.comfort += rhs.comfort;
    }
}

/// Bonus added to the matching axis when the aroma is in one of the mood tables
pub const MATCHED_AROMA_MOOD_BONUS: f64 = 3.0;

/// Added to all four axes when the aroma carries no strong signal
pub const UNMATCHED_AROMA_MOOD_BONUS: f64 = 0.75;

static MOOD_TYPE_WEIGHTS: &[(TeaType, MoodWeights)] = &[
    (TeaType::Green, MoodWeights::new(0.0, 0.0, 4.0, 0.0)),
    (TeaType::Black, MoodWeights::new(4.0, 0.0, 0.0, 0.0)),
    (TeaType::Oolong, MoodWeights::new(0.0, 2.0, 2.0, 0.0)),
    (TeaType::White, MoodWeights::new(0.0, 4.0, 0.0, 0.0)),
    (TeaType::Puerh, MoodWeights::new(0.0, 0.0, 0.0, 4.0)),
    (TeaType::Yellow, MoodWeights::new(0.0, 1.0, 3.0, 0.0)),
    (TeaType::Herbal, MoodWeights::new(0.0, 3.0, 0.0, 1.0)),
];

/// Mood aroma categories, checked in order. First match wins.
static MOOD_AROMA_TABLES: &[(&str, &[&str], MoodWeights)] = &[
    (
        "energising",
        &["citrus", "mint", "ginger", "cinnamon", "bergamot"],
        MoodWeights::new(MATCHED_AROMA_MOOD_BONUS, 0.0, 0.0, 0.0),
    ),
    (
        "calming",
        &["lavender", "chamomile", "vanilla", "jasmine", "rose"],
        MoodWeights::new(0.0, MATCHED_AROMA_MOOD_BONUS, 0.0, 0.0),
    ),
    (
        "refreshing",
        &["lemongrass", "peppermint", "eucalyptus", "green apple", "cucumber"],
        MoodWeights::new(0.0, 0.0, MATCHED_AROMA_MOOD_BONUS, 0.0),
    ),
    (
        "comforting",
        &["caramel", "cocoa", "almond", "hazelnut", "maple"],
        MoodWeights::new(0.0, 0.0, 0.0, MATCHED_AROMA_MOOD_BONUS),
    ),
];

static MOOD_METHOD_WEIGHTS: &[(&str, MoodWeights)] = &[
    ("steamed", MoodWeights::new(0.0, 0.0, 2.0, 0.0)),
    ("pan-fired", MoodWeights::new(2.0, 0.0, 0.0, 0.0)),
    ("oxidised", MoodWeights::new(0.0, 0.0, 0.0, 2.0)),
    ("roasted", MoodWeights::new(0.0, 0.0, 0.0, 3.0)),
    ("withered", MoodWeights::new(0.0, 2.0, 0.0, 0.0)),
    ("fermented", MoodWeights::new(0.0, 0.0, 0.0, 3.0)),
    ("sun-dried", MoodWeights::new(0.0, 0.0, 2.0, 0.0)),
    ("shade-grown", MoodWeights::new(0.0, 3.0, 0.0, 0.0)),
    ("smoked", MoodWeights::new(2.0, 0.0, 0.0, 1.0)),
    ("bruised", MoodWeights::new(1.0, 0.0, 1.0, 0.0)),
    ("rolled", MoodWeights::new(0.0, 1.0, 1.0, 0.0)),
    ("cured", MoodWeights::new(0.0, 0.0, 0.0, 2.0)),
    ("aged", MoodWeights::new(0.0, 1.0, 0.0, 3.0)),
    ("blended", MoodWeights::uniform(1.0)),
];

// ============================================================================
// RELAXATION
// ============================================================================

/// A named aroma bucket with its relaxation bonus
#[derive(Debug, Clone)]
pub struct AromaTier {
    pub name: &'static str,
    pub aromas: &'static [&'static str],
    pub bonus: f64,
}

/// Relaxation bonus for an aroma that matches none of the tiers
pub const UNMATCHED_AROMA_RELAXATION_BONUS: f64 = 1.0;

static METHOD_VARIANT_TYPE_WEIGHTS: &[(TeaType, f64)] = &[
    (TeaType::White, 4.0),
    (TeaType::Green, 3.0),
    (TeaType::Oolong, 3.0),
    (TeaType::Puerh, 2.0),
    (TeaType::Yellow, 2.0),
    (TeaType::Black, 1.0),
    (TeaType::Herbal, 5.0),
];

static METHOD_VARIANT_AROMA_TIERS: &[AromaTier] = &[
    AromaTier {
        name: "relaxing",
        aromas: &["lavender", "chamomile", "vanilla", "jasmine", "rose"],
        bonus: 3.0,
    },
    AromaTier {
        name: "neutral",
        aromas: &["grassy", "nutty", "woody", "honey", "fruity"],
        bonus: 1.5,
    },
    AromaTier {
        name: "stimulating",
        aromas: &["citrus", "mint", "cinnamon", "ginger", "bergamot"],
        bonus: 0.5,
    },
];

static METHOD_RELAXATION_GROUPS: &[(&[&str], f64)] = &[
    (&["steamed", "shade-grown"], 2.0),
    (&["sun-dried", "withered"], 1.5),
    (&["oxidised", "roasted", "pan-fired"], 1.0),
    (&["fermented", "aged"], 0.5),
    (&["smoked", "bruised"], 0.0),
    (&["rolled", "cured", "blended"], 0.5),
];

// Yellow and herbal are absent here: they score like an unknown type
static TEMPERATURE_VARIANT_TYPE_WEIGHTS: &[(TeaType, f64)] = &[
    (TeaType::White, 4.0),
    (TeaType::Green, 2.0),
    (TeaType::Oolong, 2.0),
    (TeaType::Puerh, 1.0),
    (TeaType::Black, 0.0),
];

static TEMPERATURE_VARIANT_AROMA_TIERS: &[AromaTier] = &[
    AromaTier {
        name: "relaxing",
        aromas: &["floral", "honey", "vanilla", "chamomile", "lavender"],
        bonus: 2.5,
    },
    AromaTier {
        name: "neutral",
        aromas: &["nutty", "woody", "fruity", "earthy", "malty"],
        bonus: 1.5,
    },
    AromaTier {
        name: "stimulating",
        aromas: &["citrus", "mint", "smoky", "roasted", "spicy"],
        bonus: 0.5,
    },
];

/// Brewing temperature bands as (exclusive upper bound in Celsius, bonus).
/// Anything at or above the last bound scores nothing.
static TEMPERATURE_BANDS: &[(f64, f64)] = &[(70.0, 2.0), (80.0, 1.5), (90.0, 1.0)];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}

/// Mood contribution of a tea type (zero when unrecognised)
pub fn mood_type_weights(tea_type: Option<TeaType>) -> MoodWeights {
    tea_type
        .and_then(|t| MOOD_TYPE_WEIGHTS.iter().find(|(k, _)| *k == t))
        .map(|(_, w)| *w)
        .unwrap_or(MoodWeights::ZERO)
}

/// Mood aroma category name and contribution, None when unmatched
pub fn mood_aroma_category(aroma: &str) -> Option<(&'static str, MoodWeights)> {
    let key = normalize_key(aroma);
    MOOD_AROMA_TABLES
        .iter()
        .find(|(_, aromas, _)| aromas.contains(&key.as_str()))
        .map(|(name, _, weights)| (*name, *weights))
}

/// Mood contribution of a processing method, None when unrecognised
pub fn mood_method_weights(method: &str) -> Option<MoodWeights> {
    let key = normalize_key(method);
    MOOD_METHOD_WEIGHTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, w)| *w)
}

pub fn method_variant_type_bonus(tea_type: Option<TeaType>) -> f64 {
    type_bonus(METHOD_VARIANT_TYPE_WEIGHTS, tea_type)
}

pub fn temperature_variant_type_bonus(tea_type: Option<TeaType>) -> f64 {
    type_bonus(TEMPERATURE_VARIANT_TYPE_WEIGHTS, tea_type)
}

fn type_bonus(table: &[(TeaType, f64)], tea_type: Option<TeaType>) -> f64 {
    tea_type
        .and_then(|t| table.iter().find(|(k, _)| *k == t))
        .map_or(0.0, |(_, bonus)| *bonus)
}

pub fn method_variant_aroma_tier(aroma: &str) -> Option<&'static AromaTier> {
    find_aroma_tier(METHOD_VARIANT_AROMA_TIERS, aroma)
}

pub fn temperature_variant_aroma_tier(aroma: &str) -> Option<&'static AromaTier> {
    find_aroma_tier(TEMPERATURE_VARIANT_AROMA_TIERS, aroma)
}

fn find_aroma_tier(tiers: &'static [AromaTier], aroma: &str) -> Option<&'static AromaTier> {
    let key = normalize_key(aroma);
    tiers.iter().find(|tier| tier.aromas.contains(&key.as_str()))
}

/// Relaxation bonus of a processing method, None when unrecognised
pub fn method_relaxation_bonus(method: &str) -> Option<f64> {
    let key = normalize_key(method);
    METHOD_RELAXATION_GROUPS
        .iter()
        .find(|(methods, _)| methods.contains(&key.as_str()))
        .map(|(_, bonus)| *bonus)
}

/// Relaxation bonus of a brewing temperature in Celsius
pub fn temperature_bonus(celsius: f64) -> f64 {
    TEMPERATURE_BANDS
        .iter()
        .find(|(upper, _)| celsius < *upper)
        .map_or(0.0, |(_, bonus)| *bonus)
}
