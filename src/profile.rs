//! Tea profile input model
//!
//! A `TeaProfile` is the single input record consumed by every calculator.
//! Free-text fields (type, aroma, processing method) are kept as supplied and
//! matched case-insensitively against the lookup tables at scoring time, so an
//! unrecognised value is never an error - it simply contributes nothing (or the
//! table's fallback bonus).
//!
//! JSON uses camelCase field names:
//! `type`, `caffeineLevel`, `lTheanineLevel`, `aromaPrimary`,
//! `processingMethod`, `brewingTemp`.

use crate::error::{ProfileError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Lowest meaningful caffeine / L-theanine level
pub const LEVEL_MIN: f64 = 1.0;
/// Highest meaningful caffeine / L-theanine level
pub const LEVEL_MAX: f64 = 10.0;

/// Recognised tea families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeaType {
    Green,
    Black,
    Oolong,
    White,
    Puerh,
    Yellow,
    Herbal,
}

impl TeaType {
    pub const ALL: [TeaType; 7] = [
        TeaType::Green,
        TeaType::Black,
        TeaType::Oolong,
        TeaType::White,
        TeaType::Puerh,
        TeaType::Yellow,
        TeaType::Herbal,
    ];

    /// Case-insensitive parse. Returns None for anything outside the seven families.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "green" => Some(TeaType::Green),
            "black" => Some(TeaType::Black),
            "oolong" => Some(TeaType::Oolong),
            "white" => Some(TeaType::White),
            "puerh" => Some(TeaType::Puerh),
            "yellow" => Some(TeaType::Yellow),
            "herbal" => Some(TeaType::Herbal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeaType::Green => "green",
            TeaType::Black => "black",
            TeaType::Oolong => "oolong",
            TeaType::White => "white",
            TeaType::Puerh => "puerh",
            TeaType::Yellow => "yellow",
            TeaType::Herbal => "herbal",
        }
    }
}

/// Attributes of a single tea sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct TeaProfile {
    #[serde(rename = "type")]
    pub tea_type: String,
    pub caffeine_level: f64,
    pub l_theanine_level: f64,
    pub aroma_primary: String,
    /// Used by mood classification and relaxation-by-method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,
    /// Celsius, used by relaxation-by-temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brewing_temp: Option<f64>,
}

impl TeaProfile {
    pub fn new(
        tea_type: impl Into<String>,
        caffeine_level: f64,
        l_theanine_level: f64,
        aroma_primary: impl Into<String>,
    ) -> Self {
        Self {
            tea_type: tea_type.into(),
            caffeine_level,
            l_theanine_level,
            aroma_primary: aroma_primary.into(),
            processing_method: None,
            brewing_temp: None,
        }
    }

    pub fn with_processing_method(mut self, method: impl Into<String>) -> Self {
        self.processing_method = Some(method.into());
        self
    }

    pub fn with_brewing_temp(mut self, celsius: f64) -> Self {
        self.brewing_temp = Some(celsius);
        self
    }

    /// Parsed tea family, None when unrecognised
    pub fn parsed_type(&self) -> Option<TeaType> {
        TeaType::parse(&self.tea_type)
    }

    /// Reject caffeine / L-theanine levels outside [1, 10] (NaN included)
    pub fn validate_levels(&self) -> Result<()> {
        check_level("caffeineLevel", self.caffeine_level)?;
        check_level("lTheanineLevel", self.l_theanine_level)?;
        Ok(())
    }

    pub fn require_processing_method(&self) -> Result<&str> {
        self.processing_method
            .as_deref()
            .ok_or(ProfileError::MissingField("processingMethod"))
    }

    pub fn require_brewing_temp(&self) -> Result<f64> {
        let temp = self
            .brewing_temp
            .ok_or(ProfileError::MissingField("brewingTemp"))?;
        if !temp.is_finite() {
            return Err(ProfileError::NonFiniteTemperature(temp));
        }
        Ok(temp)
    }
}

fn check_level(field: &'static str, value: f64) -> Result<()> {
    if (LEVEL_MIN..=LEVEL_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::InvalidRange {
            field,
            value,
            min: LEVEL_MIN,
            max: LEVEL_MAX,
        })
    }
}

/// Partially-filled profile as it arrives from JSON
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(rename = "type")]
    pub tea_type: Option<String>,
    pub caffeine_level: Option<f64>,
    pub l_theanine_level: Option<f64>,
    pub aroma_primary: Option<String>,
    pub processing_method: Option<String>,
    pub brewing_temp: Option<f64>,
}

impl TryFrom<ProfileRecord> for TeaProfile {
    type Error = ProfileError;

    fn try_from(record: ProfileRecord) -> Result<Self> {
        Ok(Self {
            tea_type: record.tea_type.ok_or(ProfileError::MissingField("type"))?,
            caffeine_level: record
                .caffeine_level
                .ok_or(ProfileError::MissingField("caffeineLevel"))?,
            l_theanine_level: record
                .l_theanine_level
                .ok_or(ProfileError::MissingField("lTheanineLevel"))?,
            aroma_primary: record
                .aroma_primary
                .ok_or(ProfileError::MissingField("aromaPrimary"))?,
            processing_method: record.processing_method,
            brewing_temp: record.brewing_temp,
        })
    }
}

/// Parse a JSON array of profiles.
///
/// Records are decoded loosely first so that an absent field surfaces as
/// `ProfileError::MissingField` rather than an opaque serde message.
pub fn parse_profiles(json: &str) -> Result<Vec<TeaProfile>> {
    let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
    records.into_iter().map(TeaProfile::try_from).collect()
}

/// Load a JSON array of profiles from disk
pub fn load_profiles(path: &Path) -> anyhow::Result<Vec<TeaProfile>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tea profiles: {:?}", path))?;

    parse_profiles(&contents)
        .with_context(|| format!("Failed to parse tea profiles: {:?}", path))
}
