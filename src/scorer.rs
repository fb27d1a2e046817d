//! Tea Scorer - coordinator running every applicable calculator on a profile
//!
//! Includes both sequential and parallel (Rayon) batch implementations.

use crate::error::Result;
use crate::metrics::*;
use crate::profile::TeaProfile;
use rayon::prelude::*;
use serde::Serialize;

/// Combined scores for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeaScore {
    /// Present when the profile has a processing method
    pub mood: Option<String>,
    pub relaxation_by_method: Option<u8>,
    /// Present when the profile has a brewing temperature
    pub relaxation_by_temperature: Option<u8>,
}

/// Stateless scorer. Holds no data; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeaScorer;

impl TeaScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a single profile with every calculator its fields allow.
    ///
    /// Validation errors (out-of-range levels, non-finite temperature) are
    /// returned; an absent optional field just leaves that score as None.
    pub fn score(&self, profile: &TeaProfile) -> Result<TeaScore> {
        profile.validate_levels()?;

        let (mood, relaxation_by_method) = if profile.processing_method.is_some() {
            (
                Some(classify_mood(profile)?),
                Some(score_relaxation_by_method(profile)?),
            )
        } else {
            (None, None)
        };

        let relaxation_by_temperature = if profile.brewing_temp.is_some() {
            Some(score_relaxation_by_temperature(profile)?)
        } else {
            None
        };

        Ok(TeaScore {
            mood,
            relaxation_by_method,
            relaxation_by_temperature,
        })
    }

    /// Score profiles one after another
    pub fn score_batch(&self, profiles: &[TeaProfile]) -> Vec<Result<TeaScore>> {
        profiles.iter().map(|profile| self.score(profile)).collect()
    }

    /// Score profiles in parallel. Output order matches input order.
    pub fn score_batch_parallel(&self, profiles: &[TeaProfile]) -> Vec<Result<TeaScore>> {
        tracing::debug!("Scoring {} profiles in parallel", profiles.len());
        profiles.par_iter().map(|profile| self.score(profile)).collect()
    }
}
