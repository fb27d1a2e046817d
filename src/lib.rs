//! Tea Scorer
//!
//! Descriptive scoring for tea samples: a mood label and a 1-10 relaxation level.
//!
//! Layout:
//! - `profile`: Input model and JSON loading
//! - `utils/`: Lookup tables and normalization
//! - `metrics/`: Individual calculators (mood, relaxation by method, relaxation by temperature)
//! - `scorer`: Runs every applicable calculator, sequentially or with Rayon

pub mod error;
pub mod profile;
pub mod utils;
pub mod metrics;
pub mod scorer;
pub mod samples;

// Re-export commonly used types
pub use error::ProfileError;
pub use profile::{load_profiles, parse_profiles, ProfileRecord, TeaProfile, TeaType};
pub use metrics::*;
pub use scorer::{TeaScore, TeaScorer};
