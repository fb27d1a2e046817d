//! Well-known teas used by the demo binary, tests and benchmarks

use crate::profile::TeaProfile;

/// (name, profile) pairs
pub fn sample_profiles() -> Vec<(&'static str, TeaProfile)> {
    vec![
        (
            "Gyokuro",
            TeaProfile::new("green", 6.0, 8.0, "grassy")
                .with_processing_method("shade-grown")
                .with_brewing_temp(60.0),
        ),
        (
            "Lapsang Souchong",
            TeaProfile::new("black", 7.0, 3.0, "smoky")
                .with_processing_method("smoked")
                .with_brewing_temp(95.0),
        ),
        (
            "Pu-erh",
            TeaProfile::new("puerh", 5.0, 4.0, "earthy")
                .with_processing_method("fermented")
                .with_brewing_temp(95.0),
        ),
        (
            "Earl Grey",
            TeaProfile::new("black", 7.0, 3.0, "bergamot").with_processing_method("oxidised"),
        ),
        (
            "Chamomile",
            TeaProfile::new("herbal", 1.0, 1.0, "chamomile").with_processing_method("dried"),
        ),
        (
            "Smoky Black",
            TeaProfile::new("black", 8.0, 4.0, "smoky").with_brewing_temp(95.0),
        ),
    ]
}
