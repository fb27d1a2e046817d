//! Scoring Integration Tests
//!
//! Runs the public API end to end: JSON profiles in, mood labels and
//! relaxation levels out.

use tea_scorer::samples::sample_profiles;
use tea_scorer::{
    classify_mood, parse_profiles, score_relaxation, score_relaxation_by_method,
    score_relaxation_by_temperature, Mood, ProfileError, RelaxationStrategy, TeaProfile,
    TeaScorer, TeaType,
};

const PROFILES_JSON: &str = r#"[
    {"type": "green", "caffeineLevel": 6, "lTheanineLevel": 8,
     "aromaPrimary": "grassy", "processingMethod": "shade-grown"},
    {"type": "herbal", "caffeineLevel": 1, "lTheanineLevel": 1,
     "aromaPrimary": "chamomile", "processingMethod": "dried"},
    {"type": "green", "caffeineLevel": 6, "lTheanineLevel": 8,
     "aromaPrimary": "grassy", "brewingTemp": 60},
    {"type": "black", "caffeineLevel": 8, "lTheanineLevel": 4,
     "aromaPrimary": "smoky", "brewingTemp": 95}
]"#;

/// Every (type, caffeine, theanine, aroma, method, temp) combination over a coarse grid
fn profile_grid() -> Vec<TeaProfile> {
    let types = ["green", "black", "oolong", "white", "puerh", "yellow", "herbal", "mate"];
    let aromas = ["citrus", "lavender", "cucumber", "cocoa", "grassy", "smoky", "floral", "leather"];
    let methods = ["steamed", "roasted", "aged", "blended", "bruised", "dried"];
    let temps = [55.0, 75.0, 85.0, 100.0];
    let levels = [1.0, 5.5, 10.0];

    let mut grid = Vec::new();
    for tea_type in types {
        for &caffeine in &levels {
            for &theanine in &levels {
                for aroma in aromas {
                    for method in methods {
                        for &temp in &temps {
                            grid.push(
                                TeaProfile::new(tea_type, caffeine, theanine, aroma)
                                    .with_processing_method(method)
                                    .with_brewing_temp(temp),
                            );
                        }
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_documented_scenarios_from_json() {
    let profiles = parse_profiles(PROFILES_JSON).unwrap();

    assert_eq!(classify_mood(&profiles[0]).unwrap(), "Calm & Focused");
    assert_eq!(score_relaxation_by_method(&profiles[0]).unwrap(), 10);
    assert_eq!(score_relaxation_by_method(&profiles[1]).unwrap(), 10);
    assert_eq!(score_relaxation_by_temperature(&profiles[2]).unwrap(), 10);
    assert_eq!(score_relaxation_by_temperature(&profiles[3]).unwrap(), 5);
}

#[test]
fn test_strategy_dispatch_matches_named_functions() {
    for profile in parse_profiles(PROFILES_JSON).unwrap() {
        let strategy = RelaxationStrategy::for_profile(&profile).unwrap();
        let expected = match strategy {
            RelaxationStrategy::ByMethod => score_relaxation_by_method(&profile).unwrap(),
            RelaxationStrategy::ByTemperature => score_relaxation_by_temperature(&profile).unwrap(),
        };
        assert_eq!(score_relaxation(&profile, strategy).unwrap(), expected);
    }
}

#[test]
fn test_relaxation_always_within_scale() {
    for profile in profile_grid() {
        let by_method = score_relaxation_by_method(&profile).unwrap();
        let by_temperature = score_relaxation_by_temperature(&profile).unwrap();
        assert!((1..=10).contains(&by_method), "{:?} -> {}", profile, by_method);
        assert!((1..=10).contains(&by_temperature), "{:?} -> {}", profile, by_temperature);
    }
}

#[test]
fn test_mood_is_one_of_four_labels() {
    let labels: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();

    for profile in profile_grid() {
        let mood = classify_mood(&profile).unwrap();
        match mood.split_once(" with notes of ") {
            Some((primary, secondary)) => {
                assert!(labels.contains(&primary), "{}", mood);
                assert!(
                    labels.iter().any(|l| l.to_lowercase() == secondary),
                    "{}",
                    mood
                );
                assert_ne!(primary.to_lowercase(), secondary);
            }
            None => assert!(labels.contains(&mood.as_str()), "{}", mood),
        }
    }
}

#[test]
fn test_results_ignore_case() {
    let lower = TeaProfile::new("oolong", 4.0, 6.0, "green apple")
        .with_processing_method("pan-fired")
        .with_brewing_temp(82.0);
    let upper = TeaProfile::new("OOLONG", 4.0, 6.0, "Green Apple")
        .with_processing_method("Pan-Fired")
        .with_brewing_temp(82.0);

    let scorer = TeaScorer::new();
    assert_eq!(scorer.score(&lower).unwrap(), scorer.score(&upper).unwrap());
    assert_eq!(upper.parsed_type(), Some(TeaType::Oolong));
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let scorer = TeaScorer::new();
    for (name, profile) in sample_profiles() {
        let first = scorer.score(&profile).unwrap();
        for _ in 0..5 {
            assert_eq!(scorer.score(&profile).unwrap(), first, "{}", name);
        }
    }
}

#[test]
fn test_sample_catalogue() {
    let scorer = TeaScorer::new();
    let scores: Vec<_> = sample_profiles()
        .into_iter()
        .map(|(name, profile)| (name, scorer.score(&profile).unwrap()))
        .collect();

    let find = |wanted: &str| {
        scores
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, score)| score.clone())
            .unwrap()
    };

    assert_eq!(find("Lapsang Souchong").mood.as_deref(), Some("Energising & Uplifting"));
    assert_eq!(find("Pu-erh").mood.as_deref(), Some("Calm & Focused"));
    assert_eq!(find("Earl Grey").relaxation_by_method, Some(10));
    assert_eq!(find("Chamomile").relaxation_by_temperature, None);
    assert_eq!(find("Smoky Black").relaxation_by_temperature, Some(5));
}

#[test]
fn test_error_taxonomy() {
    let missing = r#"[{"caffeineLevel": 3, "lTheanineLevel": 3, "aromaPrimary": "rose"}]"#;
    assert!(matches!(
        parse_profiles(missing),
        Err(ProfileError::MissingField("type"))
    ));

    let out_of_range = TeaProfile::new("white", 3.0, 12.0, "rose").with_processing_method("withered");
    let err = score_relaxation_by_method(&out_of_range).unwrap_err();
    assert_eq!(err.to_string(), "lTheanineLevel must be within 1-10, got 12");
}
