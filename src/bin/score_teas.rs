// Score Teas: demo entry point
//
// Usage: cargo run --features cli --bin score_teas
//
// Environment:
//   TEA_PROFILES  path to a JSON array of profiles (built-in samples when unset)
//   TEA_OUTPUT    "text" (default) or "json"
//   RUST_LOG      tracing filter

use anyhow::Context;
use std::path::PathBuf;
use tea_scorer::samples::sample_profiles;
use tea_scorer::{load_profiles, TeaProfile, TeaScorer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tea_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let json_output = match std::env::var("TEA_OUTPUT") {
        Ok(mode) if mode.eq_ignore_ascii_case("json") => true,
        Ok(mode) if mode.eq_ignore_ascii_case("text") => false,
        Ok(mode) => anyhow::bail!("Unknown TEA_OUTPUT '{}', expected text or json", mode),
        Err(_) => false,
    };

    let named: Vec<(String, TeaProfile)> = match std::env::var("TEA_PROFILES") {
        Ok(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading profiles from {:?}", path);
            load_profiles(&path)?
                .into_iter()
                .enumerate()
                .map(|(i, profile)| (format!("#{}", i + 1), profile))
                .collect()
        }
        Err(_) => {
            tracing::info!("TEA_PROFILES not set, scoring built-in samples");
            sample_profiles()
                .into_iter()
                .map(|(name, profile)| (name.to_string(), profile))
                .collect()
        }
    };

    let profiles: Vec<TeaProfile> = named.iter().map(|(_, p)| p.clone()).collect();
    let results = TeaScorer::new().score_batch_parallel(&profiles);

    let mut report = Vec::with_capacity(results.len());
    for ((name, _), result) in named.iter().zip(results) {
        match result {
            Ok(score) => {
                if json_output {
                    report.push(serde_json::json!({ "name": name, "score": score }));
                } else {
                    println!("{}:", name);
                    if let Some(mood) = &score.mood {
                        println!("  mood: {}", mood);
                    }
                    if let Some(level) = score.relaxation_by_method {
                        println!("  relaxation (method): {}", level);
                    }
                    if let Some(level) = score.relaxation_by_temperature {
                        println!("  relaxation (temperature): {}", level);
                    }
                }
            }
            Err(e) => tracing::warn!("Skipping {}: {}", name, e),
        }
    }

    if json_output {
        let rendered = serde_json::to_string_pretty(&report).context("Failed to render report")?;
        println!("{}", rendered);
    }

    Ok(())
}
