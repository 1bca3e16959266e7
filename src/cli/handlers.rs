// src/cli/handlers.rs
use std::error::Error;

use console::style;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use crate::config::Config;
use crate::generators::{self, analyze_strength, strength_feedback, strength_label};
use crate::models::{ComplexityLevel, GeneratedPassword};

// Handlers for CLI commands

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    complexity: Option<&str>,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let length = length.unwrap_or(config.default_length);
    let complexity = match complexity {
        Some(value) => value.parse::<ComplexityLevel>()?,
        None => config.default_complexity,
    };

    log::debug!(
        "Generating {} password(s): length={}, complexity={}",
        count,
        length,
        complexity
    );

    let mut seeded = seed.map(ChaCha20Rng::seed_from_u64);
    let mut generated = Vec::with_capacity(count);
    for _ in 0..count {
        let password = match seeded.as_mut() {
            Some(rng) => generators::generate_password_with(rng, length, complexity)?,
            None => generators::generate_password(length, complexity)?,
        };
        let strength = analyze_strength(&password);
        generated.push(GeneratedPassword {
            password,
            complexity,
            length,
            strength,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    for item in &generated {
        println!(
            "🔑 {}  ({}, {}/100 {})",
            style(&item.password).green().bold(),
            item.complexity,
            item.strength,
            strength_label(item.strength)
        );
    }

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = analyze_strength(password);
    let feedback = strength_feedback(password);

    if json {
        let report = serde_json::json!({
            "strength": strength,
            "label": strength_label(strength),
            "feedback": feedback,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🛡️  Strength: {}/100 ({})", strength, strength_label(strength));
    for line in &feedback {
        println!("  • {line}");
    }

    Ok(())
}

// Demonstration run over four representative (length, complexity) pairs
pub fn handle_demo(json: bool) -> Result<(), Box<dyn Error>> {
    let samples = [
        (10, ComplexityLevel::Easy),
        (12, ComplexityLevel::Medium),
        (14, ComplexityLevel::Hard),
        (20, ComplexityLevel::ExtraHard),
    ];

    let mut generated = Vec::with_capacity(samples.len());
    for (length, complexity) in samples {
        let password = generators::generate_password(length, complexity)?;
        let strength = analyze_strength(&password);
        generated.push(GeneratedPassword {
            password,
            complexity,
            length,
            strength,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    println!("🔑 Sample passwords:");
    for item in &generated {
        println!(
            "{:>12}: {}  ({}/100 {})",
            item.complexity.as_str(),
            style(&item.password).green().bold(),
            item.strength,
            strength_label(item.strength)
        );
    }

    Ok(())
}
