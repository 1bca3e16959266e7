// src/generators/password.rs
use std::collections::HashSet;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::pool::{character_pool, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use super::{GeneratorError, Result};
use crate::models::ComplexityLevel;

pub const MIN_PASSWORD_LENGTH: usize = 6;

// Generate a password using the process-wide RNG
pub fn generate_password(length: usize, complexity: ComplexityLevel) -> Result<String> {
    generate_password_with(&mut rand::thread_rng(), length, complexity)
}

/// Generate a password of `length` characters at the given complexity tier,
/// drawing randomness from `rng`.
///
/// The build loop never accepts two identical characters in a row. For the
/// `hard` and `extra-hard` tiers a repair pass then guarantees at least one
/// character from each of the four character classes; repaired positions are
/// not re-checked against the no-repeat rule.
pub fn generate_password_with<R: Rng>(
    rng: &mut R,
    length: usize,
    complexity: ComplexityLevel,
) -> Result<String> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(GeneratorError::InvalidLength {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    let pool = character_pool(complexity);
    let dist = Uniform::from(0..pool.len());

    let mut password: Vec<u8> = Vec::with_capacity(length);
    while password.len() < length {
        let candidate = pool[dist.sample(rng)];

        // No two identical characters in a row
        if password.last() == Some(&candidate) {
            continue;
        }

        // No runs like "aaa" or "111"
        if password.len() >= 2
            && password[password.len() - 2] == candidate
            && password[password.len() - 1] == candidate
        {
            continue;
        }

        password.push(candidate);
    }

    if complexity.requires_full_coverage() {
        ensure_required_classes(rng, &mut password);
    }

    Ok(password.into_iter().map(char::from).collect())
}

// Overwrite one random position per missing character class. Positions are
// drawn independently, so a later overwrite can land on an earlier one.
fn ensure_required_classes<R: Rng>(rng: &mut R, password: &mut [u8]) {
    for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
        if !password.iter().any(|c| class.contains(c)) {
            let pos = rng.gen_range(0..password.len());
            password[pos] = class[rng.gen_range(0..class.len())];
        }
    }
}

// Score a password from 0-100 based on length, class variety and repetition
pub fn analyze_strength(password: &str) -> u8 {
    let mut score: i32 = 0;

    // Length contribution, capped at 40 points
    score += (password.len() as i32).min(40);

    // 10 points per character class present
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Penalize heavy character reuse
    let unique: HashSet<char> = password.chars().collect();
    if unique.len() < password.len() / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0..=19 => "very weak",
        20..=39 => "weak",
        40..=59 => "moderate",
        60..=79 => "strong",
        _ => "very strong",
    }
}

// Human-readable feedback lines, banded by score
pub fn strength_feedback(password: &str) -> Vec<String> {
    let strength = analyze_strength(password);
    let mut feedback = Vec::new();

    if strength < 20 {
        feedback.push("Very weak password".to_string());
        feedback.push("Consider a longer password with mixed character types".to_string());
    } else if strength < 40 {
        feedback.push("Weak password".to_string());
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            feedback.push("Add uppercase letters".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            feedback.push("Add digits".to_string());
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            feedback.push("Add symbols".to_string());
        }
        if password.len() < 12 {
            feedback.push("Increase the length to at least 12 characters".to_string());
        }
    } else if strength < 60 {
        feedback.push("Moderate password".to_string());
        if password.len() < 12 {
            feedback.push("Consider increasing the length to at least 12 characters".to_string());
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            feedback.push("Add symbols".to_string());
        }
    } else if strength < 80 {
        feedback.push("Strong password".to_string());
        if password.len() < 16 {
            feedback.push("Consider 16 or more characters for maximum strength".to_string());
        }
    } else {
        feedback.push("Very strong password".to_string());
    }

    if has_ascending_run(password) {
        feedback.push("Avoid ascending sequences like 'abc' or '123'".to_string());
    }

    feedback
}

// Three or more consecutive ascending letters or digits ("abc", "123")
fn has_ascending_run(password: &str) -> bool {
    password.as_bytes().windows(3).any(|w| {
        let same_class =
            w.iter().all(|b| b.is_ascii_alphabetic()) || w.iter().all(|b| b.is_ascii_digit());
        same_class && w[1] == w[0] + 1 && w[2] == w[1] + 1
    })
}
