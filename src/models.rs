// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::generators::GeneratorError;

// Password complexity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityLevel {
    Easy,
    Medium,
    Hard,
    ExtraHard,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Easy => "easy",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::Hard => "hard",
            ComplexityLevel::ExtraHard => "extra-hard",
        }
    }

    // Tiers whose passwords must contain all four character classes
    pub fn requires_full_coverage(&self) -> bool {
        matches!(self, ComplexityLevel::Hard | ComplexityLevel::ExtraHard)
    }
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        ComplexityLevel::Medium
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplexityLevel {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(ComplexityLevel::Easy),
            "medium" => Ok(ComplexityLevel::Medium),
            "hard" => Ok(ComplexityLevel::Hard),
            "extra-hard" => Ok(ComplexityLevel::ExtraHard),
            _ => Err(GeneratorError::InvalidComplexity {
                value: s.to_string(),
            }),
        }
    }
}

// One generated password together with the parameters that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub complexity: ComplexityLevel,
    pub length: usize,
    pub strength: u8,
}
