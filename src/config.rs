// src/config.rs
use std::env;

use log::LevelFilter;

use crate::models::ComplexityLevel;

// Runtime defaults for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    pub default_length: usize,
    pub default_complexity: ComplexityLevel,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            default_complexity: ComplexityLevel::Medium,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_COMPLEXITY") {
            match val.parse::<ComplexityLevel>() {
                Ok(level) => config.default_complexity = level,
                Err(_) => log::warn!(
                    "Unknown complexity '{}', using {}",
                    val,
                    config.default_complexity
                ),
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
