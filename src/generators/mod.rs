// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod pool;

pub use password::{
    analyze_strength, generate_password, generate_password_with, strength_feedback,
    strength_label, MIN_PASSWORD_LENGTH,
};
pub use pool::character_pool;

// Generator error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid complexity level '{value}', choose from: easy, medium, hard, extra-hard")]
    InvalidComplexity { value: String },

    #[error("Password length must be at least {min} characters")]
    InvalidLength { min: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
