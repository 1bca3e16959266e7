// src/generators/pool.rs
use lazy_static::lazy_static;

use crate::models::ComplexityLevel;

// Fixed character classes
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_+=";

lazy_static! {
    static ref EASY_POOL: Vec<u8> = compose(&[LOWERCASE]);
    static ref MEDIUM_POOL: Vec<u8> = compose(&[LOWERCASE, UPPERCASE]);
    static ref HARD_POOL: Vec<u8> = compose(&[LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]);
    static ref EXTRA_HARD_POOL: Vec<u8> = compose(&[LOWERCASE, DIGITS, SYMBOLS, UPPERCASE]);
}

fn compose(classes: &[&[u8]]) -> Vec<u8> {
    let mut chars = Vec::new();
    for class in classes {
        chars.extend_from_slice(class);
    }
    chars
}

/// Character pool for a complexity tier.
///
/// Composition is fixed per tier; the classes are disjoint, so the pools
/// contain no duplicates, and ordering carries no meaning.
pub fn character_pool(complexity: ComplexityLevel) -> &'static [u8] {
    match complexity {
        ComplexityLevel::Easy => &EASY_POOL,
        ComplexityLevel::Medium => &MEDIUM_POOL,
        ComplexityLevel::Hard => &HARD_POOL,
        ComplexityLevel::ExtraHard => &EXTRA_HARD_POOL,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn as_set(pool: &[u8]) -> HashSet<u8> {
        pool.iter().copied().collect()
    }

    #[test]
    fn easy_pool_is_lowercase_only() {
        assert_eq!(character_pool(ComplexityLevel::Easy), LOWERCASE);
    }

    #[test]
    fn medium_pool_is_both_letter_cases() {
        let pool = character_pool(ComplexityLevel::Medium);
        assert_eq!(pool.len(), 52);
        assert_eq!(as_set(pool), as_set(&[LOWERCASE, UPPERCASE].concat()));
    }

    #[test]
    fn hard_pool_holds_all_four_classes() {
        let pool = character_pool(ComplexityLevel::Hard);
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.len());
        for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
            assert!(class.iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn hard_and_extra_hard_pools_are_the_same_set() {
        let hard = character_pool(ComplexityLevel::Hard);
        let extra_hard = character_pool(ComplexityLevel::ExtraHard);
        assert_eq!(as_set(hard), as_set(extra_hard));
    }

    #[test]
    fn pools_have_no_duplicates() {
        for level in [
            ComplexityLevel::Easy,
            ComplexityLevel::Medium,
            ComplexityLevel::Hard,
            ComplexityLevel::ExtraHard,
        ] {
            let pool = character_pool(level);
            assert_eq!(as_set(pool).len(), pool.len());
        }
    }
}
