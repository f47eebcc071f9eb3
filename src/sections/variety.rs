//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use super::SectionPoints;

/// Character classes that each earn one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterVariety {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    /// Anything outside `[A-Za-z0-9]`, including non-ASCII letters.
    pub special: bool,
}

impl CharacterVariety {
    pub fn of(password: &str) -> Self {
        Self {
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Awards one point per character class present (0..=4).
pub fn character_variety_section(password: &str) -> SectionPoints {
    CharacterVariety::of(password).count() as SectionPoints
}
