//! Length section - rewards reaching the length milestones.

use super::SectionPoints;

/// Length earning the first point.
pub const MIN_LENGTH: usize = 8;

/// Length earning the second point.
pub const LONG_LENGTH: usize = 12;

/// Awards one point per length milestone reached (0..=2).
///
/// Length is counted in chars, so multi-byte characters count once.
pub fn length_section(password: &str) -> SectionPoints {
    let len = password.chars().count();
    [MIN_LENGTH, LONG_LENGTH]
        .iter()
        .filter(|&&milestone| len >= milestone)
        .count() as SectionPoints
}
