//! Password scoring sections
//!
//! Each section checks one aspect of the password and awards points.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points awarded by a single section.
pub type SectionPoints = u8;

/// Signature shared by every scoring section.
pub type SectionFn = fn(&str) -> SectionPoints;
