//! Password strength scorer - main scoring logic and the match check.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{SectionFn, character_variety_section, length_section};
use crate::types::Score;

/// Scores a password by summing the points of every section.
///
/// Total over all strings: the empty string scores 0 and the result never
/// exceeds [`Score::MAX`].
pub fn score(password: &str) -> Score {
    // Orchestrator: sections are independent, order does not matter
    let sections: [(&str, SectionFn); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut total: u8 = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} awarded {} points", _section_name, points);
        total = total.saturating_add(points);
    }

    Score::new(total)
}

/// Same as [`score`] for a password held as a secret.
pub fn score_secret(password: &SecretString) -> Score {
    score(password.expose_secret())
}

/// Checks whether the confirmation matches the primary password.
///
/// An empty confirmation never matches: there is nothing to compare yet.
/// Otherwise the comparison is exact and case-sensitive.
pub fn matches(primary: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && primary == confirmation
}

/// Same as [`matches`] for passwords held as secrets.
pub fn matches_secret(primary: &SecretString, confirmation: &SecretString) -> bool {
    matches(primary.expose_secret(), confirmation.expose_secret())
}
