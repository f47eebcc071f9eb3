//! Password form view-model.
//!
//! Holds the primary and confirmation passwords and keeps every derived
//! projection in sync with them. Any UI binding drives it through
//! [`PasswordForm::set_primary`] and [`PasswordForm::set_confirmation`] and
//! renders the read-only projections or a [`FormSnapshot`].

use secrecy::{ExposeSecret, SecretString};

use crate::scorer::{matches_secret, score_secret};
use crate::types::{FeedbackPresentation, Score, Severity, StrengthTier};

pub const MATCH_MESSAGE: &str = "Passwords match";
pub const MISMATCH_MESSAGE: &str = "Passwords do not match";

/// View-model behind a password + confirmation form.
#[derive(Debug)]
pub struct PasswordForm {
    primary: SecretString,
    confirmation: SecretString,
    score: Score,
    tier: StrengthTier,
    passwords_match: bool,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordForm {
    /// Empty form: score 0, none tier, no match.
    pub fn new() -> Self {
        Self {
            primary: empty_secret(),
            confirmation: empty_secret(),
            score: Score::ZERO,
            tier: StrengthTier::None,
            passwords_match: false,
        }
    }

    /// Replaces the primary password and recomputes strength and match.
    pub fn set_primary(&mut self, password: SecretString) {
        self.primary = password;
        self.recompute_strength();
        self.recompute_match();
    }

    /// Replaces the confirmation password and recomputes the match only.
    pub fn set_confirmation(&mut self, password: SecretString) {
        self.confirmation = password;
        self.recompute_match();
    }

    /// Recomputes every derived value from the current inputs.
    pub fn refresh(&mut self) {
        self.recompute_strength();
        self.recompute_match();
    }

    fn recompute_strength(&mut self) {
        self.score = score_secret(&self.primary);
        self.tier = self.score.tier();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password strength recomputed: len={} score={} tier={}",
            self.primary.expose_secret().chars().count(),
            self.score,
            self.tier
        );
    }

    fn recompute_match(&mut self) {
        self.passwords_match = matches_secret(&self.primary, &self.confirmation);
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Value for a progress-bar indicator, in `0..=Score::MAX`.
    pub fn progress_value(&self) -> u8 {
        self.score.value()
    }

    pub fn strength(&self) -> StrengthTier {
        self.tier
    }

    pub fn severity(&self) -> Option<Severity> {
        self.tier.severity()
    }

    pub fn feedback(&self) -> &'static str {
        self.tier.feedback()
    }

    pub fn presentation(&self) -> FeedbackPresentation {
        self.tier.presentation()
    }

    pub fn passwords_match(&self) -> bool {
        self.passwords_match
    }

    fn has_confirmation(&self) -> bool {
        !self.confirmation.expose_secret().is_empty()
    }

    /// Submission is blocked by a weak score, or by a typed confirmation
    /// that does not match. An empty confirmation never blocks on its own.
    pub fn is_submit_disabled(&self) -> bool {
        self.score.value() < Score::MEDIUM_THRESHOLD
            || (self.has_confirmation() && !self.passwords_match)
    }

    /// `""` until a confirmation is typed.
    pub fn match_message(&self) -> &'static str {
        if !self.has_confirmation() {
            return "";
        }
        if self.passwords_match {
            MATCH_MESSAGE
        } else {
            MISMATCH_MESSAGE
        }
    }

    pub fn match_message_class(&self) -> &'static str {
        if self.passwords_match {
            Severity::Success.css_class()
        } else {
            Severity::Danger.css_class()
        }
    }

    /// Captures every projection at once, without password material.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            score: self.score,
            strength: self.tier,
            severity: self.severity(),
            feedback: self.feedback(),
            passwords_match: self.passwords_match,
            submit_disabled: self.is_submit_disabled(),
            match_message: self.match_message(),
            match_message_class: self.match_message_class(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

/// Rendered state of a [`PasswordForm`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSnapshot {
    pub score: Score,
    pub strength: StrengthTier,
    pub severity: Option<Severity>,
    pub feedback: &'static str,
    pub passwords_match: bool,
    pub submit_disabled: bool,
    pub match_message: &'static str,
    pub match_message_class: &'static str,
}

impl FormSnapshot {
    pub fn progress_value(&self) -> u8 {
        self.score.value()
    }
}
