//! Score, tier and presentation types shared by the scorer and the form.

use std::fmt;

/// Number of strength predicates a password can satisfy.
///
/// Always in `0..=Score::MAX`. Only the scorer builds non-zero values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Highest reachable score.
    pub const MAX: u8 = 6;

    /// Minimum score for the medium tier (and for enabling submission).
    pub const MEDIUM_THRESHOLD: u8 = 4;

    /// Minimum score for the strong tier.
    pub const STRONG_THRESHOLD: u8 = 6;

    /// Score of the empty password.
    pub const ZERO: Score = Score(0);

    /// Builds a score, clamping anything above [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Raw number of satisfied predicates.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Tier this score falls into.
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(*self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Categorical strength derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrengthTier {
    /// Nothing typed yet.
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Maps a score onto a tier.
    ///
    /// A score of zero is only reachable by the empty password, so it maps to
    /// [`StrengthTier::None`] rather than [`StrengthTier::Weak`].
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0 => StrengthTier::None,
            s if s < Score::MEDIUM_THRESHOLD => StrengthTier::Weak,
            s if s < Score::STRONG_THRESHOLD => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    /// Lower-case label (`""` for the none tier).
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }

    /// Severity paired with this tier, if any.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            StrengthTier::None => None,
            StrengthTier::Weak => Some(Severity::Danger),
            StrengthTier::Medium => Some(Severity::Warning),
            StrengthTier::Strong => Some(Severity::Success),
        }
    }

    /// Feedback message shown under the password field.
    pub fn feedback(&self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "Password is too weak",
            StrengthTier::Medium => "Password strength: Medium",
            StrengthTier::Strong => "Password strength: Strong",
        }
    }

    pub fn presentation(&self) -> FeedbackPresentation {
        FeedbackPresentation {
            label: self.feedback(),
            severity: self.severity(),
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation hint rendered as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Danger,
    Warning,
    Success,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Danger => "is-danger",
            Severity::Warning => "is-warning",
            Severity::Success => "is-success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Label text and severity for a tier. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackPresentation {
    pub label: &'static str,
    pub severity: Option<Severity>,
}

impl FeedbackPresentation {
    /// CSS class for the severity, `""` when there is none.
    pub fn css_class(&self) -> &'static str {
        self.severity.map(|s| s.css_class()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        let tiers: Vec<StrengthTier> = (0..=Score::MAX).map(|s| Score::new(s).tier()).collect();
        assert_eq!(
            tiers,
            vec![
                StrengthTier::None,
                StrengthTier::Weak,
                StrengthTier::Weak,
                StrengthTier::Weak,
                StrengthTier::Medium,
                StrengthTier::Medium,
                StrengthTier::Strong,
            ]
        );
    }

    #[test]
    fn test_score_new_clamps() {
        assert_eq!(Score::new(42).value(), Score::MAX);
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn test_none_tier_has_no_presentation() {
        let p = StrengthTier::None.presentation();
        assert_eq!(p.label, "");
        assert_eq!(p.severity, None);
        assert_eq!(p.css_class(), "");
    }

    #[test]
    fn test_severity_pairs_with_tier() {
        assert_eq!(StrengthTier::Weak.severity(), Some(Severity::Danger));
        assert_eq!(StrengthTier::Medium.severity(), Some(Severity::Warning));
        assert_eq!(StrengthTier::Strong.presentation().css_class(), "is-success");
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(5).to_string(), "5/6");
        assert_eq!(StrengthTier::Medium.to_string(), "medium");
        assert_eq!(Severity::Danger.to_string(), "is-danger");
    }
}
