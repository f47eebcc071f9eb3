//! Password strength feedback library
//!
//! This library scores passwords and keeps the live feedback of a
//! password + confirmation form (strength tier, severity class, match
//! message, submit gating) in sync with what the user types. It also carries
//! the small helpers used around authentication forms: email normalization,
//! flash message dismissal and the account deletion prompt.
//!
//! # Features
//!
//! - `async` (default): Enables the async form binding and message dismissal
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FEEDBACK_DISMISS_MS`: flash message visible time (default: `5000`)
//! - `PWD_FEEDBACK_FADE_MS`: flash message fade-out time (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_feedback::{PasswordForm, StrengthTier, score};
//! use secrecy::SecretString;
//!
//! assert_eq!(score("Password123!").value(), 6);
//!
//! let mut form = PasswordForm::new();
//! form.set_primary(SecretString::new("Password1".to_string().into()));
//! form.set_confirmation(SecretString::new("Password1".to_string().into()));
//!
//! assert_eq!(form.strength(), StrengthTier::Medium);
//! assert_eq!(form.feedback(), "Password strength: Medium");
//! assert_eq!(form.match_message(), "Passwords match");
//! assert!(!form.is_submit_disabled());
//! ```

// Internal modules
mod config;
mod deletion;
mod email;
mod form;
mod messages;
mod scorer;
mod sections;
mod types;

#[cfg(feature = "async")]
mod binding;

// Public API
pub use config::{ConfigError, FeedbackConfig};
pub use deletion::{DELETE_ACCOUNT_PROMPT, SubmitDecision, confirm_account_deletion};
pub use email::normalize_email;
pub use form::{FormSnapshot, MATCH_MESSAGE, MISMATCH_MESSAGE, PasswordForm};
pub use messages::{DismissPhase, DismissSchedule};
pub use scorer::{matches, matches_secret, score, score_secret};
pub use types::{FeedbackPresentation, Score, Severity, StrengthTier};

#[cfg(feature = "async")]
pub use binding::{FormEvent, drive_form};

#[cfg(feature = "async")]
pub use messages::run_dismiss;
