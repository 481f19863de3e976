//! Traveler identity and the login/signup forms.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Traveler profile picked at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "kebab-case")]
pub enum TravelerType {
    #[default]
    EcoConscious,
    Backpacker,
    Family,
    Adventure,
    Local,
}

impl TravelerType {
    pub const ALL: [TravelerType; 5] = [
        TravelerType::EcoConscious,
        TravelerType::Backpacker,
        TravelerType::Family,
        TravelerType::Adventure,
        TravelerType::Local,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TravelerType::EcoConscious => "Eco-Conscious Traveler",
            TravelerType::Backpacker => "Backpacker/Student",
            TravelerType::Family => "Family Traveler",
            TravelerType::Adventure => "Adventure Seeker",
            TravelerType::Local => "Local Explorer",
        }
    }
}

/// The current user record, as held in the session store under `"user"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler_type: Option<TravelerType>,
}

/// Sign-in form. Any non-empty email/password pair is accepted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Account creation form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub traveler_type: TravelerType,
}

impl LoginForm {
    /// Display name derived from the email's local part.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}
